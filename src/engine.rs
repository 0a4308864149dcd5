//! Pointer and keyboard handling for a grid view.
//!
//! The engine owns the view's [`GridState`] and the injected [`GridHost`].
//! Gestures follow `Idle → {Creating, Moving, Resizing, ResizingMargin} → Idle`;
//! `begin_gesture` and `end_gesture` are the only transitions. Every selection
//! it produces lies inside the grid and is at least one tile on each axis.

use crate::geometry::{clamp_tile, Axis, EdgeMask, TilePoint, TileRect};
use crate::grid::{DragGesture, GridState, Hover, MAX_ZOOM};
use crate::hit_test::{hit_test, hover_at, pointer_tile, HitResult, MarginEdge};
use crate::host::GridHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    Left,
    Right,
    Up,
    Down,
    Escape,
}

impl GridKey {
    fn delta(self) -> Option<(i64, i64)> {
        match self {
            GridKey::Left => Some((-1, 0)),
            GridKey::Right => Some((1, 0)),
            GridKey::Up => Some((0, -1)),
            GridKey::Down => Some((0, 1)),
            GridKey::Escape => None,
        }
    }
}

pub struct GridEngine<H: GridHost> {
    state: GridState,
    host: H,
    /// Last pointer position inside the view, for re-resolving hover when
    /// the content moves under a still pointer.
    pointer: Option<(i64, i64)>,
}

impl<H: GridHost> GridEngine<H> {
    /// Takes ownership of `state`, pulling any out-of-range field back into
    /// the grid first.
    pub fn new(mut state: GridState, host: H) -> Self {
        state.clamp_to_bounds();
        let mut engine = Self { state, host, pointer: None };
        engine.publish_scroll_range();
        engine
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn hit_test(&self, pos: (i64, i64)) -> HitResult {
        hit_test(&self.state, pos)
    }

    pub fn begin_gesture(&mut self, hit: HitResult, pos: (i64, i64)) {
        let before = self.state.selection;
        // A press without a matching release leaves the old gesture behind.
        self.state.gesture = DragGesture::None;

        match hit {
            HitResult::Margin { edge: MarginEdge::Corner } => self.toggle_select_all(),
            HitResult::Margin { edge: MarginEdge::Left } => self.begin_margin(Axis::Y, pos),
            HitResult::Margin { edge: MarginEdge::Top } => self.begin_margin(Axis::X, pos),
            HitResult::Selection { edges, is_interior } => match self.state.selection {
                Some(selection) if is_interior => {
                    let (tx, ty) = pointer_tile(&self.state, pos);
                    self.state.gesture = DragGesture::MovingSelection {
                        grab: (tx - selection.x as i64, ty - selection.y as i64),
                    };
                }
                Some(selection) => {
                    self.state.gesture = DragGesture::ResizingSelection { edges, pinned: selection };
                }
                None => {}
            },
            HitResult::Content => {
                let (tx, ty) = pointer_tile(&self.state, pos);
                if self.state.tiles_x > 0 && self.state.tiles_y > 0 {
                    let tile = TilePoint::new(clamp_tile(tx, self.state.tiles_x), clamp_tile(ty, self.state.tiles_y));
                    if self.host.is_selection_mode() {
                        self.state.selection = Some(TileRect::new(tile.x, tile.y, 1, 1));
                        self.state.gesture = DragGesture::CreatingSelection { anchor: tile };
                    } else {
                        self.host.on_tile_pressed(tile);
                    }
                }
            }
            HitResult::Nowhere => {
                if self.host.is_selection_mode() {
                    self.state.selection = None;
                }
            }
        }

        if self.state.gesture.is_active() {
            log::debug!("Gesture started: {:?} at {:?}", self.state.gesture, pos);
            self.host.capture_pointer();
        }
        self.refresh_hover(pos);
        self.selection_changed(before);
    }

    /// Row (`Axis::Y`) or column (`Axis::X`) selection from a margin click,
    /// spanning the whole grid on the other axis.
    fn begin_margin(&mut self, axis: Axis, pos: (i64, i64)) {
        let Some(full) = self.state.full_rect() else {
            return;
        };
        let (tx, ty) = pointer_tile(&self.state, pos);
        let (tile, tiles) = match axis {
            Axis::X => (tx, self.state.tiles_x),
            Axis::Y => (ty, self.state.tiles_y),
        };
        if tile < 0 || tile >= tiles as i64 {
            return;
        }
        let tile = tile as u32;
        self.state.selection = Some(full.with_span(axis, tile, 1));
        self.state.gesture = DragGesture::ResizingMarginSelection { axis, anchor: tile };
    }

    fn toggle_select_all(&mut self) {
        if self.state.is_full_selection() {
            self.state.selection = None;
        } else if let Some(full) = self.state.full_rect() {
            self.state.selection = Some(full);
        }
    }

    pub fn update_gesture(&mut self, pos: (i64, i64)) {
        let before = self.state.selection;
        let (tiles_x, tiles_y) = (self.state.tiles_x, self.state.tiles_y);
        let (tx, ty) = pointer_tile(&self.state, pos);

        match (self.state.gesture, self.state.selection) {
            (DragGesture::None, _) => {}
            (DragGesture::MovingSelection { grab }, Some(selection)) => {
                self.state.selection = Some(selection.translated_within(tx - grab.0, ty - grab.1, tiles_x, tiles_y));
            }
            (DragGesture::ResizingSelection { edges, pinned }, Some(_)) => {
                let mut left = pinned.x;
                let mut top = pinned.y;
                let mut right = pinned.right() - 1;
                let mut bottom = pinned.bottom() - 1;
                // A moving edge stops one tile short of the pinned one.
                if edges.contains(EdgeMask::LEFT) {
                    left = clamp_tile(tx, tiles_x).min(right);
                }
                if edges.contains(EdgeMask::RIGHT) {
                    right = clamp_tile(tx, tiles_x).max(left);
                }
                if edges.contains(EdgeMask::TOP) {
                    top = clamp_tile(ty, tiles_y).min(bottom);
                }
                if edges.contains(EdgeMask::BOTTOM) {
                    bottom = clamp_tile(ty, tiles_y).max(top);
                }
                self.state.selection = Some(TileRect::new(left, top, right - left + 1, bottom - top + 1));
            }
            (DragGesture::CreatingSelection { anchor }, _) => {
                let current = TilePoint::new(clamp_tile(tx, tiles_x), clamp_tile(ty, tiles_y));
                self.state.selection = Some(TileRect::from_corners(anchor, current));
            }
            (DragGesture::ResizingMarginSelection { axis, anchor }, Some(selection)) => {
                let current = match axis {
                    Axis::X => clamp_tile(tx, tiles_x),
                    Axis::Y => clamp_tile(ty, tiles_y),
                };
                let start = anchor.min(current);
                let end = anchor.max(current);
                self.state.selection = Some(selection.with_span(axis, start, end - start + 1));
            }
            (gesture, None) => {
                log::warn!("Gesture {:?} lost its selection, ending it", gesture);
                self.end_gesture();
            }
        }

        self.refresh_hover(pos);
        self.selection_changed(before);
    }

    pub fn end_gesture(&mut self) {
        if !self.state.gesture.is_active() {
            return;
        }
        log::debug!("Gesture ended: {:?}, selection {:?}", self.state.gesture, self.state.selection);
        self.state.gesture = DragGesture::None;
        self.host.release_pointer();
        // Selection tint drops back to the idle strength.
        self.host.invalidate_content();
    }

    pub fn keyboard(&mut self, key: GridKey, shift_held: bool) {
        let before = self.state.selection;
        match key.delta() {
            None => {
                self.end_gesture();
                self.state.selection = None;
            }
            Some((dx, dy)) => {
                let Some(selection) = self.state.selection else {
                    return;
                };
                let (tiles_x, tiles_y) = (self.state.tiles_x as i64, self.state.tiles_y as i64);
                if shift_held {
                    // Top-left stays put; the bottom-right corner moves.
                    let far_x = (selection.right() as i64 - 1 + dx).clamp(selection.x as i64, tiles_x - 1);
                    let far_y = (selection.bottom() as i64 - 1 + dy).clamp(selection.y as i64, tiles_y - 1);
                    self.state.selection = Some(TileRect::new(
                        selection.x,
                        selection.y,
                        (far_x - selection.x as i64 + 1) as u32,
                        (far_y - selection.y as i64 + 1) as u32,
                    ));
                } else {
                    let x = selection.x as i64 + dx;
                    let y = selection.y as i64 + dy;
                    if x < 0
                        || y < 0
                        || x + selection.width as i64 > tiles_x
                        || y + selection.height as i64 > tiles_y
                    {
                        return;
                    }
                    self.state.selection = Some(TileRect { x: x as u32, y: y as u32, ..selection });
                }
            }
        }
        self.selection_changed(before);
    }

    pub fn pointer_down(&mut self, pos: (i64, i64)) {
        let hit = self.hit_test(pos);
        self.begin_gesture(hit, pos);
    }

    pub fn pointer_move(&mut self, pos: (i64, i64)) {
        if self.state.gesture.is_active() {
            self.update_gesture(pos);
        } else {
            self.refresh_hover(pos);
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// The pointer left the view. Hover is kept while a gesture holds capture.
    pub fn pointer_leave(&mut self) {
        if !self.state.gesture.is_active() {
            self.pointer = None;
            self.set_hover(None);
        }
    }

    pub fn select_all(&mut self) {
        let before = self.state.selection;
        if let Some(full) = self.state.full_rect() {
            self.state.selection = Some(full);
        }
        self.selection_changed(before);
    }

    /// Replaces the selection, clipped to the grid. Empty rectangles clear it.
    pub fn set_selection(&mut self, selection: Option<TileRect>) {
        let before = self.state.selection;
        self.state.selection = selection.and_then(|sel| sel.clamp_into(self.state.tiles_x, self.state.tiles_y));
        self.selection_changed(before);
    }

    pub fn resize(&mut self, tiles_x: u32, tiles_y: u32) {
        if self.state.resize(tiles_x, tiles_y) {
            self.host.release_pointer();
        }
        self.publish_scroll_range();
        self.view_moved();
        self.invalidate_all();
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        if zoom.clamp(1, MAX_ZOOM) == self.state.zoom {
            return;
        }
        self.state.set_zoom(zoom);
        log::debug!("Zoom {}x, scroll ({}, {})", self.state.zoom, self.state.scroll_x, self.state.scroll_y);
        self.publish_scroll_range();
        self.view_moved();
        self.invalidate_all();
    }

    pub fn set_scroll(&mut self, x: i64, y: i64) {
        self.state.set_scroll(x, y);
        self.view_moved();
        self.invalidate_all();
    }

    pub fn scroll_by(&mut self, dx: i64, dy: i64) {
        self.state.scroll_by(dx, dy);
        self.view_moved();
        self.invalidate_all();
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.state.set_viewport(width, height);
        self.view_moved();
        self.invalidate_all();
    }

    pub fn toggle_borders(&mut self) {
        self.state.show_borders = !self.state.show_borders;
        self.host.invalidate_content();
    }

    fn refresh_hover(&mut self, pos: (i64, i64)) {
        self.pointer = Some(pos);
        let hover = hover_at(&self.state, pos);
        self.set_hover(hover);
    }

    /// Scroll, zoom or extent changed; the pointer may now rest on another tile.
    fn view_moved(&mut self) {
        if let Some(pos) = self.pointer {
            self.refresh_hover(pos);
        }
    }

    fn set_hover(&mut self, hover: Option<Hover>) {
        if hover == self.state.hover {
            return;
        }
        let old_tile = self.state.hover.and_then(|h| h.tile());
        self.state.hover = hover;
        let new_tile = hover.and_then(|h| h.tile());
        if old_tile != new_tile {
            log::trace!("Hovered tile {:?}", new_tile);
            self.host.on_tile_hovered(new_tile);
        }
        self.invalidate_all();
    }

    fn selection_changed(&mut self, before: Option<TileRect>) {
        if self.state.selection != before {
            self.invalidate_all();
        }
    }

    fn publish_scroll_range(&mut self) {
        let (width, height) = self.state.content_size();
        self.host.set_scroll_range(width, height);
    }

    fn invalidate_all(&mut self) {
        self.host.invalidate_content();
        self.host.invalidate_margins();
    }
}
