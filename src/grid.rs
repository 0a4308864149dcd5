use crate::config::GridConfig;
use crate::geometry::{Axis, EdgeMask, TilePoint, TileRect};

/// What the pointer currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Tile(TilePoint),
    /// Left margin, resolved to a row only.
    Row(u32),
    /// Top margin, resolved to a column only.
    Column(u32),
}

impl Hover {
    pub fn tile(&self) -> Option<TilePoint> {
        match self {
            Hover::Tile(point) => Some(*point),
            _ => None,
        }
    }

    pub fn column(&self) -> Option<u32> {
        match self {
            Hover::Tile(point) => Some(point.x),
            Hover::Column(x) => Some(*x),
            Hover::Row(_) => None,
        }
    }

    pub fn row(&self) -> Option<u32> {
        match self {
            Hover::Tile(point) => Some(point.y),
            Hover::Row(y) => Some(*y),
            Hover::Column(_) => None,
        }
    }
}

/// The single pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    None,
    /// Only the edges in `edges` follow the pointer; the rest stay where `pinned` has them.
    ResizingSelection { edges: EdgeMask, pinned: TileRect },
    /// Pointer tile minus selection origin at the time of the click.
    MovingSelection { grab: (i64, i64) },
    CreatingSelection { anchor: TilePoint },
    /// Row (`Axis::Y`) or column (`Axis::X`) span dragged from a margin.
    ResizingMarginSelection { axis: Axis, anchor: u32 },
}

impl DragGesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, DragGesture::None)
    }

    /// Move and resize gestures get the stronger selection tint.
    pub fn is_live_edit(&self) -> bool {
        matches!(
            self,
            DragGesture::MovingSelection { .. } | DragGesture::ResizingSelection { .. }
        )
    }
}

/// Largest zoom factor a view accepts.
pub const MAX_ZOOM: u32 = 64;

/// State of one grid view. Created with the view, dropped with it.
#[derive(Debug, Clone)]
pub struct GridState {
    pub tile_size: (u32, u32),
    pub tiles_x: u32,
    pub tiles_y: u32,
    pub zoom: u32,
    pub scroll_x: u32,
    pub scroll_y: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub selection: Option<TileRect>,
    pub hover: Option<Hover>,
    pub gesture: DragGesture,
    pub show_borders: bool,
}

impl GridState {
    pub fn new(tile_size: (u32, u32), tiles_x: u32, tiles_y: u32) -> Self {
        Self {
            tile_size: (tile_size.0.max(1), tile_size.1.max(1)),
            tiles_x,
            tiles_y,
            zoom: 1,
            scroll_x: 0,
            scroll_y: 0,
            viewport_width: 0,
            viewport_height: 0,
            selection: None,
            hover: None,
            gesture: DragGesture::None,
            show_borders: false,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        let mut state = Self::new((config.tile_width, config.tile_height), config.tiles_x, config.tiles_y);
        state.set_zoom(config.zoom);
        state.show_borders = config.show_borders;
        state.set_viewport(config.viewport_width, config.viewport_height);
        state
    }

    /// Zoomed tile size in pixels, saturating at `u32::MAX`.
    pub fn tile_px(&self) -> (u32, u32) {
        (
            self.tile_size.0.saturating_mul(self.zoom),
            self.tile_size.1.saturating_mul(self.zoom),
        )
    }

    /// Size of the whole content plane at the current zoom, saturating at `u32::MAX`.
    pub fn content_size(&self) -> (u32, u32) {
        let (tw, th) = self.tile_px();
        (self.tiles_x.saturating_mul(tw), self.tiles_y.saturating_mul(th))
    }

    pub fn max_scroll(&self) -> (u32, u32) {
        let (cw, ch) = self.content_size();
        (
            cw.saturating_sub(self.viewport_width),
            ch.saturating_sub(self.viewport_height),
        )
    }

    pub fn set_scroll(&mut self, x: i64, y: i64) {
        let (max_x, max_y) = self.max_scroll();
        self.scroll_x = x.clamp(0, max_x as i64) as u32;
        self.scroll_y = y.clamp(0, max_y as i64) as u32;
    }

    pub fn scroll_by(&mut self, dx: i64, dy: i64) {
        self.set_scroll(self.scroll_x as i64 + dx, self.scroll_y as i64 + dy);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.set_scroll(self.scroll_x as i64, self.scroll_y as i64);
    }

    /// Changes zoom, keeping the same content point at the viewport origin.
    /// The factor is clamped to `1..=MAX_ZOOM`.
    pub fn set_zoom(&mut self, zoom: u32) {
        let zoom = zoom.clamp(1, MAX_ZOOM);
        let old = self.zoom.max(1) as i64;
        self.zoom = zoom;
        let sx = self.scroll_x as i64 * zoom as i64 / old;
        let sy = self.scroll_y as i64 * zoom as i64 / old;
        self.set_scroll(sx, sy);
    }

    pub fn full_rect(&self) -> Option<TileRect> {
        TileRect::full(self.tiles_x, self.tiles_y)
    }

    pub fn is_full_selection(&self) -> bool {
        self.selection.is_some() && self.selection == self.full_rect()
    }

    /// Pulls every field of a hand-built state back into range: tile size and
    /// zoom, then selection, hover and scroll. Any gesture is dropped.
    pub fn clamp_to_bounds(&mut self) {
        self.tile_size = (self.tile_size.0.max(1), self.tile_size.1.max(1));
        self.set_zoom(self.zoom);
        self.resize(self.tiles_x, self.tiles_y);
    }

    /// Changes the grid extent. Selection and hover are clamped into the new
    /// bounds; an active gesture is cancelled. Returns whether one was.
    pub fn resize(&mut self, tiles_x: u32, tiles_y: u32) -> bool {
        self.tiles_x = tiles_x;
        self.tiles_y = tiles_y;
        self.selection = self.selection.and_then(|sel| sel.clamp_into(tiles_x, tiles_y));
        self.hover = self.hover.filter(|hover| {
            hover.column().map_or(true, |x| x < tiles_x) && hover.row().map_or(true, |y| y < tiles_y)
        });
        self.set_scroll(self.scroll_x as i64, self.scroll_y as i64);
        let cancelled = self.gesture.is_active();
        self.gesture = DragGesture::None;
        cancelled
    }
}
