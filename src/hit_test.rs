//! Classifies viewport-local pointer positions.
//!
//! Pointer coordinates are relative to the content viewport's top-left
//! corner; negative values lie in the margin strip.

use crate::geometry::{pixel_to_tile, tile_to_pixel_rect, EdgeMask, TilePoint, SEL_BORDER};
use crate::grid::{GridState, Hover};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginEdge {
    Left,
    Top,
    Corner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    Nowhere,
    Margin { edge: MarginEdge },
    Content,
    /// Inside the selection's grab zone. `is_interior` is set when no edge is
    /// close enough to resize.
    Selection { edges: EdgeMask, is_interior: bool },
}

pub fn hit_test(state: &GridState, pos: (i64, i64)) -> HitResult {
    let (px, py) = pos;
    match (px < 0, py < 0) {
        (true, true) => return HitResult::Margin { edge: MarginEdge::Corner },
        (true, false) => return HitResult::Margin { edge: MarginEdge::Left },
        (false, true) => return HitResult::Margin { edge: MarginEdge::Top },
        (false, false) => {}
    }
    if px >= state.viewport_width as i64 || py >= state.viewport_height as i64 {
        return HitResult::Nowhere;
    }

    let cx = px.saturating_add(state.scroll_x as i64);
    let cy = py.saturating_add(state.scroll_y as i64);

    // The selection covers whatever content lies beneath it, grab zone included.
    if let Some(selection) = state.selection {
        let outer = tile_to_pixel_rect(selection, state.tile_size, state.zoom).expand(SEL_BORDER);
        if outer.contains(cx, cy) {
            let mut edges = EdgeMask::empty();
            if cx < outer.x.saturating_add(SEL_BORDER) {
                edges |= EdgeMask::LEFT;
            }
            if cx >= outer.right() - SEL_BORDER {
                edges |= EdgeMask::RIGHT;
            }
            if cy < outer.y.saturating_add(SEL_BORDER) {
                edges |= EdgeMask::TOP;
            }
            if cy >= outer.bottom() - SEL_BORDER {
                edges |= EdgeMask::BOTTOM;
            }
            return HitResult::Selection {
                edges,
                is_interior: edges.is_empty(),
            };
        }
    }

    let (cw, ch) = state.content_size();
    if cx >= cw as i64 || cy >= ch as i64 {
        return HitResult::Nowhere;
    }
    HitResult::Content
}

/// Signed tile under the pointer. Not clamped; positions off the grid yield
/// indices outside `[0, tiles)`.
pub fn pointer_tile(state: &GridState, pos: (i64, i64)) -> (i64, i64) {
    let (tw, th) = state.tile_px();
    (
        pixel_to_tile(pos.0.saturating_add(state.scroll_x as i64), tw),
        pixel_to_tile(pos.1.saturating_add(state.scroll_y as i64), th),
    )
}

/// What the pointer rests on, or `None` when it is over neither the grid nor
/// a margin cell belonging to it.
pub fn hover_at(state: &GridState, pos: (i64, i64)) -> Option<Hover> {
    let (px, py) = pos;
    if px >= state.viewport_width as i64 || py >= state.viewport_height as i64 {
        return None;
    }
    let (tx, ty) = pointer_tile(state, pos);
    let column = (tx >= 0 && tx < state.tiles_x as i64).then_some(tx as u32);
    let row = (ty >= 0 && ty < state.tiles_y as i64).then_some(ty as u32);
    match (px < 0, py < 0) {
        (true, true) => None,
        (true, false) => row.map(Hover::Row),
        (false, true) => column.map(Hover::Column),
        (false, false) => {
            let (x, y) = (column?, row?);
            Some(Hover::Tile(TilePoint::new(x, y)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TileRect;

    fn state() -> GridState {
        let mut state = GridState::new((8, 8), 16, 16);
        state.set_viewport(100, 100);
        state
    }

    #[test]
    fn negative_coordinates_hit_margins() {
        let state = state();
        assert_eq!(hit_test(&state, (-3, -3)), HitResult::Margin { edge: MarginEdge::Corner });
        assert_eq!(hit_test(&state, (-3, 40)), HitResult::Margin { edge: MarginEdge::Left });
        assert_eq!(hit_test(&state, (40, -1)), HitResult::Margin { edge: MarginEdge::Top });
    }

    #[test]
    fn outside_viewport_or_grid_is_nowhere() {
        let mut state = state();
        assert_eq!(hit_test(&state, (100, 5)), HitResult::Nowhere);
        state.resize(4, 4);
        assert_eq!(hit_test(&state, (40, 5)), HitResult::Nowhere);
        assert_eq!(hit_test(&state, (31, 31)), HitResult::Content);
    }

    #[test]
    fn selection_edges_come_from_the_grab_zone() {
        let mut state = state();
        state.selection = Some(TileRect::new(2, 2, 4, 4));
        // Pixel box is [16, 48) on both axes.
        assert_eq!(
            hit_test(&state, (14, 30)),
            HitResult::Selection { edges: EdgeMask::LEFT, is_interior: false }
        );
        assert_eq!(
            hit_test(&state, (50, 50)),
            HitResult::Selection { edges: EdgeMask::RIGHT | EdgeMask::BOTTOM, is_interior: false }
        );
        assert_eq!(
            hit_test(&state, (16, 16)),
            HitResult::Selection { edges: EdgeMask::empty(), is_interior: true }
        );
        assert_eq!(hit_test(&state, (12, 30)), HitResult::Content);
    }

    #[test]
    fn scroll_shifts_content_coordinates() {
        let mut state = state();
        state.set_scroll(16, 0);
        state.selection = Some(TileRect::new(2, 0, 1, 1));
        assert_eq!(
            hit_test(&state, (0, 0)),
            HitResult::Selection { edges: EdgeMask::empty(), is_interior: true }
        );
        assert_eq!(pointer_tile(&state, (-1, 0)), (1, 0));
    }

    #[test]
    fn hover_resolves_margins_to_rows_and_columns() {
        let state = state();
        assert_eq!(hover_at(&state, (-4, 17)), Some(Hover::Row(2)));
        assert_eq!(hover_at(&state, (9, -4)), Some(Hover::Column(1)));
        assert_eq!(hover_at(&state, (9, 17)), Some(Hover::Tile(TilePoint::new(1, 2))));
        assert_eq!(hover_at(&state, (-1, -1)), None);
    }
}
