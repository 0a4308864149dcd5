use crate::geometry::TilePoint;

/// The view embedding a grid: supplies tile pixels and answers capability
/// queries, and receives redraw and capture requests from the engine.
///
/// Only `render_tiles` and `is_selection_mode` are required; the rest default
/// to no-ops.
pub trait GridHost {
    /// RGBA8 rows for the `width` × `height` window of the content plane whose
    /// top-left is at `(scroll_x, scroll_y)`, at the given zoom. `None` draws
    /// nothing this frame.
    fn render_tiles(&self, scroll_x: u32, scroll_y: u32, width: u32, height: u32, zoom: u32) -> Option<Vec<u8>>;

    /// Whether clicking empty content starts a rectangle selection.
    fn is_selection_mode(&self) -> bool;

    fn suppress_hover_highlight(&self) -> bool {
        false
    }

    fn on_tile_hovered(&mut self, _tile: Option<TilePoint>) {}

    /// Content click while selection mode is off.
    fn on_tile_pressed(&mut self, _tile: TilePoint) {}

    fn capture_pointer(&mut self) {}

    fn release_pointer(&mut self) {}

    fn invalidate_content(&mut self) {}

    fn invalidate_margins(&mut self) {}

    /// Scrollbar range, in pixels of the content plane at the current zoom.
    fn set_scroll_range(&mut self, _content_width: u32, _content_height: u32) {}
}
