//! Draws a grid view into RGBA8 scratch buffers: the content viewport and the
//! ruler margins. Rendering only reads [`GridState`].

use crate::geometry::{tile_to_pixel_rect, Axis, PixelRect, MARGIN_SIZE};
use crate::grid::{GridState, Hover};
use crate::host::GridHost;

pub const BACKGROUND: [u8; 4] = [32, 32, 32, 255];
pub const MARGIN_COLOR: [u8; 4] = [64, 64, 64, 255];
pub const TICK_COLOR: [u8; 4] = [160, 160, 160, 255];
pub const SELECTION_BAND: [u8; 4] = [104, 104, 48, 255];
pub const YELLOW: [u8; 4] = [255, 255, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const SELECT_ALL_COLOR: [u8; 4] = [64, 128, 64, 255];
pub const DESELECT_COLOR: [u8; 4] = [128, 64, 64, 255];

/// Every this many tiles the ruler tick is drawn longer.
const MAJOR_TICK_EVERY: i64 = 8;

#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut buffer = Self::default();
        buffer.resize(width, height);
        buffer
    }

    /// Reallocates to the new size. Old contents are discarded even when the
    /// size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(width as usize * height as usize * 4, 0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        let mut color = [0; 4];
        color.copy_from_slice(&self.data[index..index + 4]);
        Some(color)
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if let Some(index) = self.index(x, y) {
            self.data[index..index + 4].copy_from_slice(&color);
        }
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Moves every pixel of `rect` (clipped) `num/den` of the way toward `target`.
    pub fn blend_rect(&mut self, rect: PixelRect, target: [u8; 4], num: i32, den: i32) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i64);
        let y1 = rect.bottom().min(self.height as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(index) = self.index(x, y) {
                    for channel in 0..3 {
                        let c = self.data[index + channel] as i32;
                        let t = target[channel] as i32;
                        self.data[index + channel] = (c + (t - c) * num / den) as u8;
                    }
                }
            }
        }
    }

    pub fn invert_pixel(&mut self, x: i64, y: i64) {
        if let Some(index) = self.index(x, y) {
            for channel in 0..3 {
                self.data[index + channel] ^= 0xFF;
            }
        }
    }

    fn copy_from(&mut self, rows: &[u8]) {
        let len = rows.len().min(self.data.len());
        self.data[..len].copy_from_slice(&rows[..len]);
    }
}

/// The three margin pieces, borrowed from the renderer.
pub struct Margins<'a> {
    /// Viewport width × `MARGIN_SIZE`, above the content.
    pub top: &'a PixelBuffer,
    /// `MARGIN_SIZE` × viewport height, left of the content.
    pub left: &'a PixelBuffer,
    pub corner: &'a PixelBuffer,
}

#[derive(Default)]
pub struct GridRenderer {
    content: PixelBuffer,
    top: PixelBuffer,
    left: PixelBuffer,
    corner: PixelBuffer,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_content<H: GridHost>(&mut self, state: &GridState, host: &H) -> &PixelBuffer {
        let (width, height) = (state.viewport_width, state.viewport_height);
        let buffer = &mut self.content;
        buffer.resize(width, height);
        buffer.fill(BACKGROUND);

        match host.render_tiles(state.scroll_x, state.scroll_y, width, height, state.zoom) {
            Some(rows) => {
                if rows.len() != buffer.data().len() {
                    log::warn!(
                        "Tile render returned {} bytes for a {}x{} viewport",
                        rows.len(),
                        width,
                        height
                    );
                }
                buffer.copy_from(&rows);
            }
            None => log::trace!("No tile pixels this frame"),
        }

        let scroll = (state.scroll_x as i64, state.scroll_y as i64);
        let to_view = |rect: PixelRect| PixelRect {
            x: rect.x - scroll.0,
            y: rect.y - scroll.1,
            ..rect
        };

        if let Some(selection) = state.selection {
            let rect = to_view(tile_to_pixel_rect(selection, state.tile_size, state.zoom));
            let den = if state.gesture.is_live_edit() { 2 } else { 4 };
            buffer.blend_rect(rect, YELLOW, 1, den);
        }

        if !host.suppress_hover_highlight() {
            if let Some(rect) = hover_rect(state) {
                buffer.blend_rect(to_view(rect), WHITE, 1, 4);
            }
        }

        let (content_w, content_h) = state.content_size();
        if state.show_borders {
            let (tw, th) = state.tile_px();
            let visible_w = (content_w as i64 - scroll.0).min(width as i64);
            let visible_h = (content_h as i64 - scroll.1).min(height as i64);
            for y in 0..visible_h {
                let on_row_line = (y + scroll.1) % th as i64 == 0;
                for x in 0..visible_w {
                    if on_row_line || (x + scroll.0) % tw as i64 == 0 {
                        buffer.invert_pixel(x, y);
                    }
                }
            }
        }

        if let Some(selection) = state.selection {
            let rect = to_view(tile_to_pixel_rect(selection, state.tile_size, state.zoom));
            // An edge on the grid's last column/row would fall outside the grid.
            let right = if selection.right() >= state.tiles_x { rect.right() - 1 } else { rect.right() };
            let bottom = if selection.bottom() >= state.tiles_y { rect.bottom() - 1 } else { rect.bottom() };
            for x in rect.x.max(0)..=right.min(width as i64) {
                buffer.set_pixel(x, rect.y, YELLOW);
                buffer.set_pixel(x, bottom, YELLOW);
            }
            for y in rect.y.max(0)..=bottom.min(height as i64) {
                buffer.set_pixel(rect.x, y, YELLOW);
                buffer.set_pixel(right, y, YELLOW);
            }
        }

        &self.content
    }

    pub fn render_margins(&mut self, state: &GridState) -> Margins<'_> {
        self.top.resize(state.viewport_width, MARGIN_SIZE);
        self.left.resize(MARGIN_SIZE, state.viewport_height);
        self.corner.resize(MARGIN_SIZE, MARGIN_SIZE);

        draw_ruler(&mut self.top, Axis::X, state);
        draw_ruler(&mut self.left, Axis::Y, state);

        // Green when a click would select everything, red when it would clear.
        self.corner.fill(if state.is_full_selection() {
            DESELECT_COLOR
        } else {
            SELECT_ALL_COLOR
        });

        Margins {
            top: &self.top,
            left: &self.left,
            corner: &self.corner,
        }
    }
}

/// Content-plane rectangle of the hovered tile, row or column.
fn hover_rect(state: &GridState) -> Option<PixelRect> {
    let (tw, th) = state.tile_px();
    let (content_w, content_h) = state.content_size();
    match state.hover? {
        Hover::Tile(point) => Some(PixelRect {
            x: (point.x as i64).saturating_mul(tw as i64),
            y: (point.y as i64).saturating_mul(th as i64),
            width: tw as i64,
            height: th as i64,
        }),
        Hover::Row(y) => Some(PixelRect {
            x: 0,
            y: (y as i64).saturating_mul(th as i64),
            width: content_w as i64,
            height: th as i64,
        }),
        Hover::Column(x) => Some(PixelRect {
            x: (x as i64).saturating_mul(tw as i64),
            y: 0,
            width: tw as i64,
            height: content_h as i64,
        }),
    }
}

/// One ruler. `along` runs parallel to `axis`; `across` runs from the outer
/// edge (0) to the edge touching the content (`MARGIN_SIZE - 1`).
fn draw_ruler(buffer: &mut PixelBuffer, axis: Axis, state: &GridState) {
    let mut put = |along: i64, across: i64, color: [u8; 4]| match axis {
        Axis::X => buffer.set_pixel(along, across, color),
        Axis::Y => buffer.set_pixel(across, along, color),
    };

    let (tw, th) = state.tile_px();
    let (content_w, content_h) = state.content_size();
    let (length, scroll, tile_px, content) = match axis {
        Axis::X => (state.viewport_width, state.scroll_x, tw, content_w),
        Axis::Y => (state.viewport_height, state.scroll_y, th, content_h),
    };
    let tile_px = tile_px as i64;
    let hovered = state.hover.and_then(|hover| match axis {
        Axis::X => hover.column(),
        Axis::Y => hover.row(),
    });
    let selected = state.selection.map(|selection| {
        let (start, len) = selection.span(axis);
        (start as i64, start as i64 + len as i64)
    });
    let margin = MARGIN_SIZE as i64;

    for along in 0..length as i64 {
        let plane = along + scroll as i64;
        if plane >= content as i64 {
            for across in 0..margin {
                put(along, across, BACKGROUND);
            }
            continue;
        }
        let tile = plane / tile_px;

        let mut color = MARGIN_COLOR;
        if selected.map_or(false, |(start, end)| tile >= start && tile < end) {
            color = SELECTION_BAND;
        }
        if hovered == Some(tile as u32) {
            color = lighten(color);
        }
        for across in 0..margin {
            put(along, across, color);
        }

        if plane % tile_px == 0 {
            let tick = if tile % MAJOR_TICK_EVERY == 0 { margin / 2 } else { margin / 4 };
            for across in margin - tick..margin {
                put(along, across, TICK_COLOR);
            }
        }

        if let Some((start, end)) = selected {
            if plane == start.saturating_mul(tile_px) || plane == end.saturating_mul(tile_px) - 1 {
                for across in 0..margin {
                    put(along, across, YELLOW);
                }
            }
        }
    }
}

fn lighten(color: [u8; 4]) -> [u8; 4] {
    let mut out = color;
    for channel in out.iter_mut().take(3) {
        *channel = (*channel as u16 + (255 - *channel as u16) / 4) as u8;
    }
    out
}
