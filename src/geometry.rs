//! Tile and pixel geometry shared by the engine and the renderer.
//!
//! All pointer→tile and tile→pixel conversions go through [`pixel_to_tile`] and
//! [`tile_to_pixel_rect`]; nothing else divides by the tile size.

use bitflags::bitflags;

/// Width of the ruler strip along the top and left of the viewport, in pixels.
pub const MARGIN_SIZE: u32 = 16;

/// Thickness of the grab zone around a selection, in pixels.
pub const SEL_BORDER: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TilePoint {
    pub x: u32,
    pub y: u32,
}

impl TilePoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A closed rectangle of tiles. Width and height are at least 1 for every
/// rectangle the engine stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The whole grid, or `None` when the grid has no tiles.
    pub fn full(tiles_x: u32, tiles_y: u32) -> Option<Self> {
        if tiles_x == 0 || tiles_y == 0 {
            None
        } else {
            Some(Self::new(0, 0, tiles_x, tiles_y))
        }
    }

    /// Smallest rectangle containing both corners.
    pub fn from_corners(a: TilePoint, b: TilePoint) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: a.x.max(b.x) - x + 1,
            height: a.y.max(b.y) - y + 1,
        }
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, point: TilePoint) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn span(&self, axis: Axis) -> (u32, u32) {
        match axis {
            Axis::X => (self.x, self.width),
            Axis::Y => (self.y, self.height),
        }
    }

    pub fn with_span(mut self, axis: Axis, start: u32, len: u32) -> Self {
        match axis {
            Axis::X => {
                self.x = start;
                self.width = len;
            }
            Axis::Y => {
                self.y = start;
                self.height = len;
            }
        }
        self
    }

    /// Intersection with a `tiles_x` × `tiles_y` grid.
    pub fn clamp_into(&self, tiles_x: u32, tiles_y: u32) -> Option<Self> {
        let right = self.x.saturating_add(self.width).min(tiles_x);
        let bottom = self.y.saturating_add(self.height).min(tiles_y);
        if self.x >= right || self.y >= bottom {
            return None;
        }
        Some(Self::new(self.x, self.y, right - self.x, bottom - self.y))
    }

    /// Moves the rectangle to `(x, y)` shifted back inside the grid. Size is kept.
    pub fn translated_within(&self, x: i64, y: i64, tiles_x: u32, tiles_y: u32) -> Self {
        let max_x = tiles_x.saturating_sub(self.width) as i64;
        let max_y = tiles_y.saturating_sub(self.height) as i64;
        Self {
            x: x.clamp(0, max_x) as u32,
            y: y.clamp(0, max_y) as u32,
            ..*self
        }
    }
}

/// A rectangle in content-plane pixels. May extend past either edge of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    pub fn expand(&self, by: i64) -> Self {
        Self {
            x: self.x.saturating_sub(by),
            y: self.y.saturating_sub(by),
            width: self.width.saturating_add(by.saturating_mul(2)),
            height: self.height.saturating_add(by.saturating_mul(2)),
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

bitflags! {
    /// Selection edges under the pointer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EdgeMask: u8 {
        const LEFT   = 0b0001;
        const TOP    = 0b0010;
        const RIGHT  = 0b0100;
        const BOTTOM = 0b1000;
    }
}

/// Floor division of a content-plane pixel coordinate by the zoomed tile size.
/// Pixels left of or above the plane yield negative tiles.
pub fn pixel_to_tile(pixel: i64, tile_px: u32) -> i64 {
    pixel.div_euclid(tile_px.max(1) as i64)
}

/// Saturates at `i64::MAX` for grids too large to address in pixels.
pub fn tile_to_pixel_rect(rect: TileRect, tile_size: (u32, u32), zoom: u32) -> PixelRect {
    let tw = (tile_size.0 as i64).saturating_mul(zoom as i64);
    let th = (tile_size.1 as i64).saturating_mul(zoom as i64);
    PixelRect {
        x: (rect.x as i64).saturating_mul(tw),
        y: (rect.y as i64).saturating_mul(th),
        width: (rect.width as i64).saturating_mul(tw),
        height: (rect.height as i64).saturating_mul(th),
    }
}

/// Clamps a signed tile coordinate to `[0, tiles - 1]`. `tiles` must be non-zero.
pub fn clamp_tile(tile: i64, tiles: u32) -> u32 {
    tile.clamp(0, tiles.saturating_sub(1) as i64) as u32
}
