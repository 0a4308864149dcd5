use tilegrid::{GridConfig, GridHost, TilePoint};

/// Procedurally coloured tile set standing in for a format editor. In direct-edit
/// mode a click toggles a tile's mark.
pub struct DemoTileSet {
    tile_size: (u32, u32),
    tiles_x: u32,
    tiles_y: u32,
    marked: Vec<Vec<bool>>,
    selection_mode: bool,
    hovered: Option<TilePoint>,
    captured: bool,
    dirty: bool,
}

impl DemoTileSet {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            tile_size: (config.tile_width, config.tile_height),
            tiles_x: config.tiles_x,
            tiles_y: config.tiles_y,
            marked: vec![vec![false; config.tiles_x as usize]; config.tiles_y as usize],
            selection_mode: true,
            hovered: None,
            captured: false,
            dirty: true,
        }
    }

    pub fn set_dimensions(&mut self, tiles_x: u32, tiles_y: u32) {
        self.tiles_x = tiles_x;
        self.tiles_y = tiles_y;
        self.marked.resize(tiles_y as usize, Vec::new());
        for row in &mut self.marked {
            row.resize(tiles_x as usize, false);
        }
        self.dirty = true;
    }

    pub fn toggle_selection_mode(&mut self) {
        self.selection_mode = !self.selection_mode;
        log::info!(
            "{} mode",
            if self.selection_mode { "Selection" } else { "Direct edit" }
        );
    }

    pub fn hovered(&self) -> Option<TilePoint> {
        self.hovered
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn is_marked(&self, x: u32, y: u32) -> bool {
        self.marked
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    fn tile_color(&self, x: u32, y: u32) -> [u8; 3] {
        let index = y * self.tiles_x + x;
        let r = (index * 37 % 160 + 48) as u8;
        let g = (index * 91 % 160 + 48) as u8;
        let b = (index * 53 % 160 + 48) as u8;
        if self.is_marked(x, y) {
            [255 - r, 255 - g, 255 - b]
        } else {
            [r, g, b]
        }
    }
}

impl GridHost for DemoTileSet {
    fn render_tiles(&self, scroll_x: u32, scroll_y: u32, width: u32, height: u32, zoom: u32) -> Option<Vec<u8>> {
        if self.tiles_x == 0 || self.tiles_y == 0 {
            return None;
        }
        let (tw, th) = self.tile_size;
        let mut rows = vec![0u8; width as usize * height as usize * 4];
        for (i, pixel) in rows.chunks_exact_mut(4).enumerate() {
            // Unzoomed content-plane pixel
            let px = (i as u32 % width + scroll_x) / zoom;
            let py = (i as u32 / width + scroll_y) / zoom;
            let (tx, ty) = (px / tw, py / th);
            if tx >= self.tiles_x || ty >= self.tiles_y {
                pixel.copy_from_slice(&[32, 32, 32, 255]);
                continue;
            }
            let [r, g, b] = self.tile_color(tx, ty);
            // Dither every other texel so zoom is visible.
            let shade = if ((px % tw) ^ (py % th)) & 1 == 0 { 0 } else { 24 };
            pixel.copy_from_slice(&[r.saturating_sub(shade), g.saturating_sub(shade), b.saturating_sub(shade), 255]);
        }
        Some(rows)
    }

    fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    fn on_tile_hovered(&mut self, tile: Option<TilePoint>) {
        self.hovered = tile;
    }

    fn on_tile_pressed(&mut self, tile: TilePoint) {
        if let Some(cell) = self
            .marked
            .get_mut(tile.y as usize)
            .and_then(|row| row.get_mut(tile.x as usize))
        {
            *cell = !*cell;
            self.dirty = true;
        }
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
        log::debug!("Pointer captured");
    }

    fn release_pointer(&mut self) {
        if self.captured {
            self.captured = false;
            log::debug!("Pointer released");
        }
    }

    fn invalidate_content(&mut self) {
        self.dirty = true;
    }

    fn invalidate_margins(&mut self) {
        self.dirty = true;
    }

    fn set_scroll_range(&mut self, content_width: u32, content_height: u32) {
        log::debug!("Scroll range {}x{}", content_width, content_height);
    }
}
