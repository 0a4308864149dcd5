#![allow(dead_code)]

use tilegrid::{GridEngine, GridHost, GridState, TilePoint};

/// Host that renders nothing and records what the engine asked of it.
#[derive(Default)]
pub struct TestHost {
    pub selection_mode: bool,
    pub captures: u32,
    pub releases: u32,
    pub content_invalidations: u32,
    pub pressed: Vec<TilePoint>,
}

impl GridHost for TestHost {
    fn render_tiles(&self, _: u32, _: u32, _: u32, _: u32, _: u32) -> Option<Vec<u8>> {
        None
    }

    fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    fn on_tile_pressed(&mut self, tile: TilePoint) {
        self.pressed.push(tile);
    }

    fn capture_pointer(&mut self) {
        self.captures += 1;
    }

    fn release_pointer(&mut self) {
        self.releases += 1;
    }

    fn invalidate_content(&mut self) {
        self.content_invalidations += 1;
    }
}

/// 16×16 grid of 8×8 tiles at zoom 1, scrolled to the origin, selection mode on.
pub fn grid_16x16() -> GridEngine<TestHost> {
    grid(16, 16)
}

pub fn grid(tiles_x: u32, tiles_y: u32) -> GridEngine<TestHost> {
    let mut state = GridState::new((8, 8), tiles_x, tiles_y);
    state.set_viewport(256, 256);
    GridEngine::new(
        state,
        TestHost {
            selection_mode: true,
            ..Default::default()
        },
    )
}

/// Same grid, starting with `selection` already in place.
pub fn with_selection(tiles_x: u32, tiles_y: u32, selection: tilegrid::TileRect) -> GridEngine<TestHost> {
    let mut state = GridState::new((8, 8), tiles_x, tiles_y);
    state.set_viewport(256, 256);
    state.selection = Some(selection);
    GridEngine::new(
        state,
        TestHost {
            selection_mode: true,
            ..Default::default()
        },
    )
}
