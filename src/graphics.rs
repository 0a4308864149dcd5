use pixels::{Pixels, SurfaceTexture};
use tilegrid::{GridEngine, GridRenderer, PixelBuffer, MARGIN_SIZE};
use winit::window::Window;

use crate::tiles::DemoTileSet;

/// Composites the grid's margin and content buffers into the window frame.
pub struct GraphicsRenderer {
    pixels: Pixels,
    grid: GridRenderer,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(window_size.width, window_size.height, surface_texture)?;

        Ok(Self {
            pixels,
            grid: GridRenderer::new(),
            width: window_size.width,
            height: window_size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("Failed to resize buffer: {}", err);
        }
    }

    /// Space left for the content viewport once the margins are taken off.
    pub fn viewport_size(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(MARGIN_SIZE),
            self.height.saturating_sub(MARGIN_SIZE),
        )
    }

    pub fn render(&mut self, engine: &GridEngine<DemoTileSet>) {
        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[32, 32, 32, 255]);
        }

        let content = self.grid.render_content(engine.state(), engine.host());
        blit(frame, self.width, content, MARGIN_SIZE, MARGIN_SIZE);

        let margins = self.grid.render_margins(engine.state());
        blit(frame, self.width, margins.corner, 0, 0);
        blit(frame, self.width, margins.top, MARGIN_SIZE, 0);
        blit(frame, self.width, margins.left, 0, MARGIN_SIZE);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

fn blit(frame: &mut [u8], frame_width: u32, buffer: &PixelBuffer, x: u32, y: u32) {
    if x >= frame_width {
        return;
    }
    let frame_height = (frame.len() / (frame_width as usize * 4)) as u32;
    let row_len = buffer.width().min(frame_width - x) as usize * 4;
    let source_row = buffer.width() as usize * 4;

    for row in 0..buffer.height() {
        let dest_y = y + row;
        if dest_y >= frame_height {
            break;
        }
        let dest = (dest_y as usize * frame_width as usize + x as usize) * 4;
        let src = row as usize * source_row;
        frame[dest..dest + row_len].copy_from_slice(&buffer.data()[src..src + row_len]);
    }
}
