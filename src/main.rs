mod graphics;
mod input;
mod tiles;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use tilegrid::{GridConfig, GridEngine, GridState, MARGIN_SIZE};

use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};
use crate::tiles::DemoTileSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading grid config from {}", path);
            GridConfig::load(&path)?
        }
        None => GridConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Tile Grid")
        .with_inner_size(LogicalSize::new(
            config.viewport_width + MARGIN_SIZE,
            config.viewport_height + MARGIN_SIZE,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window)?;
    let mut engine = GridEngine::new(GridState::from_config(&config), DemoTileSet::new(&config));
    let (viewport_width, viewport_height) = graphics.viewport_size();
    engine.set_viewport(viewport_width, viewport_height);

    let mut input_handler = InputHandler::new();
    let mut last_hovered = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                    let (width, height) = graphics.viewport_size();
                    engine.set_viewport(width, height);
                }
                other => {
                    let action = input_handler.handle_window_event(&other);
                    apply_action(&mut engine, action);
                }
            },
            Event::MainEventsCleared => {
                let hovered = engine.host().hovered();
                if hovered != last_hovered {
                    last_hovered = hovered;
                    match hovered {
                        Some(tile) => window.set_title(&format!("Tile Grid - ({}, {})", tile.x, tile.y)),
                        None => window.set_title("Tile Grid"),
                    }
                }
                if engine.host().needs_redraw() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                graphics.render(&engine);
                engine.host_mut().clear_dirty();
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn apply_action(engine: &mut GridEngine<DemoTileSet>, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::PointerDown(pos) => engine.pointer_down(pos),
        InputAction::PointerMove(pos) => engine.pointer_move(pos),
        InputAction::PointerUp => engine.pointer_up(),
        InputAction::PointerLeave => engine.pointer_leave(),
        InputAction::Key(key, shift) => engine.keyboard(key, shift),
        InputAction::Zoom(delta) => {
            let zoom = (engine.state().zoom as i32 + delta).max(1);
            engine.set_zoom(zoom as u32);
        }
        InputAction::Scroll(dx, dy) => engine.scroll_by(dx, dy),
        InputAction::SelectAll => engine.select_all(),
        InputAction::ToggleBorders => engine.toggle_borders(),
        InputAction::ToggleSelectionMode => engine.host_mut().toggle_selection_mode(),
        InputAction::ResizeCanvas(delta) => {
            let tiles_x = (engine.state().tiles_x as i32 + delta).max(0) as u32;
            let tiles_y = (engine.state().tiles_y as i32 + delta).max(0) as u32;
            log::info!("Canvas resized to {}x{} tiles", tiles_x, tiles_y);
            engine.host_mut().set_dimensions(tiles_x, tiles_y);
            engine.resize(tiles_x, tiles_y);
        }
    }
}
