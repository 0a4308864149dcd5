use tilegrid::{GridKey, MARGIN_SIZE};
use winit::event::{
    ElementState, KeyboardInput, ModifiersState, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};

/// Pixels scrolled per wheel line.
const WHEEL_STEP: f32 = 24.0;

pub struct InputHandler {
    modifiers: ModifiersState,
    mouse_x: f64,
    mouse_y: f64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            modifiers: ModifiersState::empty(),
            mouse_x: 0.0,
            mouse_y: 0.0,
        }
    }

    /// Pointer position relative to the content viewport; the margins sit at
    /// negative coordinates.
    fn viewport_position(&self) -> (i64, i64) {
        (
            self.mouse_x.floor() as i64 - MARGIN_SIZE as i64,
            self.mouse_y.floor() as i64 - MARGIN_SIZE as i64,
        )
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> InputAction {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                InputAction::None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_x = position.x;
                self.mouse_y = position.y;
                InputAction::PointerMove(self.viewport_position())
            }
            WindowEvent::CursorLeft { .. } => InputAction::PointerLeave,
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => InputAction::PointerDown(self.viewport_position()),
                ElementState::Released => InputAction::PointerUp,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (-x * WHEEL_STEP, -y * WHEEL_STEP),
                    MouseScrollDelta::PixelDelta(position) => (-position.x as f32, -position.y as f32),
                };
                if self.modifiers.shift() {
                    InputAction::Scroll(dy as i64, dx as i64)
                } else {
                    InputAction::Scroll(dx as i64, dy as i64)
                }
            }
            WindowEvent::KeyboardInput { input, .. } => self.handle_keyboard_input(input),
            _ => InputAction::None,
        }
    }

    fn handle_keyboard_input(&self, input: &KeyboardInput) -> InputAction {
        if input.state != ElementState::Pressed {
            return InputAction::None;
        }
        let Some(key_code) = input.virtual_keycode else {
            return InputAction::None;
        };
        let shift = self.modifiers.shift();

        match key_code {
            VirtualKeyCode::Left => InputAction::Key(GridKey::Left, shift),
            VirtualKeyCode::Right => InputAction::Key(GridKey::Right, shift),
            VirtualKeyCode::Up => InputAction::Key(GridKey::Up, shift),
            VirtualKeyCode::Down => InputAction::Key(GridKey::Down, shift),
            VirtualKeyCode::Escape => InputAction::Key(GridKey::Escape, shift),
            VirtualKeyCode::Equals | VirtualKeyCode::Plus | VirtualKeyCode::NumpadAdd => InputAction::Zoom(1),
            VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => InputAction::Zoom(-1),
            VirtualKeyCode::A if self.modifiers.ctrl() => InputAction::SelectAll,
            VirtualKeyCode::G => InputAction::ToggleBorders,
            VirtualKeyCode::S => InputAction::ToggleSelectionMode,
            VirtualKeyCode::LBracket => InputAction::ResizeCanvas(-1),
            VirtualKeyCode::RBracket => InputAction::ResizeCanvas(1),
            _ => InputAction::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    PointerDown((i64, i64)),
    PointerMove((i64, i64)),
    PointerUp,
    PointerLeave,
    Key(GridKey, bool),
    Zoom(i32),
    Scroll(i64, i64),
    SelectAll,
    ToggleBorders,
    ToggleSelectionMode,
    ResizeCanvas(i32),
}
