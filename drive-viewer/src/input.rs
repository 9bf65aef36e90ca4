use drive_core::SteerInput;
use winit::event::{ElementState, VirtualKeyCode};

/// Left/right arrow state as of the latest keyboard event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    left: bool,
    right: bool,
}

impl HeldKeys {
    pub fn handle(&mut self, key: VirtualKeyCode, state: ElementState) {
        let down = state == ElementState::Pressed;
        match key {
            VirtualKeyCode::Left => self.left = down,
            VirtualKeyCode::Right => self.right = down,
            _ => {}
        }
    }

    /// Releases are not delivered to an unfocused window, so drop everything.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn steer(&self) -> SteerInput {
        SteerInput {
            left: self.left,
            right: self.right,
        }
    }
}
