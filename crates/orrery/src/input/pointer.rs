use glam::Vec2;

use crate::api::types::PointerButton;

/// Last cursor position and which buttons are held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerTracker {
    position: Vec2,
    held: [bool; PointerButton::COUNT],
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: PointerButton, x: f32, y: f32) {
        self.held[button.index()] = true;
        self.position = Vec2::new(x, y);
    }

    pub fn release(&mut self, button: PointerButton, x: f32, y: f32) {
        self.held[button.index()] = false;
        self.position = Vec2::new(x, y);
    }

    /// Record a move and return the delta since the last sample, or `None`
    /// when the cursor did not actually move.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let next = Vec2::new(x, y);
        let delta = next - self.position;
        self.position = next;
        (delta != Vec2::ZERO).then_some(delta)
    }

    pub fn is_held(&self, button: PointerButton) -> bool {
        self.held[button.index()]
    }

    /// Held buttons in left, middle, right order.
    pub fn held_buttons(&self) -> impl Iterator<Item = PointerButton> + '_ {
        [PointerButton::Left, PointerButton::Middle, PointerButton::Right]
            .into_iter()
            .filter(move |b| self.is_held(*b))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}
