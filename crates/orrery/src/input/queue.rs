use crate::api::types::PointerButton;

/// Input events the engine understands.
/// Pointer coordinates are canvas pixels, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down at (x, y).
    PointerDown { button: PointerButton, x: f32, y: f32 },
    /// A button was released at (x, y).
    PointerUp { button: PointerButton, x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed. `key_code` is the DOM `keyCode`.
    KeyDown { key_code: u32, alt: bool },
    /// The canvas changed size.
    Resize { width: u32, height: u32 },
}

/// A queue of input events.
/// JS pushes events between frames; the frame step drains them.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown {
            button: PointerButton::Left,
            x: 10.0,
            y: 20.0,
        });
        q.push(InputEvent::KeyDown {
            key_code: 32,
            alt: false,
        });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize {
            width: 800,
            height: 600,
        });
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        let events = q.drain();
        assert!(matches!(events[0], InputEvent::Resize { .. }));
        assert_eq!(events[1], InputEvent::PointerMove { x: 1.0, y: 2.0 });
    }
}
