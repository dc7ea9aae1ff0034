/// Named key codes the simulation understands.
/// Mirrors the host platform's physical key naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    ShiftLeft,
    /// Any key the simulation does not bind.
    Other(u32),
}

/// Input event types the engine understands.
/// Generic — no game-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: KeyCode },
    /// A key was released.
    KeyUp { key: KeyCode },
    /// The single UI activation affordance (button click).
    Activate,
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// The host writes events as they arrive; the simulation reads them at the
/// next frame tick and the runner drains the queue afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host event loop).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key: KeyCode::KeyW });
        q.push(InputEvent::Activate);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn resize_event_carries_dimensions() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize { width: 1920.0, height: 1080.0 });
        match q.drain()[0] {
            InputEvent::Resize { width, height } => {
                assert_eq!(width, 1920.0);
                assert_eq!(height, 1080.0);
            }
            _ => panic!("Expected Resize event"),
        }
    }
}
