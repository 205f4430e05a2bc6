/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel moved with the cursor at world coordinates (x, y).
    /// `scroll_y` is positive when scrolling up (one notch = 1.0).
    Scroll { x: f32, y: f32, scroll_x: f32, scroll_y: f32 },
}

/// A queue of input events.
/// The host pushes events between frames; the runner drains them after update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
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

    /// Vertical scroll deltas in arrival order.
    pub fn scroll_deltas(&self) -> impl Iterator<Item = f32> + '_ {
        self.events.iter().map(|event| match *event {
            InputEvent::Scroll { scroll_y, .. } => scroll_y,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
