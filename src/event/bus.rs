use std::cell::RefCell;

use super::StateListener;
use crate::state::AppState;

/// Broadcasts every new application state to the registered listeners
pub struct EventBus {
    listeners: RefCell<Vec<Box<dyn StateListener>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a listener to receive state changes
    pub fn subscribe(&self, listener: Box<dyn StateListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Hand `state` to all registered listeners
    pub fn emit(&self, state: &AppState) {
        for listener in &mut *self.listeners.borrow_mut() {
            listener.sync_state(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::color::Color;
    use crate::picture::Picture;

    struct Counter(Rc<Cell<usize>>);

    impl StateListener for Counter {
        fn sync_state(&mut self, _state: &AppState) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_emit_reaches_every_listener() {
        let bus = EventBus::new();
        let seen = Rc::new(Cell::new(0));
        for _ in 0..3 {
            bus.subscribe(Box::new(Counter(seen.clone())));
        }
        let state = AppState::new(Picture::empty(1, 1, Color::WHITE).unwrap());
        bus.emit(&state);
        assert_eq!(bus.listener_count(), 3);
        assert_eq!(seen.get(), 3);
    }
}
