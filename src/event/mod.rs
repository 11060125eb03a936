use std::cell::RefCell;
use std::rc::Rc;

mod bus;

pub use bus::EventBus;

use crate::state::AppState;

/// Something that redisplays itself from the application state.
///
/// Called after every reducer transition. Listeners never change state
/// directly, they go through dispatch like everyone else.
pub trait StateListener {
    fn sync_state(&mut self, state: &AppState);
}

impl<T: StateListener + ?Sized> StateListener for Rc<RefCell<T>> {
    fn sync_state(&mut self, state: &AppState) {
        self.borrow_mut().sync_state(state);
    }
}
