use super::history::{HistoryPolicy, reduce};
use super::{Action, Dispatch};
use crate::event::{EventBus, StateListener};
use crate::state::AppState;
use crate::util::time::Clock;

/// Owner of the single application state.
///
/// Every change goes through [`Store::dispatch`], which runs the reducer with
/// the store's clock and then tells all listeners about the new state.
pub struct Store {
    state: AppState,
    policy: HistoryPolicy,
    clock: Box<dyn Clock>,
    event_bus: EventBus,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("event_bus", &self.event_bus)
            .finish()
    }
}

impl Store {
    pub fn new(state: AppState, policy: HistoryPolicy, clock: Box<dyn Clock>) -> Self {
        Self {
            state,
            policy,
            clock,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&self, listener: Box<dyn StateListener>) {
        self.event_bus.subscribe(listener);
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        let now = self.clock.now_millis();
        self.state = reduce(&self.state, action, now, &self.policy);
        self.event_bus.emit(&self.state);
    }
}
