mod commands;
mod context;
pub mod history;

pub use commands::{Action, ActionQueue, Dispatch, StateUpdate};
pub use context::Store;
pub use history::{DEFAULT_DEBOUNCE_MS, HistoryPolicy, reduce};
