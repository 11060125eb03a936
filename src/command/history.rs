use super::{Action, StateUpdate};
use crate::state::AppState;

/// Rapid picture edits closer together than this share one undo checkpoint
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Controls how checkpoints are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// Length of the coalescing window in milliseconds
    pub debounce_ms: u64,
    /// Maximum number of checkpoints kept; the oldest are dropped first
    pub max_depth: Option<usize>,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_depth: None,
        }
    }
}

impl HistoryPolicy {
    /// Whether a picture edit at `now` opens a new checkpoint
    fn opens_checkpoint(&self, done_at: Option<u64>, now: u64) -> bool {
        match done_at {
            None => true,
            Some(at) => now.saturating_sub(at) > self.debounce_ms,
        }
    }
}

fn apply(state: &mut AppState, update: StateUpdate) {
    if let Some(tool) = update.tool {
        state.tool = tool;
    }
    if let Some(color) = update.color {
        state.color = color;
    }
    if let Some(picture) = update.picture {
        state.picture = picture;
    }
}

/// Fold `action` into `state`, returning the next state.
///
/// Only the picture held immediately before the first edit of a window is
/// ever pushed; post-edit pictures never enter the history.
pub fn reduce(state: &AppState, action: Action, now: u64, policy: &HistoryPolicy) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Undo => {
            let Some(previous) = next.done.pop_front() else {
                return next;
            };
            next.picture = previous;
            next.done_at = None;
        }
        Action::Update(update) => {
            if update.picture.is_some() && policy.opens_checkpoint(state.done_at, now) {
                next.done.push_front(state.picture.clone());
                if let Some(max) = policy.max_depth {
                    next.done.truncate(max);
                }
                next.done_at = Some(now);
                log::debug!("Opened undo checkpoint, depth {}", next.done.len());
            }
            apply(&mut next, update);
        }
    }
    next
}
