use crate::color::Color;
use crate::picture::Picture;

/// Fields to overwrite on the application state.
/// `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub tool: Option<String>,
    pub color: Option<Color>,
    pub picture: Option<Picture>,
}

/// Requests that can be folded into the application state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Restore the most recent checkpoint
    Undo,
    /// Overwrite one or more state fields
    Update(StateUpdate),
}

impl Action {
    pub fn set_tool(tool: impl Into<String>) -> Self {
        Self::Update(StateUpdate {
            tool: Some(tool.into()),
            ..Default::default()
        })
    }

    pub fn set_color(color: Color) -> Self {
        Self::Update(StateUpdate {
            color: Some(color),
            ..Default::default()
        })
    }

    pub fn set_picture(picture: Picture) -> Self {
        Self::Update(StateUpdate {
            picture: Some(picture),
            ..Default::default()
        })
    }
}

/// Sink for actions produced by tools and controls
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// A [`Dispatch`] that only records what it receives.
///
/// Tools are handed one of these while they read the current state; the
/// recorded actions are replayed through the store once the tool returns.
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Action> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Dispatch for ActionQueue {
    fn dispatch(&mut self, action: Action) {
        self.actions.push(action);
    }
}
