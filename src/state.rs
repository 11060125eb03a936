use std::collections::VecDeque;

use crate::color::Color;
use crate::picture::Picture;

/// Name of the tool a fresh editor starts with
pub const DEFAULT_TOOL: &str = "draw";

/// Everything the editor displays.
///
/// Owned by the [`Store`](crate::command::Store) and only ever replaced
/// through the reducer. Listeners get read-only access.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Name of the active tool in the registry
    pub tool: String,
    /// Color used by the painting tools
    pub color: Color,
    /// The current picture, reflecting every non-undone edit
    pub picture: Picture,
    /// Undo checkpoints, most recent first
    pub done: VecDeque<Picture>,
    /// Time (ms) the current checkpoint window opened, `None` when no window is open
    pub done_at: Option<u64>,
}

impl AppState {
    pub fn new(picture: Picture) -> Self {
        Self {
            tool: DEFAULT_TOOL.to_owned(),
            color: Color::BLACK,
            picture,
            done: VecDeque::new(),
            done_at: None,
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }
}
