//! Editor controls. Each one mirrors the part of the state it shows through
//! [`StateListener::sync_state`] and asks for changes by returning an action.

use eframe::egui;

use crate::command::Action;
use crate::event::StateListener;
use crate::tools::ToolRegistry;

mod file_buttons;
mod selects;
mod tool_button;

pub use file_buttons::{LoadButton, SaveButton};
pub use selects::{ColorSelect, ToolSelect, UndoButton};
pub use tool_button::ToolButton;

pub trait Control: StateListener {
    /// Draw the control. Returns the action to dispatch if the user changed something.
    fn ui(&mut self, ui: &mut egui::Ui, tools: &ToolRegistry) -> Option<Action>;
}
