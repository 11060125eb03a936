use eframe::egui;

use super::{Control, ToolButton};
use crate::color::Color;
use crate::command::Action;
use crate::event::StateListener;
use crate::state::AppState;
use crate::tools::ToolRegistry;

/// One button per registered tool
#[derive(Debug, Clone)]
pub struct ToolSelect {
    selected: String,
}

impl ToolSelect {
    pub fn new(state: &AppState) -> Self {
        Self {
            selected: state.tool.clone(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }
}

impl StateListener for ToolSelect {
    fn sync_state(&mut self, state: &AppState) {
        if self.selected != state.tool {
            self.selected = state.tool.clone();
        }
    }
}

impl Control for ToolSelect {
    fn ui(&mut self, ui: &mut egui::Ui, tools: &ToolRegistry) -> Option<Action> {
        let mut action = None;
        ui.label("🖌 Tool:");
        for name in tools.names() {
            if ToolButton::new(name, name == self.selected).show(ui).clicked() {
                action = Some(Action::set_tool(name));
            }
        }
        action
    }
}

#[derive(Debug, Clone)]
pub struct ColorSelect {
    color: Color,
}

impl ColorSelect {
    pub fn new(state: &AppState) -> Self {
        Self { color: state.color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl StateListener for ColorSelect {
    fn sync_state(&mut self, state: &AppState) {
        self.color = state.color;
    }
}

impl Control for ColorSelect {
    fn ui(&mut self, ui: &mut egui::Ui, _tools: &ToolRegistry) -> Option<Action> {
        ui.label("🎨 Color:");
        let mut color: egui::Color32 = self.color.into();
        let response =
            egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque);
        ui.monospace(self.color.to_hex());
        response.changed().then(|| Action::set_color(color.into()))
    }
}

/// Enabled only while there is something to undo
#[derive(Debug, Clone)]
pub struct UndoButton {
    enabled: bool,
}

impl UndoButton {
    pub fn new(state: &AppState) -> Self {
        Self {
            enabled: state.can_undo(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl StateListener for UndoButton {
    fn sync_state(&mut self, state: &AppState) {
        self.enabled = state.can_undo();
    }
}

impl Control for UndoButton {
    fn ui(&mut self, ui: &mut egui::Ui, _tools: &ToolRegistry) -> Option<Action> {
        ui.add_enabled(self.enabled, egui::Button::new("⮪ Undo"))
            .clicked()
            .then_some(Action::Undo)
    }
}
