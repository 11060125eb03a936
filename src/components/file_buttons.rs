use std::path::PathBuf;

use eframe::egui;

use super::Control;
use crate::codec;
use crate::command::Action;
use crate::error::Result;
use crate::event::StateListener;
use crate::picture::Picture;
use crate::state::AppState;
use crate::tools::ToolRegistry;

/// Exports the current picture as a PNG, one pixel per cell
#[derive(Debug, Clone)]
pub struct SaveButton {
    picture: Picture,
    path: PathBuf,
}

impl SaveButton {
    pub fn new(state: &AppState, path: impl Into<PathBuf>) -> Self {
        Self {
            picture: state.picture.clone(),
            path: path.into(),
        }
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn save(&self) -> Result<()> {
        codec::save_png(&self.picture, &self.path)
    }
}

impl StateListener for SaveButton {
    fn sync_state(&mut self, state: &AppState) {
        self.picture = state.picture.clone();
    }
}

impl Control for SaveButton {
    fn ui(&mut self, ui: &mut egui::Ui, _tools: &ToolRegistry) -> Option<Action> {
        if ui.button("💾 Save").clicked() {
            if let Err(err) = self.save() {
                log::error!("Failed to save {}: {}", self.path.display(), err);
            }
        }
        None
    }
}

/// Imports an image file named in a text field
#[derive(Debug, Clone)]
pub struct LoadButton {
    path: String,
    max_size: usize,
}

impl LoadButton {
    pub fn new(max_size: usize) -> Self {
        Self {
            path: String::new(),
            max_size,
        }
    }

    pub fn load(&self) -> Result<Picture> {
        codec::load_picture(self.path.trim(), self.max_size)
    }
}

impl StateListener for LoadButton {
    fn sync_state(&mut self, _state: &AppState) {}
}

impl Control for LoadButton {
    fn ui(&mut self, ui: &mut egui::Ui, _tools: &ToolRegistry) -> Option<Action> {
        ui.add(egui::TextEdit::singleline(&mut self.path).hint_text("image path").desired_width(160.0));
        if !ui.button("📁 Load").clicked() {
            return None;
        }
        if self.path.trim().is_empty() {
            log::warn!("No file chosen to load");
            return None;
        }
        match self.load() {
            Ok(picture) => Some(Action::set_picture(picture)),
            Err(err) => {
                log::error!("Failed to load {}: {}", self.path.trim(), err);
                None
            }
        }
    }
}
