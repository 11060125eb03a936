use eframe::egui;

use crate::codec;
use crate::error::{EditorError, Result};
use crate::picture::Picture;

/// Turns files dropped onto the window into pictures
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
    max_size: usize,
}

impl FileHandler {
    pub fn new(max_size: usize) -> Self {
        Self {
            dropped_files: Vec::new(),
            max_size,
        }
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any were found.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Decode the dropped image files. Only the last decodable one matters to
    /// the editor, but every failure is logged.
    pub fn take_picture(&mut self) -> Option<Picture> {
        let mut picture = None;
        for file in std::mem::take(&mut self.dropped_files) {
            let file_name = display_name(&file);
            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }
            match self.decode(&file) {
                Ok(decoded) => picture = Some(decoded),
                Err(err) => log::error!("Failed to import {}: {}", file_name, err),
            }
        }
        picture
    }

    fn decode(&self, file: &egui::DroppedFile) -> Result<Picture> {
        if let Some(bytes) = &file.bytes {
            log::info!("Importing image from memory ({} bytes)", bytes.len());
            return codec::decode_picture(bytes, self.max_size);
        }
        match &file.path {
            Some(path) => codec::load_picture(path, self.max_size),
            None => Err(EditorError::EmptySource),
        }
    }

    /// Darken the window while files are hovered over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }
        let text = ctx.input(|i| {
            let mut text = "Drop an image to load it:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = match &file.path {
        Some(path) => path.to_string_lossy().into_owned(),
        None => file.name.clone(),
    };
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropped(name: &str, mime: &str) -> egui::DroppedFile {
        egui::DroppedFile {
            name: name.to_owned(),
            mime: mime.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(&dropped("a.PNG", "")));
        assert!(is_image_file(&dropped("blob", "image/gif")));
        assert!(!is_image_file(&dropped("notes.txt", "")));
        assert!(!is_image_file(&dropped("data", "text/plain")));
    }

    #[test]
    fn test_file_without_data_is_empty_source() {
        let handler = FileHandler::new(100);
        assert!(matches!(
            handler.decode(&dropped("a.png", "")),
            Err(EditorError::EmptySource)
        ));
    }
}
