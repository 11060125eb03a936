#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use pixel_editor::config::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use pixel_editor::{EditorConfig, PixelEditorApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config_path = std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match EditorConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Ignoring {}: {}", config_path.display(), err);
            EditorConfig::default()
        }
    };

    let mut app = PixelEditorApp::from_config(&config)?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.width as f32 * config.scale + 64.0,
                config.height as f32 * config.scale + 120.0,
            ])
            .with_title("Pixel Editor"),
        ..Default::default()
    };
    eframe::run_native(
        "Pixel Editor",
        native_options,
        Box::new(move |cc| {
            app.attach(cc);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
