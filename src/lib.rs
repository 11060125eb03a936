#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codec;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod input;
pub mod picture;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelEditorApp;
pub use color::Color;
pub use command::{Action, Dispatch, HistoryPolicy, StateUpdate};
pub use config::EditorConfig;
pub use editor::PixelEditor;
pub use error::{EditorError, Result};
pub use event::StateListener;
pub use input::{CanvasTransform, PointerEvent};
pub use picture::{Edit, GridPos, Picture, PixelWrite};
pub use state::AppState;
pub use tools::ToolRegistry;
