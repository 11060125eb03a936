use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::components::{ColorSelect, Control, LoadButton, SaveButton, ToolSelect, UndoButton};
use crate::config::EditorConfig;
use crate::editor::PixelEditor;
use crate::error::Result;
use crate::event::StateListener;
use crate::file_handler::FileHandler;
use crate::input::{CanvasTransform, PointerEvent};
use crate::state::AppState;

type SharedControl = Rc<RefCell<dyn Control>>;

/// Asks egui for a new frame whenever the state changes
struct RepaintOnChange(egui::Context);

impl StateListener for RepaintOnChange {
    fn sync_state(&mut self, _state: &AppState) {
        self.0.request_repaint();
    }
}

/// Desktop shell around [`PixelEditor`]
pub struct PixelEditorApp {
    editor: PixelEditor,
    controls: Vec<SharedControl>,
    file_handler: FileHandler,
    scale: f32,
}

impl PixelEditorApp {
    /// Build the editor and its controls from `config`
    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        let editor = PixelEditor::with_config(config)?;
        let state = editor.state();
        let controls = vec![
            Rc::new(RefCell::new(ToolSelect::new(state))) as SharedControl,
            Rc::new(RefCell::new(ColorSelect::new(state))) as SharedControl,
            Rc::new(RefCell::new(SaveButton::new(state, config.export_path.clone()))) as SharedControl,
            Rc::new(RefCell::new(LoadButton::new(config.max_import_size))) as SharedControl,
            Rc::new(RefCell::new(UndoButton::new(state))) as SharedControl,
        ];
        for control in &controls {
            editor.subscribe(Box::new(control.clone()));
        }

        Ok(Self {
            editor,
            controls,
            file_handler: FileHandler::new(config.max_import_size),
            scale: config.scale,
        })
    }

    /// Hook the app up to the window it runs in
    pub fn attach(&mut self, cc: &eframe::CreationContext<'_>) {
        self.editor
            .subscribe(Box::new(RepaintOnChange(cc.egui_ctx.clone())));
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();
        ui.horizontal(|ui| {
            for control in &self.controls {
                if let Some(action) = control.borrow_mut().ui(ui, self.editor.tools()) {
                    actions.push(action);
                }
                ui.add_space(12.0);
            }
        });
        for action in actions {
            self.editor.dispatch(action);
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let picture = &self.editor.state().picture;
        let size = egui::vec2(
            picture.width() as f32 * self.scale,
            picture.height() as f32 * self.scale,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let transform = CanvasTransform::new(response.rect.min, self.scale);

        for event in pointer_events(ui, response.rect) {
            if let Err(err) = self.editor.handle_pointer(&event, &transform) {
                log::warn!("Pointer input rejected: {}", err);
            }
        }

        let picture = &self.editor.state().picture;
        for (i, color) in picture.pixels().iter().enumerate() {
            let rect = transform.cell_rect(i % picture.width(), i / picture.width());
            painter.rect_filled(rect, 0.0, egui::Color32::from(*color));
        }
    }
}

/// Pointer events of this frame. Presses only count inside the canvas.
fn pointer_events(ui: &egui::Ui, canvas: egui::Rect) -> Vec<PointerEvent> {
    ui.input(|input| translate_pointer_events(&input.events, input.pointer.primary_down(), canvas))
}

/// Translate raw egui events in order, tracking the primary button as it
/// goes down and up. `primary_down_at_end` is the state after the last event.
fn translate_pointer_events(
    raw: &[egui::Event],
    primary_down_at_end: bool,
    canvas: egui::Rect,
) -> Vec<PointerEvent> {
    let primary = |event: &egui::Event| match event {
        egui::Event::PointerButton {
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => Some(*pressed),
        _ => None,
    };
    // State before the first event: the opposite of the first transition
    let mut primary_down = match raw.iter().find_map(primary) {
        Some(pressed) => !pressed,
        None => primary_down_at_end,
    };

    let mut events = Vec::new();
    for event in raw {
        if let Some(pressed) = primary(event) {
            primary_down = pressed;
        }
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if canvas.contains(*pos) => events.push(PointerEvent::Pressed {
                position: *pos,
                button: *button,
            }),
            egui::Event::PointerButton {
                button,
                pressed: false,
                ..
            } => events.push(PointerEvent::Released { button: *button }),
            egui::Event::PointerMoved(pos) => events.push(PointerEvent::Moved {
                position: *pos,
                primary_down,
            }),
            _ => {}
        }
    }
    events
}

impl eframe::App for PixelEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some(picture) = self.file_handler.take_picture() {
                self.editor.load_picture(picture);
            }
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.editor.undo();
        }

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls_panel(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.canvas(ui);
            });
        });

        self.file_handler.preview_files_being_dropped(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0))
    }

    #[test]
    fn test_moves_before_release_keep_button_down() {
        let raw = [
            egui::Event::PointerMoved(egui::pos2(10.0, 10.0)),
            egui::Event::PointerMoved(egui::pos2(20.0, 10.0)),
            button(egui::pos2(20.0, 10.0), false),
            egui::Event::PointerMoved(egui::pos2(30.0, 10.0)),
        ];
        let events = translate_pointer_events(&raw, false, canvas());
        let held: Vec<bool> = events
            .iter()
            .filter_map(|event| match event {
                PointerEvent::Moved { primary_down, .. } => Some(*primary_down),
                _ => None,
            })
            .collect();
        assert_eq!(held, [true, true, false]);
        assert_eq!(
            events[2],
            PointerEvent::Released {
                button: egui::PointerButton::Primary
            }
        );
    }

    #[test]
    fn test_press_and_drag_in_one_frame() {
        let raw = [
            egui::Event::PointerMoved(egui::pos2(5.0, 5.0)),
            button(egui::pos2(5.0, 5.0), true),
            egui::Event::PointerMoved(egui::pos2(15.0, 5.0)),
        ];
        let events = translate_pointer_events(&raw, true, canvas());
        assert_eq!(
            events,
            [
                PointerEvent::Moved {
                    position: egui::pos2(5.0, 5.0),
                    primary_down: false
                },
                PointerEvent::Pressed {
                    position: egui::pos2(5.0, 5.0),
                    button: egui::PointerButton::Primary
                },
                PointerEvent::Moved {
                    position: egui::pos2(15.0, 5.0),
                    primary_down: true
                },
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let raw = [button(egui::pos2(500.0, 5.0), true)];
        assert!(translate_pointer_events(&raw, true, canvas()).is_empty());
    }
}
