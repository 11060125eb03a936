use egui::{PointerButton, Pos2, Rect};

mod gestures;

pub use gestures::GestureSession;

use crate::picture::GridPos;

/// Pointer input in screen coordinates, as produced by the canvas widget
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A mouse button went down
    Pressed { position: Pos2, button: PointerButton },
    /// The mouse moved. `primary_down` is false once the button has been let go
    Moved { position: Pos2, primary_down: bool },
    /// A mouse button was released
    Released { button: PointerButton },
    /// Touch began; only the first touch point is used
    TouchStart { touches: Vec<Pos2> },
    TouchMove { touches: Vec<Pos2> },
    TouchEnd,
}

/// Maps screen positions onto grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the top-left corner of cell (0, 0)
    pub origin: Pos2,
    /// Screen pixels per grid cell
    pub scale: f32,
}

impl CanvasTransform {
    pub fn new(origin: Pos2, scale: f32) -> Self {
        Self { origin, scale }
    }

    /// The cell containing `position`. May lie outside the picture.
    pub fn to_grid(&self, position: Pos2) -> GridPos {
        GridPos::new(
            ((position.x - self.origin.x) / self.scale).floor() as i32,
            ((position.y - self.origin.y) / self.scale).floor() as i32,
        )
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::from_min_size(
            egui::pos2(
                self.origin.x + x as f32 * self.scale,
                self.origin.y + y as f32 * self.scale,
            ),
            egui::vec2(self.scale, self.scale),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_grid_floors() {
        let transform = CanvasTransform::new(egui::pos2(100.0, 50.0), 10.0);
        assert_eq!(transform.to_grid(egui::pos2(100.0, 50.0)), GridPos::new(0, 0));
        assert_eq!(transform.to_grid(egui::pos2(119.9, 59.9)), GridPos::new(1, 0));
        assert_eq!(transform.to_grid(egui::pos2(99.0, 50.0)), GridPos::new(-1, 0));
    }

    #[test]
    fn test_cell_rect() {
        let transform = CanvasTransform::new(egui::pos2(10.0, 10.0), 4.0);
        let rect = transform.cell_rect(2, 1);
        assert_eq!(rect.min, egui::pos2(18.0, 14.0));
        assert_eq!(rect.max, egui::pos2(22.0, 18.0));
    }
}
