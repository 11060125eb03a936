use std::sync::Arc;

use crate::color::Color;
use crate::error::{EditorError, Result};

/// A cell coordinate on the grid. Origin is the top-left corner, `x` grows to
/// the right and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single cell write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWrite {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl PixelWrite {
    pub fn new(pos: GridPos, color: Color) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            color,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }
}

/// An ordered batch of cell writes applied atomically.
/// Later writes to the same cell win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    writes: Vec<PixelWrite>,
}

impl Edit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, pos: GridPos, color: Color) {
        self.writes.push(PixelWrite::new(pos, color));
    }

    pub fn writes(&self) -> &[PixelWrite] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

impl FromIterator<PixelWrite> for Edit {
    fn from_iter<I: IntoIterator<Item = PixelWrite>>(iter: I) -> Self {
        Self {
            writes: iter.into_iter().collect(),
        }
    }
}

/// Immutable fixed-size grid of colors.
///
/// Pixel storage is reference counted so pictures can be cloned into the
/// undo history cheaply. Editing never touches shared storage: [`Picture::draw`]
/// copies the whole buffer and returns a new picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Arc<[Color]>,
}

impl Picture {
    /// Build a picture from a row-major pixel buffer
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidDimension { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(EditorError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// A picture with every cell set to `color`
    pub fn empty(width: usize, height: usize, color: Color) -> Result<Self> {
        Self::new(width, height, vec![color; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.index(pos.x, pos.y).is_ok()
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(EditorError::OutOfBounds {
                x: x.into(),
                y: y.into(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width)
    }

    /// Color of the cell at `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixel_at(&self, pos: GridPos) -> Result<Color> {
        self.pixel(pos.x, pos.y)
    }

    /// Apply `edit` over a full copy of this picture.
    ///
    /// An out-of-bounds write rejects the whole edit; `self` is never modified.
    pub fn draw(&self, edit: &Edit) -> Result<Picture> {
        let mut copy = self.pixels.to_vec();
        for write in edit.writes() {
            copy[self.index(write.x, write.y)?] = write.color;
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            pixels: copy.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejects_zero_dimensions() {
        assert!(matches!(
            Picture::empty(0, 5, Color::BLACK),
            Err(EditorError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(Picture::empty(5, 0, Color::BLACK).is_err());
    }

    #[test]
    fn test_new_checks_pixel_count() {
        let result = Picture::new(2, 2, vec![Color::BLACK; 3]);
        assert!(matches!(
            result,
            Err(EditorError::PixelCountMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let pixels = (0..6).map(|i| Color::rgb(i, 0, 0)).collect();
        let picture = Picture::new(3, 2, pixels).unwrap();
        assert_eq!(picture.pixel(2, 1).unwrap(), Color::rgb(5, 0, 0));
        assert_eq!(picture.pixel(0, 1).unwrap(), Color::rgb(3, 0, 0));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let picture = Picture::empty(4, 3, Color::WHITE).unwrap();
        assert!(matches!(
            picture.pixel(4, 0),
            Err(EditorError::OutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(picture.pixel(-1, 0).is_err());
        assert!(picture.pixel(0, 3).is_err());
    }

    #[test]
    fn test_draw_leaves_original_untouched() {
        let picture = Picture::empty(4, 4, Color::WHITE).unwrap();
        let mut edit = Edit::new();
        edit.push(GridPos::new(1, 2), Color::BLACK);

        let drawn = picture.draw(&edit).unwrap();
        assert_eq!(drawn.pixel(1, 2).unwrap(), Color::BLACK);
        assert_eq!(picture.pixel(1, 2).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_draw_rejects_out_of_bounds_write() {
        let picture = Picture::empty(4, 4, Color::WHITE).unwrap();
        let mut edit = Edit::new();
        edit.push(GridPos::new(0, 0), Color::BLACK);
        edit.push(GridPos::new(9, 0), Color::BLACK);
        assert!(matches!(
            picture.draw(&edit),
            Err(EditorError::OutOfBounds { x: 9, .. })
        ));
    }
}
