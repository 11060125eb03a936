use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::color::Color;
use crate::error::{EditorError, Result};
use crate::picture::Picture;

/// Largest width or height accepted on import
pub const MAX_IMPORT_SIZE: usize = 100;

/// A decoded image as straight RGBA bytes, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Self {
        Self { width, height, rgba }
    }
}

/// Build a picture from a bitmap, keeping at most `max_size` cells per side.
///
/// Oversized bitmaps are cropped from the top-left corner. Alpha is dropped.
pub fn picture_from_bitmap(bitmap: &Bitmap, max_size: usize) -> Result<Picture> {
    if bitmap.width == 0 || bitmap.height == 0 || bitmap.rgba.is_empty() {
        return Err(EditorError::EmptySource);
    }
    let expected = bitmap.width * bitmap.height * 4;
    if bitmap.rgba.len() < expected {
        return Err(EditorError::PixelCountMismatch {
            expected,
            actual: bitmap.rgba.len(),
        });
    }

    let width = bitmap.width.min(max_size);
    let height = bitmap.height.min(max_size);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let i = (x + y * bitmap.width) * 4;
            pixels.push(Color::rgb(bitmap.rgba[i], bitmap.rgba[i + 1], bitmap.rgba[i + 2]));
        }
    }
    Picture::new(width, height, pixels)
}

/// One opaque pixel per cell
pub fn picture_to_bitmap(picture: &Picture) -> Bitmap {
    let rgba = picture.pixels().iter().flat_map(|color| color.to_rgba()).collect();
    Bitmap::new(picture.width(), picture.height(), rgba)
}

/// Decode any image format the `image` crate understands
pub fn decode_picture(bytes: &[u8], max_size: usize) -> Result<Picture> {
    if bytes.is_empty() {
        return Err(EditorError::EmptySource);
    }
    let img = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", img.width(), img.height());
    let rgba = img.to_rgba8();
    let bitmap = Bitmap::new(rgba.width() as usize, rgba.height() as usize, rgba.into_raw());
    picture_from_bitmap(&bitmap, max_size)
}

/// Read and decode an image file
pub fn load_picture(path: impl AsRef<Path>, max_size: usize) -> Result<Picture> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    log::info!("Loading picture from {} ({} bytes)", path.display(), bytes.len());
    decode_picture(&bytes, max_size)
}

fn to_rgba_image(picture: &Picture) -> RgbaImage {
    let bitmap = picture_to_bitmap(picture);
    RgbaImage::from_fn(bitmap.width as u32, bitmap.height as u32, |x, y| {
        let i = (x as usize + y as usize * bitmap.width) * 4;
        image::Rgba([
            bitmap.rgba[i],
            bitmap.rgba[i + 1],
            bitmap.rgba[i + 2],
            bitmap.rgba[i + 3],
        ])
    })
}

/// Encode a picture as PNG, one pixel per cell
pub fn encode_png(picture: &Picture) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    to_rgba_image(picture).write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write a picture to `path` as PNG
pub fn save_png(picture: &Picture, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, encode_png(picture)?)?;
    log::info!(
        "Saved {}x{} picture to {}",
        picture.width(),
        picture.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bitmap_is_rejected() {
        let bitmap = Bitmap::new(0, 0, Vec::new());
        assert!(matches!(
            picture_from_bitmap(&bitmap, MAX_IMPORT_SIZE),
            Err(EditorError::EmptySource)
        ));
        assert!(matches!(decode_picture(&[], MAX_IMPORT_SIZE), Err(EditorError::EmptySource)));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let bitmap = Bitmap::new(2, 2, vec![0; 12]);
        assert!(matches!(
            picture_from_bitmap(&bitmap, MAX_IMPORT_SIZE),
            Err(EditorError::PixelCountMismatch { expected: 16, actual: 12 })
        ));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let bitmap = Bitmap::new(1, 1, vec![10, 20, 30, 0]);
        let picture = picture_from_bitmap(&bitmap, MAX_IMPORT_SIZE).unwrap();
        assert_eq!(picture.pixel(0, 0).unwrap(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_garbage_bytes_are_an_image_error() {
        assert!(matches!(
            decode_picture(b"not an image", MAX_IMPORT_SIZE),
            Err(EditorError::Image(_))
        ));
    }
}
