use pixel_editor::codec::{
    Bitmap, MAX_IMPORT_SIZE, load_picture, picture_from_bitmap, picture_to_bitmap, save_png,
};
use pixel_editor::{Color, Edit, EditorError, GridPos, Picture};

fn bitmap(width: usize, height: usize) -> Bitmap {
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 7, 255]);
        }
    }
    Bitmap::new(width, height, rgba)
}

#[test]
fn test_import_crops_to_max_size() {
    let picture = picture_from_bitmap(&bitmap(250, 40), MAX_IMPORT_SIZE).unwrap();
    assert_eq!(picture.width(), 100);
    assert_eq!(picture.height(), 40);
    // Top-left region is kept
    assert_eq!(picture.pixel(99, 39).unwrap(), Color::rgb(99, 39, 7));
}

#[test]
fn test_import_ignores_alpha() {
    let source = Bitmap::new(1, 1, vec![10, 20, 30, 0]);
    let picture = picture_from_bitmap(&source, MAX_IMPORT_SIZE).unwrap();
    assert_eq!(picture.pixel(0, 0).unwrap(), Color::rgb(10, 20, 30));
}

#[test]
fn test_empty_bitmap_is_rejected() {
    let result = picture_from_bitmap(&Bitmap::new(0, 0, Vec::new()), MAX_IMPORT_SIZE);
    assert!(matches!(result, Err(EditorError::EmptySource)));
}

#[test]
fn test_export_is_opaque_and_sized_like_picture() {
    let picture = Picture::empty(7, 3, Color::rgb(1, 2, 3)).unwrap();
    let bitmap = picture_to_bitmap(&picture);
    assert_eq!(bitmap.width, 7);
    assert_eq!(bitmap.height, 3);
    assert_eq!(bitmap.rgba.len(), 7 * 3 * 4);
    assert!(bitmap.rgba.chunks(4).all(|px| px == [1u8, 2, 3, 255]));
}

#[test]
fn test_png_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("art.png");

    let mut edit = Edit::new();
    edit.push(GridPos::new(2, 1), Color::rgb(200, 10, 10));
    let picture = Picture::empty(4, 3, Color::CANVAS).unwrap().draw(&edit).unwrap();

    save_png(&picture, &path).unwrap();
    let loaded = load_picture(&path, MAX_IMPORT_SIZE).unwrap();
    assert_eq!(loaded, picture);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_picture(dir.path().join("missing.png"), MAX_IMPORT_SIZE).is_err());
}
