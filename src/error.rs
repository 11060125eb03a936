use thiserror::Error;

/// Errors raised by the editor core.
///
/// All of these are local to the call that raised them. Undoing with an empty
/// history is not an error.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A picture was requested with a zero width or height
    #[error("Invalid picture dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A coordinate lies outside the grid. This is a caller bug and is never clamped.
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// An import was attempted without any bitmap data
    #[error("No image data to import")]
    EmptySource,

    /// Pixel buffer length doesn't match the declared dimensions
    #[error("Expected {expected} pixel values, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
