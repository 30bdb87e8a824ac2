//! Error types for exporting the logo.

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting the logo to an image file
#[derive(Error, Debug)]
pub enum ExportError {
    /// The offscreen surface could not be allocated
    #[error("Cannot create a {width}x{height} image surface")]
    Surface {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// JPEG encoding failed
    #[error("Failed to encode JPEG: {0}")]
    Jpeg(#[from] image::ImageError),

    /// Writing the file failed
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}
