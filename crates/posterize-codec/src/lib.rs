//! Image decode/encode collaborator for the posterization engine.
//!
//! Decodes user-supplied raster bytes into the engine's RGBA buffer,
//! encodes engine results as PNG, and produces the download filename and
//! caption conventions for processed images.

mod codec;
mod naming;

// Re-exports for convenience
pub use codec::{decode, encode_png};
pub use naming::{download_filename, settings_caption};

/// Errors that can occur while decoding or encoding images.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("PNG encode failed: {0}")]
    Encode(String),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
