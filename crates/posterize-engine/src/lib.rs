//! Posterization engine for raster images.
//!
//! Provides tone quantization (color or BT.601 grayscale) and optional
//! horizontal mirroring over flat RGBA pixel buffers. The engine is pure:
//! every call allocates a new output buffer and leaves the input untouched.

pub mod buffer;
pub mod config;
mod mirror;
mod process;
mod quantize;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use config::PosterizeConfig;
pub use process::process;

/// Smallest accepted number of posterization levels.
pub const LEVELS_MIN: u8 = 2;

/// Largest accepted number of posterization levels.
pub const LEVELS_MAX: u8 = 10;

/// Errors that can occur while posterizing an image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid config: levels must be between 2 and 10, got {0}")]
    InvalidConfig(u8),

    #[error(
        "pixel buffer size mismatch: {width}x{height} RGBA needs {expected} bytes, got {actual}"
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
