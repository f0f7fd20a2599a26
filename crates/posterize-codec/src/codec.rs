//! Raster decode/encode via the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use posterize_engine::PixelBuffer;
use tracing::debug;

use crate::{CodecError, Result};

/// Decode raster bytes into an RGBA pixel buffer.
///
/// Accepts any container the `image` crate can sniff from the bytes
/// (PNG, JPEG, GIF, ...). Non-RGBA sources are converted to RGBA8.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "Decoded image to RGBA");

    PixelBuffer::from_rgba(width, height, rgba.into_raw())
        .map_err(|e| CodecError::Decode(e.to_string()))
}

/// Encode a pixel buffer as lossless PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let (width, height) = (buffer.width(), buffer.height());
    let img = RgbaImage::from_raw(width, height, buffer.data().to_vec())
        .ok_or_else(|| CodecError::Encode(format!("buffer does not hold a {width}x{height} image")))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    debug!(width, height, bytes = out.get_ref().len(), "Encoded PNG");

    Ok(out.into_inner())
}
