//! The posterization entry point.

use tracing::debug;

use crate::{PixelBuffer, PosterizeConfig, Result, mirror, quantize};

/// Posterize an image.
///
/// Validates the config eagerly (no partial work on contract violations),
/// then quantizes tones and, when requested, mirrors each row. Returns a
/// newly allocated buffer with the same dimensions; the input is never
/// mutated. Alpha passes through unchanged.
///
/// Rounding at level boundaries follows `f64::round` (half away from zero);
/// the rounding rule is part of the contract since it decides where banding
/// boundaries fall.
pub fn process(input: &PixelBuffer, config: &PosterizeConfig) -> Result<PixelBuffer> {
    config.validate()?;
    debug!(
        width = input.width(),
        height = input.height(),
        levels = config.levels,
        grayscale = config.grayscale,
        mirror = config.mirror_horizontal,
        "Posterizing image"
    );

    let mut data = input.data().to_vec();
    quantize::quantize(&mut data, config.quantization_step(), config.grayscale);
    if config.mirror_horizontal {
        mirror::mirror_horizontal(&mut data, input.width(), input.height());
    }

    PixelBuffer::from_rgba(input.width(), input.height(), data)
}
