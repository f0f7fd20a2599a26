//! Tone quantization over flat RGBA data.
//!
//! Each channel (or the BT.601 luma, in grayscale mode) is snapped to the
//! nearest of `levels` evenly spaced values in 0..=255. Alpha is never
//! touched.

use crate::buffer::CHANNELS;

// ITU-R BT.601 luma weights.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Quantize RGB samples in place. `step` is the distance between adjacent
/// tone values, `255.0 / (levels - 1)`.
///
/// Rounding is `f64::round` (half away from zero) both when picking the
/// level and when narrowing the level value back to a sample.
pub(crate) fn quantize(data: &mut [u8], step: f64, grayscale: bool) {
    for px in data.chunks_exact_mut(CHANNELS) {
        if grayscale {
            // Luma of the original channels, quantized once.
            let gray = LUMA_R * f64::from(px[0])
                + LUMA_G * f64::from(px[1])
                + LUMA_B * f64::from(px[2]);
            let q = quantize_sample(gray, step);
            px[0] = q;
            px[1] = q;
            px[2] = q;
        } else {
            // Channels quantize independently; hue shifts are expected.
            px[0] = quantize_sample(f64::from(px[0]), step);
            px[1] = quantize_sample(f64::from(px[1]), step);
            px[2] = quantize_sample(f64::from(px[2]), step);
        }
    }
}

fn quantize_sample(value: f64, step: f64) -> u8 {
    let snapped = (value / step).round() * step;
    snapped.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_levels_snap_to_black_or_white() {
        let mut data = vec![10, 20, 30, 255, 200, 100, 50, 255];
        quantize(&mut data, 255.0, false);
        assert_eq!(data, vec![0, 0, 0, 255, 255, 0, 0, 255]);
    }

    #[test]
    fn channels_quantize_independently() {
        // 127/255 rounds down to level 0, 128/255 rounds up to level 1
        let mut data = vec![127, 128, 255, 7];
        quantize(&mut data, 255.0, false);
        assert_eq!(data, vec![0, 255, 255, 7]);
    }

    #[test]
    fn grayscale_uses_bt601_luma_of_original_channels() {
        // gray = 0.299*200 + 0.587*100 + 0.114*50 = 124.2 -> level 0 of 2
        let mut data = vec![200, 100, 50, 255];
        quantize(&mut data, 255.0, true);
        assert_eq!(data, vec![0, 0, 0, 255]);
    }

    #[test]
    fn grayscale_assigns_same_value_to_all_channels() {
        let mut data = vec![13, 250, 77, 4, 91, 0, 182, 200];
        quantize(&mut data, 255.0 / 4.0, true);
        for px in data.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        // Alpha untouched
        assert_eq!(data[3], 4);
        assert_eq!(data[7], 200);
    }

    #[test]
    fn three_levels_hit_midpoint() {
        // step = 127.5; 100 -> round(0.784) = 1 -> 127.5 -> 128
        let mut data = vec![100, 0, 255, 255];
        quantize(&mut data, 127.5, false);
        assert_eq!(data, vec![128, 0, 255, 255]);
    }

    #[test]
    fn alpha_is_never_modified() {
        let mut data = vec![40, 90, 140, 17, 200, 10, 60, 255];
        quantize(&mut data, 255.0 / 9.0, false);
        assert_eq!(data[3], 17);
        assert_eq!(data[7], 255);
    }
}
