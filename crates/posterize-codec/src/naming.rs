//! Naming conventions for processed images.

use posterize_engine::PosterizeConfig;

/// Suggested filename for a downloaded result,
/// e.g. `posterized_image_4_B&W_reversed.png`.
pub fn download_filename(config: &PosterizeConfig) -> String {
    let bw = if config.grayscale { "_B&W" } else { "" };
    let reversed = if config.mirror_horizontal { "_reversed" } else { "" };
    format!("posterized_image_{}{bw}{reversed}.png", config.levels)
}

/// Human-readable caption for a processed image,
/// e.g. `6 levels of posterization • B&W • Reversed`.
pub fn settings_caption(config: &PosterizeConfig) -> String {
    let mut caption = format!("{} levels of posterization", config.levels);
    if config.grayscale {
        caption.push_str(" \u{2022} B&W");
    }
    if config.mirror_horizontal {
        caption.push_str(" \u{2022} Reversed");
    }
    caption
}
