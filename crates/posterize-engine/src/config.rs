//! Posterization configuration.

use serde::{Deserialize, Serialize};

use crate::{EngineError, LEVELS_MAX, LEVELS_MIN, Result};

/// Configuration for one posterization run.
///
/// `levels` outside `2..=10` is a caller contract violation; it is rejected
/// by [`validate`](Self::validate) (and therefore by the engine) rather than
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterizeConfig {
    /// Number of discrete tone values per channel, 2..=10.
    pub levels: u8,

    /// Collapse the image to quantized BT.601 luma instead of quantizing
    /// each channel independently.
    pub grayscale: bool,

    /// Mirror each row left-to-right after quantization.
    ///
    /// This is a horizontal mirror, not a vertical (top-to-bottom) flip,
    /// despite earlier naming that suggested otherwise.
    pub mirror_horizontal: bool,
}

impl Default for PosterizeConfig {
    fn default() -> Self {
        Self {
            levels: 4,
            grayscale: true,
            mirror_horizontal: false,
        }
    }
}

impl PosterizeConfig {
    /// Create a config with the default settings (4 levels, grayscale on,
    /// mirror off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the number of tone levels. Validated on use, not here.
    pub fn with_levels(mut self, levels: u8) -> Self {
        self.levels = levels;
        self
    }

    /// Builder: set grayscale conversion.
    pub fn with_grayscale(mut self, val: bool) -> Self {
        self.grayscale = val;
        self
    }

    /// Builder: set horizontal mirroring.
    pub fn with_mirror_horizontal(mut self, val: bool) -> Self {
        self.mirror_horizontal = val;
        self
    }

    /// Check the `levels` contract.
    pub fn validate(&self) -> Result<()> {
        if !(LEVELS_MIN..=LEVELS_MAX).contains(&self.levels) {
            return Err(EngineError::InvalidConfig(self.levels));
        }
        Ok(())
    }

    /// Distance between adjacent quantized tone values.
    pub fn quantization_step(&self) -> f64 {
        255.0 / f64::from(self.levels - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let cfg = PosterizeConfig::default();
        assert_eq!(cfg.levels, 4);
        assert!(cfg.grayscale);
        assert!(!cfg.mirror_horizontal);
    }

    #[test]
    fn builder_chain() {
        let cfg = PosterizeConfig::new()
            .with_levels(7)
            .with_grayscale(false)
            .with_mirror_horizontal(true);
        assert_eq!(cfg.levels, 7);
        assert!(!cfg.grayscale);
        assert!(cfg.mirror_horizontal);
    }

    #[test]
    fn validate_accepts_full_range() {
        for levels in LEVELS_MIN..=LEVELS_MAX {
            assert!(PosterizeConfig::new().with_levels(levels).validate().is_ok());
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        for levels in [0, 1, 11, 255] {
            let err = PosterizeConfig::new().with_levels(levels).validate().unwrap_err();
            assert_eq!(err, EngineError::InvalidConfig(levels));
        }
    }

    #[test]
    fn quantization_step_two_levels_is_full_range() {
        let cfg = PosterizeConfig::new().with_levels(2);
        assert!((cfg.quantization_step() - 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_camel_case() {
        let cfg = PosterizeConfig::new().with_mirror_horizontal(true);
        let json = serde_json::to_value(cfg).unwrap();
        assert_eq!(json["levels"], 4);
        assert_eq!(json["grayscale"], true);
        assert_eq!(json["mirrorHorizontal"], true);
    }
}
