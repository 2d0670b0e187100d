// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the enhancement pipeline.
///
/// The defaults reproduce the fixed constants of the 4K upscale path; a
/// caller wanting different behaviour injects its own values. No
/// process-wide mutable state is involved — each pipeline owns its copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceConfig {
    /// Blend factor between the original pixel and its convolved value
    /// in the sharpen stage (0.0 = no sharpening, 1.0 = kernel only).
    pub sharpen_mix: f32,
    /// Contrast factor applied by the colour stage (1.0 is a no-op).
    pub contrast: f32,
    /// Saturation factor applied by the colour stage (1.0 is a no-op).
    pub saturation: f32,
    /// JPEG quality (0.0–1.0) used when encoding upscale output.
    pub upscale_quality: f32,
    /// JPEG quality (0.0–1.0) used when encoding custom-resize output.
    pub resize_quality: f32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            sharpen_mix: 0.35,
            contrast: 1.1,
            saturation: 1.15,
            upscale_quality: 0.95,
            resize_quality: 0.90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upscale_constants() {
        let config = EnhanceConfig::default();
        assert_eq!(config.sharpen_mix, 0.35);
        assert_eq!(config.contrast, 1.1);
        assert_eq!(config.saturation, 1.15);
        assert_eq!(config.upscale_quality, 0.95);
        assert_eq!(config.resize_quality, 0.90);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EnhanceConfig {
            sharpen_mix: 0.5,
            ..EnhanceConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: EnhanceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.sharpen_mix, 0.5);
        assert_eq!(restored.contrast, config.contrast);
    }
}
