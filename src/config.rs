//! Brush configuration shared across strokes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::core::Error;
use crate::mask::DEFAULT_MASK_RESOLUTION;

/// Fixed per-frame time step the editor drives brushes with (seconds).
pub const DEFAULT_DELTA_TIME: f32 = 0.0167;

/// User-facing settings for the tree scaling brush.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalerConfig {
    /// Square resolution brush masks are resampled to each frame
    pub mask_resolution: u32,
    /// Time step applied per paint frame
    pub delta_time: f32,
    /// Scale change per second at full mask weight
    pub default_strength: f32,
    /// Seed for the brush's random source
    pub seed: u64,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            mask_resolution: DEFAULT_MASK_RESOLUTION,
            delta_time: DEFAULT_DELTA_TIME,
            default_strength: 1.0,
            seed: 12345,
        }
    }
}

impl ScalerConfig {
    /// Reject settings the brush cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.mask_resolution == 0 {
            return Err(Error::Config("mask_resolution must be at least 1".to_string()));
        }
        if !self.delta_time.is_finite() || self.delta_time < 0.0 {
            return Err(Error::Config(format!("invalid delta_time: {}", self.delta_time)));
        }
        if !self.default_strength.is_finite() {
            return Err(Error::Config(format!("invalid default_strength: {}", self.default_strength)));
        }
        Ok(())
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync). Missing fields take their defaults.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
