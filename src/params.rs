//! Parameter types for the transforms.
//!
//! Each struct validates its own domain; transforms call `validate()` before
//! allocating any output so a rejected parameter never yields a partial
//! buffer. Values are rejected, never clamped.
//!
//! Defaults follow the values the editor exposes on its sliders.

use crate::error::{ensure_non_negative, EditError, Result};
use serde::{Deserialize, Serialize};

/// Gaussian blur standard deviation, per spatial axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlurParams {
    pub sigma: f32,
}

impl BlurParams {
    pub fn new(sigma: f32) -> Self {
        Self { sigma }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("sigma", self.sigma)
    }
}

impl Default for BlurParams {
    fn default() -> Self {
        Self { sigma: 2.0 }
    }
}

/// Percentile window mapped onto the full `[0, 255]` range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastStretchParams {
    pub low_percentile: f32,
    pub high_percentile: f32,
}

impl ContrastStretchParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("low_percentile", self.low_percentile)?;
        ensure_non_negative("high_percentile", self.high_percentile)?;
        if self.high_percentile > 100.0 {
            return Err(EditError::invalid(
                "high_percentile",
                format!("must be at most 100, got {}", self.high_percentile),
            ));
        }
        if self.low_percentile >= self.high_percentile {
            return Err(EditError::invalid(
                "low_percentile",
                format!(
                    "must be below high_percentile ({} >= {})",
                    self.low_percentile, self.high_percentile
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ContrastStretchParams {
    fn default() -> Self {
        Self {
            low_percentile: 2.0,
            high_percentile: 98.0,
        }
    }
}

/// Linear contrast factor around mid-gray (128).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastParams {
    pub factor: f32,
}

impl ContrastParams {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("factor", self.factor)
    }
}

impl Default for ContrastParams {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

/// Brightness scale followed by saturation blend. `1.0` leaves either pass
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessColorParams {
    pub brightness: f32,
    pub color: f32,
}

impl BrightnessColorParams {
    pub fn new(brightness: f32, color: f32) -> Self {
        Self { brightness, color }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("brightness", self.brightness)?;
        ensure_non_negative("color", self.color)
    }
}

impl Default for BrightnessColorParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            color: 1.0,
        }
    }
}

/// Unsharp mask settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharpenParams {
    /// Gaussian sigma of the mask blur.
    pub radius: f32,
    /// Strength in percent of the high-pass difference added back.
    pub percent: f32,
    /// Minimum absolute difference (in 8-bit levels) before a sample changes.
    pub threshold: u8,
}

impl SharpenParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("radius", self.radius)?;
        ensure_non_negative("percent", self.percent)
    }
}

impl Default for SharpenParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            percent: 150.0,
            threshold: 3,
        }
    }
}

/// Synthetic noise variance (normalized `[0, 1]` units) and smoothing sigma.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseReduceParams {
    pub noise_variance: f32,
    pub smooth_sigma: f32,
}

impl NoiseReduceParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("noise_variance", self.noise_variance)?;
        ensure_non_negative("smooth_sigma", self.smooth_sigma)
    }
}

impl Default for NoiseReduceParams {
    fn default() -> Self {
        Self {
            noise_variance: 0.01,
            smooth_sigma: 1.0,
        }
    }
}
