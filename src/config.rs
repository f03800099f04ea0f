//! Editor configuration loaded from JSON.
//!
//! Every field has a default, so an empty object `{}` is a valid config.
//!
//! ```json
//! {
//!   "max_dimensions": [960, 540],
//!   "noise_seed": 7,
//!   "controls": { "blur": { "min": 0.0, "max": 5.0, "step": 0.5 } }
//! }
//! ```
use crate::error::{EditError, Result};
use crate::image::io::DEFAULT_EXTENSIONS;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Loaded images are shrunk to fit inside `[width, height]`.
    pub max_dimensions: Option<[u32; 2]>,
    /// File extensions accepted on load (case-insensitive).
    pub supported_extensions: Vec<String>,
    /// Seed for the noise generator; `None` seeds from OS entropy.
    pub noise_seed: Option<u64>,
    pub controls: ControlsConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_dimensions: None,
            supported_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            noise_seed: None,
            controls: ControlsConfig::default(),
        }
    }
}

/// Inclusive slider bounds and resolution.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when `value` is `min + k * step` for some integer `k`, up to
    /// float noise in the slider's own arithmetic. A non-positive step means
    /// the slider is continuous.
    pub fn on_step(&self, value: f32) -> bool {
        if self.step <= 0.0 {
            return true;
        }
        let k = (value as f64 - self.min as f64) / self.step as f64;
        (k - k.round()).abs() <= STEP_TOLERANCE
    }
}

/// Fraction of a step a value may sit off the grid.
const STEP_TOLERANCE: f64 = 1e-3;

/// Slider ranges plus the fixed parameters the sliders do not expose.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub blur: SliderRange,
    pub contrast: SliderRange,
    pub brightness: SliderRange,
    /// Threshold slider of the unsharp mask.
    pub sharpen: SliderRange,
    pub sharpen_radius: f32,
    pub sharpen_percent: f32,
    /// Noise level slider; variance is `level² / 10000`.
    pub noise: SliderRange,
    pub noise_smooth_sigma: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            blur: SliderRange::new(0.0, 10.0, 0.1),
            contrast: SliderRange::new(0.5, 2.0, 0.1),
            brightness: SliderRange::new(0.5, 2.0, 0.1),
            sharpen: SliderRange::new(0.0, 10.0, 1.0),
            sharpen_radius: 2.0,
            sharpen_percent: 150.0,
            noise: SliderRange::new(0.0, 100.0, 1.0),
            noise_smooth_sigma: 1.0,
        }
    }
}

pub fn load_config(path: &Path) -> Result<EditorConfig> {
    let data = fs::read_to_string(path).map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|e| match e {
        EditError::Config { reason, .. } => EditError::Config {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })
}

/// Parse a config from a JSON string.
pub fn parse_config(json: &str) -> Result<EditorConfig> {
    serde_json::from_str(json).map_err(|e| EditError::Config {
        path: "<inline>".into(),
        reason: e.to_string(),
    })
}
