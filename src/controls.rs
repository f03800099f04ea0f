//! UI-boundary adapter: raw slider values in, validated [`Transform`]s out.
//!
//! Widgets hand over strings or floats; everything is parsed and
//! range-checked here so the transform library only sees typed parameters.
//! Values outside a slider's range, or between two of its steps, are
//! rejected, not clamped or snapped.
use crate::config::{ControlsConfig, SliderRange};
use crate::error::{EditError, Result};
use crate::params::{
    BlurParams, BrightnessColorParams, ContrastParams, NoiseReduceParams, SharpenParams,
};
use crate::transform::Transform;

/// One entry of the editor's operation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Grayscale,
    Negative,
    Blur,
    Contrast,
    Brightness,
    Sharpen,
    NoiseReduction,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::Grayscale,
        Control::Negative,
        Control::Blur,
        Control::Contrast,
        Control::Brightness,
        Control::Sharpen,
        Control::NoiseReduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Grayscale => "Grayscale",
            Control::Negative => "Negative",
            Control::Blur => "Blur",
            Control::Contrast => "Contrast",
            Control::Brightness => "Brightness",
            Control::Sharpen => "Sharpen",
            Control::NoiseReduction => "Noise reduction",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Controls {
    config: ControlsConfig,
}

impl Controls {
    pub fn new(config: ControlsConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &ControlsConfig) -> Self {
        Self::new(config.clone())
    }

    /// Slider range, or `None` for one-shot operations without a value.
    pub fn range(&self, control: Control) -> Option<SliderRange> {
        match control {
            Control::Grayscale | Control::Negative => None,
            Control::Blur => Some(self.config.blur),
            Control::Contrast => Some(self.config.contrast),
            Control::Brightness => Some(self.config.brightness),
            Control::Sharpen => Some(self.config.sharpen),
            Control::NoiseReduction => Some(self.config.noise),
        }
    }

    /// Parse a widget string into a finite number.
    pub fn parse_value(&self, control: Control, raw: &str) -> Result<f32> {
        let value: f32 = raw.trim().parse().map_err(|_| {
            EditError::invalid(
                "value",
                format!("{}: `{raw}` is not a number", control.label()),
            )
        })?;
        if !value.is_finite() {
            return Err(EditError::invalid(
                "value",
                format!("{}: `{raw}` is not finite", control.label()),
            ));
        }
        Ok(value)
    }

    /// Range- and step-check `value` and build the matching transform.
    pub fn transform(&self, control: Control, value: f32) -> Result<Transform> {
        if let Some(range) = self.range(control) {
            if !range.contains(value) {
                return Err(EditError::invalid(
                    "value",
                    format!(
                        "{}: {value} outside [{}, {}]",
                        control.label(),
                        range.min,
                        range.max
                    ),
                ));
            }
            if !range.on_step(value) {
                return Err(EditError::invalid(
                    "value",
                    format!(
                        "{}: {value} is not a multiple of {} from {}",
                        control.label(),
                        range.step,
                        range.min
                    ),
                ));
            }
        }
        let transform = match control {
            Control::Grayscale => Transform::Grayscale,
            Control::Negative => Transform::Invert,
            Control::Blur => Transform::Blur(BlurParams::new(value)),
            Control::Contrast => Transform::Contrast(ContrastParams::new(value)),
            Control::Brightness => {
                Transform::BrightnessColor(BrightnessColorParams::new(value, 1.0))
            }
            Control::Sharpen => {
                if !(0.0..=255.0).contains(&value) {
                    return Err(EditError::invalid(
                        "threshold",
                        format!("{value} does not fit an 8-bit level"),
                    ));
                }
                Transform::Sharpen(SharpenParams {
                    radius: self.config.sharpen_radius,
                    percent: self.config.sharpen_percent,
                    threshold: value.round() as u8,
                })
            }
            Control::NoiseReduction => Transform::NoisyDenoise(NoiseReduceParams {
                noise_variance: value * value / 10_000.0,
                smooth_sigma: self.config.noise_smooth_sigma,
            }),
        };
        transform.validate()?;
        Ok(transform)
    }

    /// `parse_value` followed by `transform`.
    pub fn transform_from_str(&self, control: Control, raw: &str) -> Result<Transform> {
        let value = match self.range(control) {
            Some(_) => self.parse_value(control, raw)?,
            None => 0.0,
        };
        self.transform(control, value)
    }
}
