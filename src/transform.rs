//! Closed set of buffer transforms with typed parameters.
//!
//! `Transform` is what the session applies and what the controls adapter
//! produces. Dispatch is an exhaustive match, so adding an operation forces
//! every consumer to handle it.
//!
//! Serialized form is internally tagged, e.g. `{"op": "blur", "sigma": 1.5}`.
use crate::error::Result;
use crate::image::PixelBuffer;
use crate::ops;
use crate::params::{
    BlurParams, BrightnessColorParams, ContrastParams, ContrastStretchParams, NoiseReduceParams,
    SharpenParams,
};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    /// Luma projection to a Gray buffer.
    Grayscale,
    /// RGB negative.
    Invert,
    Blur(BlurParams),
    /// Percentile rescale.
    ContrastStretch(ContrastStretchParams),
    /// Linear factor around mid-gray.
    Contrast(ContrastParams),
    BrightnessColor(BrightnessColorParams),
    /// Unsharp mask.
    Sharpen(SharpenParams),
    /// Fixed 3×3 high-pass preset.
    SharpenFixed,
    /// Synthetic noise followed by smoothing.
    NoisyDenoise(NoiseReduceParams),
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::Invert => "invert",
            Transform::Blur(_) => "blur",
            Transform::ContrastStretch(_) => "contrast_stretch",
            Transform::Contrast(_) => "contrast",
            Transform::BrightnessColor(_) => "brightness_color",
            Transform::Sharpen(_) => "sharpen",
            Transform::SharpenFixed => "sharpen_fixed",
            Transform::NoisyDenoise(_) => "noisy_denoise",
        }
    }

    /// Check parameters without touching any buffer.
    pub fn validate(&self) -> Result<()> {
        match self {
            Transform::Grayscale | Transform::Invert | Transform::SharpenFixed => Ok(()),
            Transform::Blur(p) => p.validate(),
            Transform::ContrastStretch(p) => p.validate(),
            Transform::Contrast(p) => p.validate(),
            Transform::BrightnessColor(p) => p.validate(),
            Transform::Sharpen(p) => p.validate(),
            Transform::NoisyDenoise(p) => p.validate(),
        }
    }

    /// Run the transform on `buf`. `rng` is only consumed by
    /// [`Transform::NoisyDenoise`].
    pub fn apply<R: Rng + ?Sized>(&self, buf: &PixelBuffer, rng: &mut R) -> Result<PixelBuffer> {
        self.validate()?;
        let t0 = Instant::now();
        let out = match *self {
            Transform::Grayscale => ops::grayscale(buf),
            Transform::Invert => ops::invert(buf),
            Transform::Blur(p) => ops::blur(buf, p)?,
            Transform::ContrastStretch(p) => ops::contrast_stretch(buf, p)?,
            Transform::Contrast(p) => ops::contrast(buf, p)?,
            Transform::BrightnessColor(p) => ops::adjust_brightness_color(buf, p)?,
            Transform::Sharpen(p) => ops::sharpen(buf, p)?,
            Transform::SharpenFixed => ops::sharpen_fixed(buf),
            Transform::NoisyDenoise(p) => ops::noisy_denoise(buf, p, rng)?,
        };
        debug!(
            "transform {} on {:?}: {:.3} ms",
            self.name(),
            buf.dimensions(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channels;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deserializes_tagged_json() {
        let t: Transform = serde_json::from_str(r#"{"op": "blur", "sigma": 1.5}"#).unwrap();
        assert_eq!(t, Transform::Blur(BlurParams::new(1.5)));
        let t: Transform = serde_json::from_str(r#"{"op": "invert"}"#).unwrap();
        assert_eq!(t, Transform::Invert);
        let t: Transform = serde_json::from_str(r#"{"op": "sharpen", "threshold": 4}"#).unwrap();
        assert_eq!(
            t,
            Transform::Sharpen(SharpenParams {
                threshold: 4,
                ..SharpenParams::default()
            })
        );
    }

    #[test]
    fn apply_rejects_before_computing() {
        let buf = PixelBuffer::new(4, 4, Channels::Gray);
        let mut rng = StdRng::seed_from_u64(0);
        let t = Transform::Blur(BlurParams::new(-1.0));
        assert!(t.apply(&buf, &mut rng).is_err());
    }

    #[test]
    fn grayscale_narrows_channels() {
        let buf = PixelBuffer::new(3, 2, Channels::Rgb);
        let mut rng = StdRng::seed_from_u64(0);
        let out = Transform::Grayscale.apply(&buf, &mut rng).unwrap();
        assert_eq!(out.channels(), Channels::Gray);
        assert_eq!(out.dimensions(), (3, 2));
    }
}
