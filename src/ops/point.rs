//! Per-sample operations: grayscale, negative, brightness and saturation.
use crate::error::Result;
use crate::image::buffer::quantize;
use crate::image::{luma, Channels, ImageViewMut, PixelBuffer};
use crate::params::BrightnessColorParams;

/// Luma projection of `buf`. Gray input is returned as a copy.
pub fn grayscale(buf: &PixelBuffer) -> PixelBuffer {
    buf.to_gray()
}

/// Color negative. Gray input is widened to RGB first, so the result is
/// always RGB.
pub fn invert(buf: &PixelBuffer) -> PixelBuffer {
    buf.to_rgb().map_samples(|s| 255 - s)
}

/// Scale every sample by `brightness`, then blend each RGB pixel between its
/// luma and its color by `color`. Gray buffers skip the color pass.
pub fn adjust_brightness_color(
    buf: &PixelBuffer,
    params: BrightnessColorParams,
) -> Result<PixelBuffer> {
    params.validate()?;
    let brightness = params.brightness;
    let mut out = buf.map_samples(|s| quantize(s as f32 * brightness));
    if out.channels() == Channels::Rgb {
        let color = params.color;
        for px in out.samples_mut().chunks_exact_mut(3) {
            let l = luma(px[0], px[1], px[2]);
            for s in px.iter_mut() {
                *s = quantize(l + (*s as f32 - l) * color);
            }
        }
    }
    Ok(out)
}
