//! Sharpening: parameterized unsharp mask and a fixed 3×3 preset.
use crate::error::Result;
use crate::filters::{convolve3x3, gaussian_blur_planes, SHARPEN_KERNEL};
use crate::image::buffer::quantize;
use crate::image::{ImageView, ImageViewMut, PixelBuffer};
use crate::params::SharpenParams;

/// Unsharp mask: `in + percent/100 * (in - gaussian(in, radius))`, applied
/// only where `|in - blurred| >= threshold` (8-bit levels).
pub fn sharpen(buf: &PixelBuffer, params: SharpenParams) -> Result<PixelBuffer> {
    params.validate()?;
    let blurred = gaussian_blur_planes(&buf.planes(), params.radius);
    let amount = params.percent / 100.0;
    let threshold = params.threshold as f32;
    let n = buf.channels().count();

    let samples = buf.samples();
    let mut out = buf.clone();
    let dst = out.samples_mut();
    for (c, plane) in blurred.iter().enumerate() {
        for (i, &b) in plane.data.iter().enumerate() {
            let idx = i * n + c;
            let orig = samples[idx] as f32;
            let diff = orig - b * 255.0;
            if diff.abs() >= threshold {
                dst[idx] = quantize(orig + amount * diff);
            }
        }
    }
    Ok(out)
}

/// Fixed high-pass sharpening (`SHARPEN_KERNEL`), no parameters.
pub fn sharpen_fixed(buf: &PixelBuffer) -> PixelBuffer {
    let planes: Vec<_> = buf
        .planes()
        .iter()
        .map(|p| convolve3x3(p, &SHARPEN_KERNEL))
        .collect();
    PixelBuffer::from_planes(&planes, buf.channels())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(w: usize) -> PixelBuffer {
        PixelBuffer::from_gray_fn(w, 1, |x, _| if x < w / 2 { 80 } else { 170 })
    }

    #[test]
    fn unsharp_mask_increases_edge_contrast() {
        let buf = step(12);
        let out = sharpen(&buf, SharpenParams::default()).unwrap();
        let s = out.as_bytes();
        assert!(s[5] < 80, "dark side should undershoot, got {}", s[5]);
        assert!(s[6] > 170, "bright side should overshoot, got {}", s[6]);
        // Far from the edge nothing changes.
        assert_eq!(s[0], 80);
        assert_eq!(s[11], 170);
    }

    #[test]
    fn high_threshold_leaves_image_untouched() {
        let buf = step(12);
        let params = SharpenParams {
            threshold: 255,
            ..SharpenParams::default()
        };
        assert_eq!(sharpen(&buf, params).unwrap(), buf);
    }

    #[test]
    fn zero_percent_is_identity() {
        let buf = step(10);
        let params = SharpenParams {
            percent: 0.0,
            threshold: 0,
            ..SharpenParams::default()
        };
        assert_eq!(sharpen(&buf, params).unwrap(), buf);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let params = SharpenParams {
            radius: -2.0,
            ..SharpenParams::default()
        };
        assert!(sharpen(&step(4), params).is_err());
    }

    #[test]
    fn fixed_preset_overshoots_edges_and_keeps_flat_areas() {
        let buf = step(8);
        let out = sharpen_fixed(&buf);
        let s = out.as_bytes();
        assert!(s[3] < 80);
        assert!(s[4] > 170);
        assert_eq!(s[0], 80);
        assert_eq!(s[7], 170);
    }
}
