//! Contrast operations.
//!
//! Two different operations, not interchangeable:
//!
//! - [`contrast_stretch`]: percentile rescale. The `low`/`high` percentiles of
//!   all samples (every channel pooled together) are mapped onto `[0, 255]`;
//!   values outside clamp. This is the editor's "contrast stretching".
//! - [`contrast`]: linear factor around mid-gray, `128 + (s - 128) * factor`.
//!
//! Percentiles use nearest rank on the sorted samples:
//! `index = round(p / 100 * (N - 1))`. Sorting is replaced by a 256-bucket
//! count, which gives the same order statistic for 8-bit data.
use crate::error::Result;
use crate::image::buffer::quantize;
use crate::image::{ImageView, PixelBuffer};
use crate::params::{ContrastParams, ContrastStretchParams};
use log::debug;

/// Percentile rescale of the whole buffer.
///
/// A buffer whose two percentiles coincide (e.g. a flat image) is returned
/// unchanged.
pub fn contrast_stretch(buf: &PixelBuffer, params: ContrastStretchParams) -> Result<PixelBuffer> {
    params.validate()?;
    let Some((lo, hi)) = percentile_bounds(buf, params.low_percentile, params.high_percentile)
    else {
        return Ok(buf.clone());
    };
    if hi <= lo {
        debug!("contrast_stretch: degenerate window [{lo}, {hi}], returning copy");
        return Ok(buf.clone());
    }
    let scale = 255.0 / (hi - lo) as f32;
    let lut: Vec<u8> = (0..=255u8)
        .map(|s| quantize((s as f32 - lo as f32) * scale))
        .collect();
    debug!("contrast_stretch: [{lo}, {hi}] -> [0, 255]");
    Ok(buf.map_samples(|s| lut[s as usize]))
}

/// Linear contrast around 128.
pub fn contrast(buf: &PixelBuffer, params: ContrastParams) -> Result<PixelBuffer> {
    params.validate()?;
    let factor = params.factor;
    Ok(buf.map_samples(|s| quantize(128.0 + (s as f32 - 128.0) * factor)))
}

/// Sample values at the `low` and `high` percentiles over all samples.
/// `None` for an empty buffer.
pub fn percentile_bounds(buf: &PixelBuffer, low: f32, high: f32) -> Option<(u8, u8)> {
    let samples = buf.samples();
    if samples.is_empty() {
        return None;
    }
    let mut counts = [0usize; 256];
    for &s in samples {
        counts[s as usize] += 1;
    }
    let n = samples.len();
    Some((
        nth_sample(&counts, rank(low, n)),
        nth_sample(&counts, rank(high, n)),
    ))
}

fn rank(percentile: f32, n: usize) -> usize {
    let idx = (percentile as f64 / 100.0 * (n - 1) as f64).round() as usize;
    idx.min(n - 1)
}

/// Value at zero-based position `k` of the sorted sample sequence.
fn nth_sample(counts: &[usize; 256], k: usize) -> u8 {
    let mut seen = 0usize;
    for (value, &c) in counts.iter().enumerate() {
        seen += c;
        if seen > k {
            return value as u8;
        }
    }
    255
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channels;

    fn ramp(values: impl IntoIterator<Item = u8>) -> PixelBuffer {
        let data: Vec<u8> = values.into_iter().collect();
        PixelBuffer::from_raw(data.len(), 1, Channels::Gray, data).unwrap()
    }

    #[test]
    fn percentiles_follow_nearest_rank() {
        // 0..=100: N = 101, index = p exactly.
        let buf = ramp(0..=100);
        assert_eq!(percentile_bounds(&buf, 2.0, 98.0), Some((2, 98)));
        assert_eq!(percentile_bounds(&buf, 0.0, 100.0), Some((0, 100)));
    }

    #[test]
    fn fractional_ranks_round_to_nearest() {
        // N = 10: index = round(p / 100 * 9).
        let buf = ramp((1..=10).map(|v| v * 10));
        // 0.18 -> 0, 8.82 -> 9
        assert_eq!(percentile_bounds(&buf, 2.0, 98.0), Some((10, 100)));
        // 0.54 -> 1 (floor would give 0), 8.46 -> 8 (ceil would give 9)
        assert_eq!(percentile_bounds(&buf, 6.0, 94.0), Some((20, 90)));
        // 4.5 rounds away from zero
        assert_eq!(percentile_bounds(&buf, 50.0, 50.0), Some((60, 60)));
    }

    #[test]
    fn stretch_maps_window_to_full_range() {
        let buf = ramp(0..=100);
        let params = ContrastStretchParams {
            low_percentile: 10.0,
            high_percentile: 60.0,
        };
        let out = contrast_stretch(&buf, params).unwrap();
        let s = out.as_bytes();
        assert_eq!(s[5], 0);
        assert_eq!(s[10], 0);
        assert_eq!(s[60], 255);
        assert_eq!(s[100], 255);
        assert_eq!(s[20], 51);
    }

    #[test]
    fn stretch_of_flat_image_is_identity() {
        let buf = ramp(std::iter::repeat(77).take(16));
        let out = contrast_stretch(&buf, ContrastStretchParams::default()).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn percentiles_pool_all_channels() {
        let buf = PixelBuffer::from_raw(1, 1, Channels::Rgb, vec![10, 20, 30]).unwrap();
        assert_eq!(percentile_bounds(&buf, 0.0, 100.0), Some((10, 30)));
        assert_eq!(percentile_bounds(&buf, 50.0, 50.0), Some((20, 20)));
    }

    #[test]
    fn linear_contrast_pivots_on_mid_gray() {
        let buf = ramp([0, 64, 128, 192, 255]);
        let out = contrast(&buf, ContrastParams::new(2.0)).unwrap();
        assert_eq!(out.as_bytes(), &[0, 0, 128, 255, 255]);
        let flat = contrast(&buf, ContrastParams::new(0.0)).unwrap();
        assert!(flat.as_bytes().iter().all(|&s| s == 128));
        assert_eq!(contrast(&buf, ContrastParams::new(1.0)).unwrap(), buf);
    }
}
