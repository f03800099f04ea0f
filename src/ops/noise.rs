//! Noise injection followed by Gaussian smoothing.
//!
//! This is a demonstration pipeline, not a denoiser for real photographs:
//! it first degrades the input with synthetic zero-mean Gaussian noise and
//! then smooths the result, showing how much of the injected noise a blur of
//! `smooth_sigma` removes. The "noise reduction" name is kept from the
//! editor's menu.
//!
//! Noise is added in normalized `[0, 1]` units without clamping; only the
//! final quantization clamps. Randomness comes from the caller's RNG so runs
//! are reproducible with a seeded generator.
use crate::error::Result;
use crate::filters::gaussian_blur_planes;
use crate::image::PixelBuffer;
use crate::params::NoiseReduceParams;
use rand::Rng;

/// Inject noise of variance `noise_variance`, smooth with `smooth_sigma`,
/// quantize back to 8 bits.
///
/// With `noise_variance == 0` no random numbers are drawn and the result is
/// a plain blur.
pub fn noisy_denoise<R: Rng + ?Sized>(
    buf: &PixelBuffer,
    params: NoiseReduceParams,
    rng: &mut R,
) -> Result<PixelBuffer> {
    params.validate()?;
    let mut planes = buf.planes();
    if params.noise_variance > 0.0 {
        let std_dev = params.noise_variance.sqrt();
        let pixels = planes.first().map_or(0, |p| p.data.len());
        // Row-major, channel-interleaved draw order.
        for i in 0..pixels {
            for plane in planes.iter_mut() {
                plane.data[i] += std_dev * gaussian_sample(rng);
            }
        }
    }
    let smoothed = gaussian_blur_planes(&planes, params.smooth_sigma);
    Ok(PixelBuffer::from_planes(&smoothed, buf.channels()))
}

/// One standard normal draw (Box–Muller, cosine branch).
pub fn gaussian_sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    // 1 - u1 lies in (0, 1], keeping ln finite.
    let r = (-2.0 * (1.0 - u1).ln()).sqrt();
    (r * (std::f64::consts::TAU * u2).cos()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Channels, ImageView};
    use crate::ops::blur;
    use crate::params::BlurParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient() -> PixelBuffer {
        PixelBuffer::from_fn(12, 10, Channels::Rgb, |x, y| {
            [(x * 20) as u8, (y * 25) as u8, 90]
        })
    }

    fn params(noise_variance: f32, smooth_sigma: f32) -> NoiseReduceParams {
        NoiseReduceParams {
            noise_variance,
            smooth_sigma,
        }
    }

    fn mean_abs_diff(a: &PixelBuffer, b: &PixelBuffer) -> f64 {
        let total: u64 = a
            .samples()
            .iter()
            .zip(b.samples())
            .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs() as u64)
            .sum();
        total as f64 / a.samples().len() as f64
    }

    #[test]
    fn zero_noise_zero_sigma_is_identity() {
        let buf = gradient();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(noisy_denoise(&buf, params(0.0, 0.0), &mut rng).unwrap(), buf);
    }

    #[test]
    fn zero_noise_matches_plain_blur() {
        let buf = gradient();
        let mut rng = StdRng::seed_from_u64(1);
        let out = noisy_denoise(&buf, params(0.0, 1.5), &mut rng).unwrap();
        assert_eq!(out, blur(&buf, BlurParams::new(1.5)).unwrap());
    }

    #[test]
    fn same_seed_reproduces_output() {
        let buf = gradient();
        let a = noisy_denoise(&buf, params(0.02, 1.0), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = noisy_denoise(&buf, params(0.02, 1.0), &mut StdRng::seed_from_u64(9)).unwrap();
        let c = noisy_denoise(&buf, params(0.02, 1.0), &mut StdRng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn smoothing_removes_most_of_the_injected_noise() {
        let buf = PixelBuffer::from_gray_fn(32, 32, |_, _| 128);
        let noisy = noisy_denoise(&buf, params(0.01, 0.0), &mut StdRng::seed_from_u64(3)).unwrap();
        let smooth = noisy_denoise(&buf, params(0.01, 2.0), &mut StdRng::seed_from_u64(3)).unwrap();
        let raw_err = mean_abs_diff(&noisy, &buf);
        let smooth_err = mean_abs_diff(&smooth, &buf);
        assert!(raw_err > 10.0, "noise std 0.1 should move samples, got {raw_err}");
        assert!(smooth_err < raw_err / 3.0, "{smooth_err} vs {raw_err}");
    }

    #[test]
    fn gaussian_samples_have_unit_variance() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| gaussian_sample(&mut rng) as f64).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn negative_variance_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(noisy_denoise(&gradient(), params(-0.5, 1.0), &mut rng).is_err());
    }
}
