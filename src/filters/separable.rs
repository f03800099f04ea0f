//! Separable 1D filtering.
//!
//! A separable filter is applied as a horizontal pass into a scratch plane
//! followed by a vertical pass into the output. Each pass is row-parallel;
//! every output sample is accumulated in the same tap order as a serial loop,
//! so the result does not depend on thread scheduling.
//!
//! Out-of-range taps replicate the nearest edge sample.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

/// Gaussian tails are cut at `GAUSSIAN_TRUNCATE * sigma` on each side.
pub const GAUSSIAN_TRUNCATE: f32 = 4.0;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order), centred on the middle tap.
    /// An odd length is expected.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }

    /// True for the single unit tap, which leaves a plane untouched.
    fn is_identity(&self) -> bool {
        matches!(self.taps(), [t] if *t == 1.0)
    }
}

/// Tail sums over at most this many taps are computed term by term.
const DIRECT_TAIL_LIMIT: f64 = 65_536.0;
/// Even number of Simpson intervals for longer tails.
const SIMPSON_INTERVALS: usize = 4_096;

/// Normalized Gaussian taps for a given standard deviation.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build taps with radius `floor(GAUSSIAN_TRUNCATE * sigma + 0.5)`,
    /// capped at `max_radius`.
    ///
    /// When the cap applies, the weight of every tap past `max_radius` is
    /// added to the outermost tap on its side. Under edge replication those
    /// taps all read the border sample, so filtering a plane whose extent is
    /// at most `max_radius + 1` gives the same result as the uncapped kernel.
    ///
    /// `sigma` is expected to be validated by the caller; zero (or anything
    /// that rounds to a zero radius) yields the identity kernel.
    pub fn new(sigma: f32, max_radius: usize) -> Self {
        if sigma.is_nan() || sigma <= 0.0 {
            return Self { taps: vec![1.0] };
        }
        let sigma = (sigma as f64).min(f32::MAX as f64);
        let natural = (GAUSSIAN_TRUNCATE as f64 * sigma + 0.5).floor();
        let radius = if natural >= max_radius as f64 {
            max_radius
        } else {
            natural as usize
        };
        let mut weights: Vec<f64> = (0..=2 * radius)
            .map(|i| gaussian_weight(i as f64 - radius as f64, sigma))
            .collect();
        if (radius as f64) < natural {
            let tail = tail_mass(radius as f64 + 1.0, natural, sigma);
            weights[0] += tail;
            weights[2 * radius] += tail;
        }
        let sum: f64 = weights.iter().sum();
        let taps = weights.iter().map(|w| (w / sum) as f32).collect();
        Self { taps }
    }
}

#[inline]
fn gaussian_weight(x: f64, sigma: f64) -> f64 {
    (-x * x / (2.0 * sigma * sigma)).exp()
}

/// Sum of the unnormalized weights at integer offsets `first..=last`.
fn tail_mass(first: f64, last: f64, sigma: f64) -> f64 {
    if last < first {
        return 0.0;
    }
    if last - first < DIRECT_TAIL_LIMIT {
        return (first as u64..=last as u64)
            .map(|k| gaussian_weight(k as f64, sigma))
            .sum();
    }
    // Each unit-spaced term stands for the integral over [k - 0.5, k + 0.5].
    let (a, b) = (first - 0.5, last + 0.5);
    let h = (b - a) / SIMPSON_INTERVALS as f64;
    let mut acc = gaussian_weight(a, sigma) + gaussian_weight(b, sigma);
    for i in 1..SIMPSON_INTERVALS {
        let coeff = if i % 2 == 1 { 4.0 } else { 2.0 };
        acc += coeff * gaussian_weight(a + i as f64 * h, sigma);
    }
    acc * h / 3.0
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve a plane with `filter` along x, then y.
pub fn convolve_separable(src: &ImageF32, filter: &dyn SeparableFilter) -> ImageF32 {
    let taps = filter.taps();
    assert!(!taps.is_empty(), "filter must provide at least one tap");
    if src.is_empty() || filter.is_identity() {
        return src.clone();
    }
    let radius = filter.radius();
    let (w, h) = (src.w, src.h);

    let mut horiz = ImageF32::new(w, h);
    horiz
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| filter_row(src.row(y), dst, taps, radius));

    let mut out = ImageF32::new(w, h);
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| {
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius as isize, h);
                for (d, &s) in dst.iter_mut().zip(horiz.row(sy)) {
                    *d += tap * s;
                }
            }
        });
    out
}

/// Gaussian-blur each plane with the same kernel.
pub fn gaussian_blur_planes(planes: &[ImageF32], sigma: f32) -> Vec<ImageF32> {
    let extent = planes.iter().map(|p| p.w.max(p.h)).max().unwrap_or(0);
    let kernel = GaussianKernel::new(sigma, extent.saturating_sub(1));
    planes
        .iter()
        .map(|p| convolve_separable(p, &kernel))
        .collect()
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let len = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let sx = clamp_index(x as isize + k as isize - radius as isize, len);
            acc += tap * row[sx];
        }
        *dst = acc;
    }
}

#[inline]
pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 || idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
