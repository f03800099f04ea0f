//! Direct 3×3 convolution with border clamping (replicate).
//!
//! Used for small fixed kernels where a separable decomposition does not
//! exist, e.g. the sharpening preset.
use crate::image::{ImageF32, ImageView, ImageViewMut};

pub type Kernel3 = [[f32; 3]; 3];

/// High-pass sharpening kernel; weights sum to 1 so flat regions are kept.
pub const SHARPEN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Correlate `src` with `kernel` (row-major, centre at `[1][1]`).
pub fn convolve3x3(src: &ImageF32, kernel: &Kernel3) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    if src.is_empty() {
        return out;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut acc = 0.0;
            for (k_row, row) in kernel.iter().zip(rows.iter()) {
                acc += row[x_idx[0]] * k_row[0]
                    + row[x_idx[1]] * k_row[1]
                    + row[x_idx[2]] * k_row[2];
            }
            *px = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sharpen_kernel_keeps_flat_planes() {
        let img = ImageF32::from_vec(4, 4, vec![0.4; 16]);
        let out = convolve3x3(&img, &SHARPEN_KERNEL);
        for v in out.data {
            assert_abs_diff_eq!(v, 0.4, epsilon = 1e-6);
        }
    }

    #[test]
    fn sharpen_kernel_overshoots_at_step() {
        let img = ImageF32::from_vec(4, 1, vec![0.2, 0.2, 0.8, 0.8]);
        let out = convolve3x3(&img, &SHARPEN_KERNEL);
        assert!(out.get(1, 0) < 0.2);
        assert!(out.get(2, 0) > 0.8);
    }
}
