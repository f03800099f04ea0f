//! Convolution building blocks shared by blur, sharpen and noise smoothing.
//!
//! - [`separable`]: Gaussian 1D taps and a row-parallel
//!   horizontal + vertical pass over an [`ImageF32`](crate::image::ImageF32).
//! - [`kernel3`]: direct 3×3 convolution for small fixed kernels.
//!
//! Every filter here replicates the border sample for out-of-range taps.

pub mod kernel3;
pub mod separable;

pub use kernel3::{convolve3x3, Kernel3, SHARPEN_KERNEL};
pub use separable::{
    convolve_separable, gaussian_blur_planes, GaussianKernel, SeparableFilter, GAUSSIAN_TRUNCATE,
};
