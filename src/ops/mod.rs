//! The transform library: stateless `&PixelBuffer -> PixelBuffer` functions.
//!
//! Point operations work sample-by-sample on the 8-bit data. Neighborhood
//! operations split the buffer into float planes, filter each channel
//! independently and quantize back with rounding and clamping.
//!
//! No function here mutates its input or keeps a reference to it.

pub mod blur;
pub mod contrast;
pub mod histogram;
pub mod noise;
pub mod point;
pub mod sharpen;

pub use blur::blur;
pub use contrast::{contrast, contrast_stretch, percentile_bounds};
pub use histogram::{histogram, Histogram, HISTOGRAM_BINS};
pub use noise::{gaussian_sample, noisy_denoise};
pub use point::{adjust_brightness_color, grayscale, invert};
pub use sharpen::{sharpen, sharpen_fixed};
