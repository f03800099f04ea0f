//! Pixel storage used across the crate.
//!
//! - [`PixelBuffer`]: owned 8-bit Gray/RGB raster, the unit every transform
//!   consumes and produces.
//! - [`ImageF32`]: single-channel float plane in `[0, 1]` used by the
//!   neighborhood filters.
//! - [`io`]: decode/encode adapter over the `image` crate.
pub mod buffer;
pub mod f32;
pub mod io;
pub mod traits;

pub use self::buffer::{luma, Channels, PixelBuffer};
pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
