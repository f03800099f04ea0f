//! Owned 8-bit raster with a Gray or RGB channel layout.
//!
//! The sample vector always holds exactly `width * height * channels` bytes;
//! fields are private so the invariant can only be established by the
//! constructors below.
use super::{ImageF32, ImageView, ImageViewMut};
use crate::error::{EditError, Result};
use serde::{Deserialize, Serialize};

/// Perceptual luma weights (ITU-R BT.601).
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Weighted luma of one RGB pixel, unrounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32
}

/// Round and clamp a value in `[0, 255]` space to a sample.
#[inline]
pub(crate) fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channels {
    Gray,
    Rgb,
}

impl Channels {
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("samples", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Zero-filled buffer.
    pub fn new(width: usize, height: usize, channels: Channels) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels.count()],
        }
    }

    /// Wrap decoded samples, checking the length against the dimensions.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(EditError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel. `f` returns the
    /// samples of one pixel; only the first `channels.count()` are used, so
    /// Gray buffers are easier to build with [`PixelBuffer::from_gray_fn`].
    pub fn from_fn<F>(width: usize, height: usize, channels: Channels, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        let n = channels.count();
        let mut data = Vec::with_capacity(width * height * n);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y)[..n]);
            }
        }
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Gray buffer from `f(x, y)`, one sample per pixel.
    pub fn from_gray_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> u8,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            channels: Channels::Gray,
            data,
        }
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let n = self.channels.count();
        let start = (y * self.width + x) * n;
        &self.data[start..start + n]
    }

    /// Single sample of channel `c` at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.pixel(x, y)[c]
    }

    /// Apply `f` to every sample, keeping the layout.
    pub fn map_samples<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(u8) -> u8,
    {
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data.iter().map(|&s| f(s)).collect(),
        }
    }

    /// Luma projection (rounded). Gray input is copied.
    pub fn to_gray(&self) -> PixelBuffer {
        let data = match self.channels {
            Channels::Gray => self.data.clone(),
            Channels::Rgb => self
                .data
                .chunks_exact(3)
                .map(|px| quantize(luma(px[0], px[1], px[2])))
                .collect(),
        };
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: Channels::Gray,
            data,
        }
    }

    /// RGB view of the buffer; Gray samples are replicated across channels.
    pub fn to_rgb(&self) -> PixelBuffer {
        let data = match self.channels {
            Channels::Rgb => self.data.clone(),
            Channels::Gray => self.data.iter().flat_map(|&v| [v, v, v]).collect(),
        };
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: Channels::Rgb,
            data,
        }
    }

    /// Split into one float plane per channel with values in `[0, 1]`.
    pub fn planes(&self) -> Vec<ImageF32> {
        let n = self.channels.count();
        (0..n)
            .map(|c| {
                let data = self
                    .data
                    .iter()
                    .skip(c)
                    .step_by(n)
                    .map(|&s| s as f32 / 255.0)
                    .collect();
                ImageF32::from_vec(self.width, self.height, data)
            })
            .collect()
    }

    /// Interleave float planes back into 8-bit samples (round + clamp).
    ///
    /// Panics when the plane count does not match `channels` or the planes
    /// disagree on size; callers derive planes from a valid buffer.
    pub fn from_planes(planes: &[ImageF32], channels: Channels) -> PixelBuffer {
        let n = channels.count();
        assert_eq!(planes.len(), n, "one plane per channel expected");
        let (w, h) = (planes[0].w, planes[0].h);
        assert!(
            planes.iter().all(|p| p.w == w && p.h == h),
            "planes must share dimensions"
        );
        let mut data = vec![0u8; w * h * n];
        for (c, plane) in planes.iter().enumerate() {
            for (i, &v) in plane.data.iter().enumerate() {
                data[i * n + c] = quantize(v * 255.0);
            }
        }
        PixelBuffer {
            width: w,
            height: h,
            channels,
            data,
        }
    }
}

impl ImageView for PixelBuffer {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn samples_per_pixel(&self) -> usize {
        self.channels.count()
    }
    #[inline]
    fn samples(&self) -> &[u8] {
        &self.data
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
