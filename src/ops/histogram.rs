//! Luma histogram.
//!
//! RGB buffers are projected to luma with the grayscale weights before
//! counting, so there is exactly one count per pixel.
use crate::image::buffer::quantize;
use crate::image::{luma, Channels, ImageView, PixelBuffer};
use serde::Serialize;

pub const HISTOGRAM_BINS: usize = 256;

/// Per-intensity pixel counts, one bin per 8-bit level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Histogram {
    bins: Vec<u32>,
}

impl Histogram {
    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    pub fn count(&self, value: u8) -> u32 {
        self.bins[value as usize]
    }

    /// Sum of all bins; equals the pixel count of the source buffer.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Highest bin count, handy for scaling a plot.
    pub fn peak(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

/// Count pixels per luma level.
pub fn histogram(buf: &PixelBuffer) -> Histogram {
    let mut bins = vec![0u32; HISTOGRAM_BINS];
    match buf.channels() {
        Channels::Gray => {
            for &s in buf.samples() {
                bins[s as usize] += 1;
            }
        }
        Channels::Rgb => {
            for px in buf.samples().chunks_exact(3) {
                bins[quantize(luma(px[0], px[1], px[2])) as usize] += 1;
            }
        }
    }
    Histogram { bins }
}
