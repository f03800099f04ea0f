//! Seams to the host's presentation layer.
//!
//! The session never draws anything itself; it hands buffers and counts to
//! these collaborators. Implementations are fire-and-forget.
use crate::image::PixelBuffer;
use crate::ops::Histogram;

/// Shows a buffer on screen.
pub trait Renderer {
    fn render(&mut self, buf: &PixelBuffer);
}

/// Plots a luma histogram.
pub trait HistogramDisplay {
    fn render_histogram(&mut self, histogram: &Histogram);
}
