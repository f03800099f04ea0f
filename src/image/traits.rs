/// Read-only access to a row-major image with interleaved samples.
///
/// Storage is always contiguous (no padding between rows), so a row is
/// `width * samples_per_pixel` samples long.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Interleaved samples per pixel.
    fn samples_per_pixel(&self) -> usize {
        1
    }

    /// All samples in row-major order.
    fn samples(&self) -> &[Self::Pixel];

    #[inline]
    fn row_len(&self) -> usize {
        self.width() * self.samples_per_pixel()
    }

    #[inline]
    fn row(&self, y: usize) -> &[Self::Pixel] {
        let len = self.row_len();
        &self.samples()[y * len..(y + 1) * len]
    }

    fn rows(&self) -> std::slice::ChunksExact<'_, Self::Pixel> {
        self.samples().chunks_exact(self.row_len().max(1))
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub trait ImageViewMut: ImageView {
    fn samples_mut(&mut self) -> &mut [Self::Pixel];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let len = self.row_len();
        &mut self.samples_mut()[y * len..(y + 1) * len]
    }
}
