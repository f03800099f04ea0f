use image_editor::{Channels, PixelBuffer};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    PixelBuffer::from_gray_fn(width, height, |x, y| {
        if (x / cell + y / cell) & 1 == 0 {
            32
        } else {
            220
        }
    })
}

/// RGB ramp: red grows along x, green along y, blue is fixed.
pub fn rgb_gradient(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 1 && height > 1, "gradient needs at least 2x2 pixels");
    PixelBuffer::from_fn(width, height, Channels::Rgb, |x, y| {
        [
            (x * 255 / (width - 1)) as u8,
            (y * 255 / (height - 1)) as u8,
            96,
        ]
    })
}

/// Low-contrast RGB image whose samples all lie in `[lo, hi]`.
pub fn washed_out(width: usize, height: usize, lo: u8, hi: u8) -> PixelBuffer {
    assert!(lo < hi);
    let span = (hi - lo) as usize;
    PixelBuffer::from_fn(width, height, Channels::Rgb, |x, y| {
        let v = lo + ((x * 7 + y * 13) % (span + 1)) as u8;
        [v, v.saturating_sub(1).max(lo), v]
    })
}
