//! Gaussian blur, independently per channel.
use crate::error::Result;
use crate::filters::gaussian_blur_planes;
use crate::image::PixelBuffer;
use crate::params::BlurParams;

/// Separable Gaussian blur with standard deviation `params.sigma` on both
/// axes. `sigma == 0` returns an identical copy.
pub fn blur(buf: &PixelBuffer, params: BlurParams) -> Result<PixelBuffer> {
    params.validate()?;
    if params.sigma == 0.0 {
        return Ok(buf.clone());
    }
    let planes = gaussian_blur_planes(&buf.planes(), params.sigma);
    Ok(PixelBuffer::from_planes(&planes, buf.channels()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditError;
    use crate::image::Channels;

    fn checker(w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, Channels::Rgb, |x, y| {
            let v = if (x + y) % 2 == 0 { 0 } else { 255 };
            [v, 255 - v, 128]
        })
    }

    #[test]
    fn negative_sigma_is_rejected() {
        let err = blur(&checker(4, 4), BlurParams::new(-1.0)).unwrap_err();
        assert!(matches!(err, EditError::InvalidParameter { name: "sigma", .. }));
    }

    #[test]
    fn zero_sigma_is_identity() {
        let buf = checker(5, 3);
        assert_eq!(blur(&buf, BlurParams::new(0.0)).unwrap(), buf);
    }

    #[test]
    fn larger_sigma_mixes_more() {
        let buf = checker(16, 16);
        let spread = |sigma: f32| {
            let out = blur(&buf, BlurParams::new(sigma)).unwrap();
            let red: Vec<u8> = out.as_bytes().iter().step_by(3).copied().collect();
            red.iter().max().unwrap() - red.iter().min().unwrap()
        };
        let (s1, s2) = (spread(0.5), spread(2.0));
        assert!(s1 < 255);
        assert!(s2 < s1, "sigma 2 spread {s2} should be below sigma 0.5 spread {s1}");
    }

    #[test]
    fn channels_are_blurred_independently() {
        let buf = checker(8, 8);
        let out = blur(&buf, BlurParams::new(1.0)).unwrap();
        // Constant blue channel stays constant.
        assert!(out.as_bytes().iter().skip(2).step_by(3).all(|&b| b == 128));
        assert_eq!(out.channels(), Channels::Rgb);
        assert_eq!(out.dimensions(), buf.dimensions());
    }
}
