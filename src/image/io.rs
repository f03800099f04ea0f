//! Decode/encode adapter between [`PixelBuffer`] and file bytes.
//!
//! - `decode` / `load_image`: read JPEG/PNG/BMP/TIFF into an 8-bit Gray or RGB
//!   buffer, optionally shrunk to fit within a bounding box.
//! - `encode` / `save_image`: write a buffer back, choosing the format from
//!   the file extension (PNG when there is none).
use super::{Channels, ImageView, PixelBuffer};
use crate::error::{EditError, Result};
use image::{ColorType, DynamicImage, GrayImage, ImageFormat, RgbImage};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Extensions accepted by [`load_image`] unless the config says otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

/// Decode in-memory bytes. `origin` names the source in error messages.
pub fn decode(bytes: &[u8], origin: &str) -> Result<PixelBuffer> {
    if bytes.is_empty() {
        return Err(EditError::Decode {
            origin: origin.to_string(),
            reason: "input is empty".to_string(),
        });
    }
    let img = image::load_from_memory(bytes).map_err(|e| EditError::Decode {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;
    from_dynamic(img)
}

/// Read and decode a file, checking its extension against `extensions` and
/// shrinking it to fit inside `max_dimensions` when given.
pub fn load_image(
    path: &Path,
    extensions: &[String],
    max_dimensions: Option<[u32; 2]>,
) -> Result<PixelBuffer> {
    let origin = path.display().to_string();
    let ext = extension_of(path).ok_or_else(|| EditError::Decode {
        origin: origin.clone(),
        reason: "file has no extension".to_string(),
    })?;
    if !extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
        return Err(EditError::Decode {
            origin,
            reason: format!("unsupported format `{ext}`"),
        });
    }
    let bytes = fs::read(path).map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let buf = decode(&bytes, &origin)?;
    let (w, h) = buf.dimensions();
    debug!("load_image {origin}: {w}x{h} {:?}", buf.channels());
    match max_dimensions {
        Some(bounds) => Ok(thumbnail(&buf, bounds)),
        None => Ok(buf),
    }
}

/// Shrink `buf` to fit within `[max_w, max_h]`, preserving aspect ratio.
/// Buffers that already fit are returned as-is; images are never enlarged.
pub fn thumbnail(buf: &PixelBuffer, [max_w, max_h]: [u32; 2]) -> PixelBuffer {
    let (w, h) = buf.dimensions();
    if (w as u64) <= max_w as u64 && (h as u64) <= max_h as u64 {
        return buf.clone();
    }
    let resized = to_dynamic(buf).thumbnail(max_w.max(1), max_h.max(1));
    debug!(
        "thumbnail {w}x{h} -> {}x{}",
        resized.width(),
        resized.height()
    );
    match buf.channels() {
        Channels::Gray => gray_buffer(resized.into_luma8()),
        Channels::Rgb => rgb_buffer(resized.into_rgb8()),
    }
}

/// Encode a buffer in the given container format.
pub fn encode(buf: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    let target = format!("{format:?}");
    let mut out = Cursor::new(Vec::new());
    to_dynamic(buf)
        .write_to(&mut out, format)
        .map_err(|e| EditError::Encode {
            target,
            reason: e.to_string(),
        })?;
    Ok(out.into_inner())
}

/// Encode and write a buffer, picking the format from the extension.
/// Paths without an extension get `.png` appended.
pub fn save_image(buf: &PixelBuffer, path: &Path) -> Result<PathBuf> {
    let path = match extension_of(path) {
        Some(_) => path.to_path_buf(),
        None => path.with_extension("png"),
    };
    let format = ImageFormat::from_path(&path).map_err(|e| EditError::Encode {
        target: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let bytes = encode(buf, format).map_err(|e| match e {
        EditError::Encode { reason, .. } => EditError::Encode {
            target: path.display().to_string(),
            reason,
        },
        other => other,
    })?;
    ensure_parent_dir(&path)?;
    fs::write(&path, bytes).map_err(|source| EditError::Io {
        path: path.clone(),
        source,
    })?;
    debug!("save_image {}", path.display());
    Ok(path)
}

fn from_dynamic(img: DynamicImage) -> Result<PixelBuffer> {
    match img.color() {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            Ok(gray_buffer(img.into_luma8()))
        }
        _ => Ok(rgb_buffer(img.into_rgb8())),
    }
}

fn gray_buffer(img: GrayImage) -> PixelBuffer {
    let (w, h) = (img.width() as usize, img.height() as usize);
    PixelBuffer::from_raw(w, h, Channels::Gray, img.into_raw())
        .expect("image crate returns w*h luma samples")
}

fn rgb_buffer(img: RgbImage) -> PixelBuffer {
    let (w, h) = (img.width() as usize, img.height() as usize);
    PixelBuffer::from_raw(w, h, Channels::Rgb, img.into_raw())
        .expect("image crate returns w*h*3 rgb samples")
}

fn to_dynamic(buf: &PixelBuffer) -> DynamicImage {
    let (w, h) = (buf.width() as u32, buf.height() as u32);
    let data = buf.as_bytes().to_vec();
    // Dimensions come from a validated PixelBuffer, so from_raw cannot fail.
    match buf.channels() {
        Channels::Gray => DynamicImage::ImageLuma8(
            GrayImage::from_raw(w, h, data).expect("gray buffer length matches"),
        ),
        Channels::Rgb => DynamicImage::ImageRgb8(
            RgbImage::from_raw(w, h, data).expect("rgb buffer length matches"),
        ),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| EditError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, Channels::Rgb, |x, y| {
            [(x * 10) as u8, (y * 10) as u8, 128]
        })
    }

    #[test]
    fn png_roundtrip_preserves_samples() {
        let buf = gradient_rgb(8, 6);
        let bytes = encode(&buf, ImageFormat::Png).unwrap();
        let decoded = decode(&bytes, "memory").unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn gray_png_decodes_as_gray() {
        let buf = gradient_rgb(4, 4).to_gray();
        let bytes = encode(&buf, ImageFormat::Png).unwrap();
        let decoded = decode(&bytes, "memory").unwrap();
        assert_eq!(decoded.channels(), Channels::Gray);
        assert_eq!(decoded, buf);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode(&[1, 2, 3, 4], "junk.png").unwrap_err();
        assert!(matches!(err, EditError::Decode { ref origin, .. } if origin == "junk.png"));
    }

    #[test]
    fn empty_input_fails_to_decode() {
        assert!(matches!(
            decode(&[], "empty"),
            Err(EditError::Decode { .. })
        ));
    }

    #[test]
    fn thumbnail_keeps_aspect_and_never_enlarges() {
        let buf = gradient_rgb(40, 20);
        let small = thumbnail(&buf, [10, 10]);
        assert_eq!(small.dimensions(), (10, 5));
        let same = thumbnail(&buf, [100, 100]);
        assert_eq!(same, buf);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let exts: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        let err = load_image(Path::new("does-not-exist.gif"), &exts, None).unwrap_err();
        assert!(matches!(err, EditError::Decode { .. }));
    }

    #[test]
    fn save_without_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_image(&gradient_rgb(3, 3), &dir.path().join("out")).unwrap();
        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));
        let exts: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        let back = load_image(&written, &exts, None).unwrap();
        assert_eq!(back, gradient_rgb(3, 3));
    }
}
