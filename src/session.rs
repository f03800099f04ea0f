//! Edit session: the original / current / processed buffer triple.
//!
//! States
//! - `Empty`: nothing loaded; every operation except `load*` fails with
//!   [`EditError::NoImageLoaded`].
//! - `Loaded`: `original` and `current` present, nothing processed.
//! - `Edited`: a transform ran on `current`; its result sits in `processed`
//!   until it is committed, replaced by another `apply`, or dropped by `reset`.
//!
//! Transforms always read `current`, so two successive `apply` calls do not
//! chain. `commit` promotes `processed` to `current` when chaining is wanted.
use crate::config::EditorConfig;
use crate::display::{HistogramDisplay, Renderer};
use crate::error::{EditError, Result};
use crate::image::{io, PixelBuffer};
use crate::ops::{histogram, Histogram};
use crate::transform::Transform;
use image::ImageFormat;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
    Edited,
}

#[derive(Debug)]
struct Buffers {
    original: PixelBuffer,
    current: PixelBuffer,
    processed: Option<PixelBuffer>,
}

#[derive(Debug)]
pub struct EditSession {
    buffers: Option<Buffers>,
    rng: StdRng,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EditSession {
    /// Empty session. `seed` fixes the noise generator; `None` seeds from
    /// OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { buffers: None, rng }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.noise_seed)
    }

    pub fn state(&self) -> SessionState {
        match &self.buffers {
            None => SessionState::Empty,
            Some(b) if b.processed.is_some() => SessionState::Edited,
            Some(_) => SessionState::Loaded,
        }
    }

    /// Replace whatever was loaded with `buf`.
    pub fn load(&mut self, buf: PixelBuffer) {
        debug!(
            "session load {:?} {:?} (was {:?})",
            buf.dimensions(),
            buf.channels(),
            self.state()
        );
        self.buffers = Some(Buffers {
            original: buf.clone(),
            current: buf,
            processed: None,
        });
    }

    /// Decode a file and load it. The session is untouched on error.
    pub fn load_path(&mut self, path: &Path, config: &EditorConfig) -> Result<()> {
        let buf = io::load_image(path, &config.supported_extensions, config.max_dimensions)?;
        self.load(buf);
        Ok(())
    }

    /// Decode in-memory bytes and load them. The session is untouched on error.
    pub fn load_bytes(&mut self, bytes: &[u8], config: &EditorConfig) -> Result<()> {
        let buf = io::decode(bytes, "<memory>")?;
        let buf = match config.max_dimensions {
            Some(bounds) => io::thumbnail(&buf, bounds),
            None => buf,
        };
        self.load(buf);
        Ok(())
    }

    /// Run `transform` on the current buffer and keep the result as the
    /// processed buffer.
    pub fn apply(&mut self, transform: &Transform) -> Result<&PixelBuffer> {
        let buffers = match self.buffers.as_mut() {
            Some(b) => b,
            None => return Err(not_loaded("apply")),
        };
        let out = transform.apply(&buffers.current, &mut self.rng)?;
        assert_eq!(
            out.dimensions(),
            buffers.current.dimensions(),
            "transform {} changed the buffer size",
            transform.name()
        );
        debug!("session apply {}", transform.name());
        Ok(buffers.processed.insert(out))
    }

    /// Drop all edits and go back to the loaded image.
    pub fn reset(&mut self) -> Result<()> {
        let buffers = self.buffers.as_mut().ok_or_else(|| not_loaded("reset"))?;
        buffers.current = buffers.original.clone();
        buffers.processed = None;
        debug!("session reset");
        Ok(())
    }

    /// Promote the processed buffer to current so the next transform builds
    /// on it.
    pub fn commit(&mut self) -> Result<()> {
        let buffers = self.buffers.as_mut().ok_or_else(|| not_loaded("commit"))?;
        let processed = buffers.processed.take().ok_or_else(|| not_loaded("commit"))?;
        buffers.current = processed;
        debug!("session commit");
        Ok(())
    }

    /// The buffer a save would write.
    pub fn processed_for_save(&self) -> Result<&PixelBuffer> {
        self.buffers
            .as_ref()
            .and_then(|b| b.processed.as_ref())
            .ok_or_else(|| not_loaded("save"))
    }

    pub fn encode_processed(&self, format: ImageFormat) -> Result<Vec<u8>> {
        io::encode(self.processed_for_save()?, format)
    }

    /// Write the processed buffer; returns the path actually written.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf> {
        io::save_image(self.processed_for_save()?, path)
    }

    /// What a viewer should show: processed if present, else current.
    pub fn preview(&self) -> Option<&PixelBuffer> {
        self.buffers
            .as_ref()
            .map(|b| b.processed.as_ref().unwrap_or(&b.current))
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.buffers.as_ref().map(|b| &b.original)
    }

    pub fn current(&self) -> Option<&PixelBuffer> {
        self.buffers.as_ref().map(|b| &b.current)
    }

    pub fn processed(&self) -> Option<&PixelBuffer> {
        self.buffers.as_ref().and_then(|b| b.processed.as_ref())
    }

    /// Luma histogram of the working image.
    pub fn histogram(&self) -> Result<Histogram> {
        self.current()
            .map(histogram)
            .ok_or_else(|| not_loaded("histogram"))
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let buf = self.preview().ok_or_else(|| not_loaded("render"))?;
        renderer.render(buf);
        Ok(())
    }

    pub fn show_histogram(&self, display: &mut dyn HistogramDisplay) -> Result<()> {
        display.render_histogram(&self.histogram()?);
        Ok(())
    }
}

fn not_loaded(op: &str) -> EditError {
    warn!("session {op}: no image available");
    EditError::NoImageLoaded
}
