#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod controls;
pub mod display;
pub mod error;
pub mod image;
pub mod session;
pub mod transform;

// Building blocks used by the transforms. Public for hosts that want to run
// a single operation without a session.
pub mod filters;
pub mod ops;
pub mod params;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{load_config, EditorConfig};
pub use crate::controls::{Control, Controls};
pub use crate::error::{EditError, Result};
pub use crate::image::{Channels, PixelBuffer};
pub use crate::ops::Histogram;
pub use crate::session::{EditSession, SessionState};
pub use crate::transform::Transform;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use image_editor::prelude::*;
///
/// # fn main() -> Result<(), EditError> {
/// let config = EditorConfig::default();
/// let mut session = EditSession::from_config(&config);
/// session.load(PixelBuffer::from_fn(64, 48, Channels::Rgb, |x, y| {
///     [(x * 4) as u8, (y * 5) as u8, 128]
/// }));
///
/// let controls = Controls::from_config(&config.controls);
/// session.apply(&controls.transform_from_str(Control::Blur, "1.5")?)?;
/// session.save_to(std::path::Path::new("blurred.png"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::params::{
        BlurParams, BrightnessColorParams, ContrastParams, ContrastStretchParams,
        NoiseReduceParams, SharpenParams,
    };
    pub use crate::{
        Channels, Control, Controls, EditError, EditSession, EditorConfig, Histogram, PixelBuffer,
        SessionState, Transform,
    };
}
