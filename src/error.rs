//! Error type shared by the transform library, the edit session and the
//! decode/encode adapter.
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// An operation needed a buffer that is not there yet (nothing loaded,
    /// or nothing processed when saving/committing).
    #[error("no image loaded")]
    NoImageLoaded,

    /// Parameter outside its documented domain. Raised before any output
    /// buffer is allocated.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to decode {origin}: {reason}")]
    Decode { origin: String, reason: String },

    #[error("failed to encode {target}: {reason}")]
    Encode { target: String, reason: String },

    /// Sample storage does not match `width * height * channels`.
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl EditError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EditError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects non-finite or negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(EditError::invalid(name, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(EditError::invalid(
            name,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}
