//! Failures the `perlin-field` binary reports, and the exit status for each.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | rejected by the argument parser before any command runs |
//! | 10   | the noise core refused the request (zero or oversized field, point outside the box, bad step) |
//! | 11   | a recipe could not be read or a PNG could not be written |
//! | 12   | the user named an unknown scheme or handed over a malformed recipe |
//! | 13   | a `--json` report could not be encoded |

use perlin_field_core::NoiseError;
use thiserror::Error;

/// Why a `perlin-field` command stopped.
#[derive(Debug, Error)]
pub enum CliError {
    /// Raised by `perlin-field-core` while building, sampling or rasterizing a field.
    #[error("{0}")]
    Noise(NoiseError),
    /// Filesystem trouble around a recipe or an output image.
    #[error("{0}")]
    Io(String),
    /// A scheme name or recipe body that does not parse.
    #[error("{0}")]
    Input(String),
    /// A `--json` report that `serde_json` could not encode.
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Noise(_) => 10,
            Self::Io(_) => 11,
            Self::Input(_) => 12,
            Self::Serialization(_) => 13,
        }
    }
}

impl From<NoiseError> for CliError {
    fn from(e: NoiseError) -> Self {
        // PNG write failures surface from the render crate as NoiseError::Io.
        match e {
            NoiseError::Io(msg) => Self::Io(msg),
            other => Self::Noise(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
