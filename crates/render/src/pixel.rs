//! Pure-computation pixel buffer conversion from a [`SampleGrid`].
//!
//! Always available (no feature gate) so callers that hand pixels to their own
//! display surface do not pull in the `image` crate.

use perlin_field_core::error::NoiseError;
use perlin_field_core::raster::{to_unit, SampleGrid};

/// All recognized scheme names.
const SCHEME_NAMES: &[&str] = &["gray", "dual"];

/// How noise samples become colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Every channel carries `to_unit(noise(x, y))`.
    Gray,
    /// Red fixed at full, green from `noise(x, y)`, blue from the transposed
    /// sample `noise(y, x)`.
    Dual,
}

impl Scheme {
    /// Looks a scheme up by name.
    ///
    /// Returns `NoiseError::InvalidArgument` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "gray" => Ok(Scheme::Gray),
            "dual" => Ok(Scheme::Dual),
            _ => Err(NoiseError::InvalidArgument(format!(
                "unknown color scheme '{name}' (expected one of: {})",
                SCHEME_NAMES.join(", ")
            ))),
        }
    }

    /// Returns a slice of all recognized scheme names.
    pub fn list_names() -> &'static [&'static str] {
        SCHEME_NAMES
    }
}

/// Maps raster samples to an RGBA8 pixel buffer of `side * side * 4` bytes.
///
/// Rows of the raster become image rows, so box-space y grows down the image.
pub fn grid_to_rgba(grid: &SampleGrid, scheme: Scheme) -> Vec<u8> {
    grid.iter()
        .flat_map(|(col, row, v)| {
            let green = channel(v);
            match scheme {
                Scheme::Gray => [green, green, green, 255u8],
                Scheme::Dual => {
                    // The raster is square and sampled identically on both
                    // axes, so the transposed cell holds noise(y, x).
                    let transposed = grid.get(row, col).unwrap_or(v);
                    [255u8, green, channel(transposed), 255u8]
                }
            }
        })
        .collect()
}

fn channel(value: f64) -> u8 {
    (to_unit(value) * 255.0).round() as u8
}
