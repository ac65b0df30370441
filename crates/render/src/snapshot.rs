//! PNG output of a [`SampleGrid`].
//!
//! Feature-gated behind `png` (default on). The pixel conversion itself lives
//! in [`crate::pixel`].

use perlin_field_core::error::NoiseError;
use perlin_field_core::raster::SampleGrid;
use std::path::Path;

use crate::pixel::{grid_to_rgba, Scheme};

/// Writes a raster as a PNG image, one pixel per sample.
///
/// Returns `NoiseError::InvalidArgument` if the raster side overflows `u32`,
/// or `NoiseError::Io` on write failure.
pub fn write_png(grid: &SampleGrid, scheme: Scheme, path: &Path) -> Result<(), NoiseError> {
    let rgba = grid_to_rgba(grid, scheme);
    let side = u32::try_from(grid.side())
        .map_err(|_| NoiseError::InvalidArgument("raster too large for PNG".into()))?;
    let img = image::RgbaImage::from_raw(side, side, rgba)
        .ok_or_else(|| NoiseError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}
