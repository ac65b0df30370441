//! Classic 2D gradient ("Perlin") noise over a [`GradientField`].
//!
//! For a point `(x, y)` in box coordinates the sampler finds the enclosing unit
//! cell, takes the dot product of each corner gradient with the offset from
//! that corner to the point, and blends the four values bilinearly. Sampling
//! is a pure read of the field.
//!
//! # Range
//!
//! Each corner value is bounded by the corner distance, and the bilinear
//! weights `w` satisfy `sum(w * |d|^2) = sx(1 - sx) + sy(1 - sy) <= 1/2`, so by
//! Cauchy-Schwarz every result lies in `[-1/sqrt(2), 1/sqrt(2)]`, well inside
//! the nominal `[-1, 1]`. Results are never clamped.

use crate::error::NoiseError;
use crate::gradient::GradientField;
use glam::DVec2;
use std::f64::consts::FRAC_1_SQRT_2;

/// Largest magnitude [`evaluate`] can return.
pub const MAX_AMPLITUDE: f64 = FRAC_1_SQRT_2;

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Evaluates the noise field at box coordinates `(x, y)`.
///
/// Both coordinates must lie in `[0, size]`, except that the far corner
/// `(size, size)` is rejected. A point on the far edge of one axis is treated
/// as the end of the last cell on that axis, which keeps every lookup on the
/// lattice.
///
/// # Errors
///
/// - `NoiseError::SampleOutOfBounds` for coordinates outside the field, NaN,
///   or the far corner.
/// - `NoiseError::Unpopulated` if the field has never been populated.
pub fn evaluate(field: &GradientField, x: f64, y: f64) -> Result<f64, NoiseError> {
    let size = field.size();
    let limit = size as f64;
    let inside = |c: f64| (0.0..=limit).contains(&c);
    if !inside(x) || !inside(y) || (x == limit && y == limit) {
        return Err(NoiseError::SampleOutOfBounds { x, y, size });
    }
    if !field.is_populated() {
        return Err(NoiseError::Unpopulated);
    }

    let x0 = cell_index(x, size);
    let y0 = cell_index(y, size);
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let n00 = influence(field, x0, y0, x, y)?;
    let n01 = influence(field, x0, y1, x, y)?;
    let n10 = influence(field, x1, y0, x, y)?;
    let n11 = influence(field, x1, y1, x, y)?;

    let sx = x - x0 as f64;
    let sy = y - y0 as f64;

    // Blend along x within each row, then across the two rows.
    let ix0 = lerp(n00, n10, sx);
    let ix1 = lerp(n01, n11, sx);
    Ok(lerp(ix0, ix1, sy))
}

/// Lower lattice index of the cell containing `coord`, pinned to the last cell.
fn cell_index(coord: f64, size: usize) -> usize {
    (coord.floor() as usize).min(size - 1)
}

/// Dot product of the gradient at `(gx, gy)` with the offset to `(x, y)`.
fn influence(
    field: &GradientField,
    gx: usize,
    gy: usize,
    x: f64,
    y: f64,
) -> Result<f64, NoiseError> {
    let offset = DVec2::new(x - gx as f64, y - gy as f64);
    Ok(field.gradient_at(gx, gy)?.dot(offset))
}
