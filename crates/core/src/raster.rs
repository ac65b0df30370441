//! Regular sampling of a gradient field into a square raster.
//!
//! A [`SampleGrid`] walks `[0, size) x [0, size)` at a fixed step, evaluating
//! the noise at `(col * step, row * step)` for every cell. Values are stored
//! raw (nominally in `[-1, 1]`) in row-major order; [`to_unit`] maps them to a
//! display channel.

use crate::error::NoiseError;
use crate::gradient::GradientField;
use crate::sampler;
use glam::DVec2;
use tracing::debug;

/// Upper bound on samples along one axis of a raster.
pub const MAX_SAMPLES_PER_AXIS: usize = 8_192;

/// Maps a noise value from `[-1, 1]` to `[0, 1]`, clamping anything outside.
pub fn to_unit(value: f64) -> f64 {
    ((value + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// A square raster of noise samples taken at a fixed step in box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    side: usize,
    step: f64,
    data: Vec<f64>,
}

impl SampleGrid {
    /// Samples `field` at every multiple of `step` below its size on both axes.
    ///
    /// Returns `NoiseError::InvalidArgument` if `step` is not a positive finite
    /// number or if the raster would exceed [`MAX_SAMPLES_PER_AXIS`]. Sampling
    /// errors (such as an unpopulated field) are propagated.
    pub fn sample(field: &GradientField, step: f64) -> Result<Self, NoiseError> {
        let side = samples_per_axis(field.size(), step)?;
        let mut data = Vec::with_capacity(side * side);
        for row in 0..side {
            let y = row as f64 * step;
            for col in 0..side {
                let x = col as f64 * step;
                data.push(sampler::evaluate(field, x, y)?);
            }
        }
        debug!(size = field.size(), step, side, "sampled noise raster");
        Ok(Self { side, step, data })
    }

    /// Builds a raster from precomputed row-major values.
    ///
    /// Returns `NoiseError::InvalidArgument` for a zero side or bad step, and
    /// `NoiseError::DimensionMismatch` if `data.len() != side * side`.
    pub fn from_data(side: usize, step: f64, data: Vec<f64>) -> Result<Self, NoiseError> {
        if side == 0 {
            return Err(NoiseError::InvalidArgument(
                "raster side must be at least 1".into(),
            ));
        }
        check_step(step)?;
        let expected = side
            .checked_mul(side)
            .ok_or_else(|| NoiseError::InvalidArgument(format!("raster side {side} too large")))?;
        if data.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                lhs_w: side,
                lhs_h: side,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self { side, step, data })
    }

    /// Number of samples along each axis.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Distance in box units between neighbouring samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Read-only access to the row-major samples.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sample at column `col`, row `row`, or `None` past the edge.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.side || row >= self.side {
            return None;
        }
        Some(self.data[row * self.side + col])
    }

    /// Box coordinate at which cell `(col, row)` was sampled.
    pub fn box_point(&self, col: usize, row: usize) -> DVec2 {
        DVec2::new(col as f64 * self.step, row as f64 * self.step)
    }

    /// Iterates over all cells yielding `(col, row, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i % self.side, i / self.side, v))
    }
}

fn check_step(step: f64) -> Result<(), NoiseError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(NoiseError::InvalidArgument(format!(
            "sample step must be positive and finite, got {step}"
        )));
    }
    Ok(())
}

/// Count of `k >= 0` with `k * step < size`.
fn samples_per_axis(size: usize, step: f64) -> Result<usize, NoiseError> {
    check_step(step)?;
    let limit = size as f64;
    let estimate = (limit / step).ceil();
    if estimate > MAX_SAMPLES_PER_AXIS as f64 {
        return Err(NoiseError::InvalidArgument(format!(
            "step {step} needs more than {MAX_SAMPLES_PER_AXIS} samples per axis"
        )));
    }
    let mut count = estimate as usize;
    // Division rounding can overshoot by one sample that lands on the far edge.
    while count > 0 && (count - 1) as f64 * step >= limit {
        count -= 1;
    }
    Ok(count)
}
