//! Error types for the perlin-field core.

use thiserror::Error;

/// Errors produced by gradient field and sampling operations.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A construction argument was rejected (size below 1, bad raster step, bad recipe).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A continuous sample coordinate fell outside `[0, size]` on either axis,
    /// was NaN, or hit the excluded top-right corner `(size, size)`.
    #[error("sample point ({x}, {y}) out of bounds for field of size {size}")]
    SampleOutOfBounds { x: f64, y: f64, size: usize },

    /// A lattice index was outside `[0, size]`.
    #[error("lattice index ({i}, {j}) out of bounds for field of size {size}")]
    LatticeOutOfBounds { i: usize, j: usize, size: usize },

    /// The random source yielded a vector that cannot be normalized.
    #[error("degenerate gradient drawn for lattice point ({i}, {j})")]
    DegenerateGradient { i: usize, j: usize },

    /// The field was sampled before `populate` ran.
    #[error("gradient field has not been populated")]
    Unpopulated,

    /// Two buffers had incompatible dimensions.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A file could not be written.
    #[error("i/o error: {0}")]
    Io(String),
}

impl NoiseError {
    /// True for both the sample and the lattice flavor of out-of-bounds access.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            NoiseError::SampleOutOfBounds { .. } | NoiseError::LatticeOutOfBounds { .. }
        )
    }
}
