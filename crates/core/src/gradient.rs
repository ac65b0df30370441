//! Lattice of pseudorandom unit gradients.
//!
//! A field of side `size` stores one gradient per integer lattice point
//! `(i, j)` with `0 <= i, j <= size`, i.e. `(size + 1)^2` vectors in
//! row-major order (`j` selects the row). That gives every unit cell
//! `[i, i + 1] x [j, j + 1]` for `i, j < size` all four of its corners.

use crate::error::NoiseError;
use crate::prng::Xorshift64;
use crate::sampler;
use crate::source::UnitVectorSource;
use glam::DVec2;
use tracing::debug;

/// An owned grid of unit gradient vectors, one per lattice point.
///
/// Allocated zeroed by [`GradientField::new`]; sampling is refused until
/// [`GradientField::populate`] has filled it. Once populated the field is only
/// read, so a shared reference may be handed to any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    size: usize,
    gradients: Vec<DVec2>,
    populated: bool,
}

impl GradientField {
    /// Allocates storage for a field of side `size`.
    ///
    /// Returns `NoiseError::InvalidArgument` if `size` is zero, if the
    /// lattice point count overflows `usize`, or if the storage cannot be
    /// allocated.
    pub fn new(size: usize) -> Result<Self, NoiseError> {
        if size == 0 {
            return Err(NoiseError::InvalidArgument(
                "field size must be at least 1".into(),
            ));
        }
        let side = size
            .checked_add(1)
            .ok_or_else(|| NoiseError::InvalidArgument(format!("field size {size} too large")))?;
        let too_large = || NoiseError::InvalidArgument(format!("field size {size} too large"));
        let len = side.checked_mul(side).ok_or_else(too_large)?;
        let mut gradients = Vec::new();
        gradients.try_reserve_exact(len).map_err(|_| too_large())?;
        gradients.resize(len, DVec2::ZERO);
        debug!(size, lattice_points = len, "allocated gradient field");
        Ok(Self {
            size,
            gradients,
            populated: false,
        })
    }

    /// Allocates and populates a field from an [`Xorshift64`] seeded with `seed`.
    pub fn seeded(size: usize, seed: u64) -> Result<Self, NoiseError> {
        let mut field = Self::new(size)?;
        field.populate(&mut Xorshift64::new(seed))?;
        Ok(field)
    }

    /// Draws one gradient per lattice point from `source`.
    ///
    /// Points are visited with `i` outer and `j` inner, both ascending, so the
    /// k-th draw lands on `(k / (size + 1), k % (size + 1))`. Each draw is
    /// normalized; a zero or non-finite draw fails with
    /// `NoiseError::DegenerateGradient` and leaves the field unpopulated.
    ///
    /// Not idempotent: calling this again re-randomizes the whole field.
    pub fn populate<S>(&mut self, source: &mut S) -> Result<(), NoiseError>
    where
        S: UnitVectorSource + ?Sized,
    {
        self.populated = false;
        let side = self.size + 1;
        for i in 0..side {
            for j in 0..side {
                let g = source
                    .next_unit_vector()
                    .try_normalize()
                    .ok_or(NoiseError::DegenerateGradient { i, j })?;
                self.gradients[j * side + i] = g;
            }
        }
        self.populated = true;
        debug!(size = self.size, "populated gradient field");
        Ok(())
    }

    /// Side length of the sampled region in grid units.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored lattice points, `(size + 1)^2`.
    pub fn lattice_len(&self) -> usize {
        self.gradients.len()
    }

    /// Whether [`populate`](Self::populate) has completed on this field.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Returns the gradient stored at lattice point `(i, j)`.
    ///
    /// Returns `NoiseError::LatticeOutOfBounds` if either index exceeds `size`.
    pub fn gradient_at(&self, i: usize, j: usize) -> Result<DVec2, NoiseError> {
        if i > self.size || j > self.size {
            return Err(NoiseError::LatticeOutOfBounds {
                i,
                j,
                size: self.size,
            });
        }
        Ok(self.gradients[j * (self.size + 1) + i])
    }

    /// Read-only access to the row-major gradient storage.
    pub fn gradients(&self) -> &[DVec2] {
        &self.gradients
    }

    /// Evaluates the noise at box coordinates `(x, y)`.
    ///
    /// Shorthand for [`sampler::evaluate`].
    pub fn sample(&self, x: f64, y: f64) -> Result<f64, NoiseError> {
        sampler::evaluate(self, x, y)
    }
}
