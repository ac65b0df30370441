#![deny(unsafe_code)]
//! Core types for the perlin-field gradient noise engine.
//!
//! Provides the `GradientField` lattice of unit gradients, the bilinear
//! gradient-noise `sampler`, the `BoxFrame` world/box coordinate mapping,
//! the `Xorshift64` PRNG behind `UnitVectorSource`, `SampleGrid` rasters and
//! the reproducible `Recipe`.

pub mod coords;
pub mod error;
pub mod gradient;
pub mod prng;
pub mod raster;
pub mod recipe;
pub mod sampler;
pub mod source;

pub use coords::BoxFrame;
pub use error::NoiseError;
pub use gradient::GradientField;
pub use prng::Xorshift64;
pub use raster::{to_unit, SampleGrid};
pub use recipe::Recipe;
pub use sampler::{evaluate, lerp, MAX_AMPLITUDE};
pub use source::UnitVectorSource;

// Re-exported so callers can build scripted sources without naming glam.
pub use glam::DVec2;
