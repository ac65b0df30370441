#![deny(unsafe_code)]
//! Turns noise rasters into pixels.
//!
//! Sits between `perlin-field-core` (which samples the noise) and consumers
//! such as the CLI: [`pixel`] converts a [`SampleGrid`](perlin_field_core::SampleGrid)
//! to RGBA8 bytes and, with the default `png` feature, [`snapshot`] writes them
//! to disk.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{grid_to_rgba, Scheme};
