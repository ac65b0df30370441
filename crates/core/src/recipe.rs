//! Reproducible description of a sampled noise image.
//!
//! A [`Recipe`] captures everything needed to rebuild a raster: field size,
//! PRNG seed, and sampling step. Two identical recipes produce bit-identical
//! samples.

use crate::error::NoiseError;
use crate::gradient::GradientField;
use crate::raster::SampleGrid;
use serde::{Deserialize, Serialize};

/// Field side used when none is given.
pub const DEFAULT_SIZE: usize = 8;
/// PRNG seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;
/// Sampling step used when none is given (twenty samples per grid unit).
pub const DEFAULT_STEP: f64 = 0.05;

/// Field size, seed and sampling step for one noise image.
///
/// Missing keys fall back to the defaults when deserializing, so `{}` is a
/// valid recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Recipe {
    pub size: usize,
    pub seed: u64,
    pub step: f64,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            step: DEFAULT_STEP,
        }
    }
}

impl Recipe {
    /// Creates a recipe with the default step.
    pub fn new(size: usize, seed: u64) -> Self {
        Self {
            size,
            seed,
            step: DEFAULT_STEP,
        }
    }

    /// Parses a recipe from JSON, then validates it.
    pub fn from_json_str(json: &str) -> Result<Self, NoiseError> {
        let recipe: Recipe = serde_json::from_str(json)
            .map_err(|e| NoiseError::InvalidArgument(format!("invalid recipe JSON: {e}")))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Checks that the size is at least 1 and the step is positive and finite.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.size == 0 {
            return Err(NoiseError::InvalidArgument(
                "recipe size must be at least 1".into(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(NoiseError::InvalidArgument(format!(
                "recipe step must be positive and finite, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Builds the populated gradient field this recipe describes.
    pub fn build_field(&self) -> Result<GradientField, NoiseError> {
        self.validate()?;
        GradientField::seeded(self.size, self.seed)
    }

    /// Builds the field and samples it at this recipe's step.
    pub fn render(&self) -> Result<SampleGrid, NoiseError> {
        let field = self.build_field()?;
        SampleGrid::sample(&field, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_documented_constants() {
        let r = Recipe::default();
        assert_eq!(r.size, DEFAULT_SIZE);
        assert_eq!(r.seed, DEFAULT_SEED);
        assert_eq!(r.step, DEFAULT_STEP);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn new_keeps_size_and_seed() {
        let r = Recipe::new(16, 7);
        assert_eq!(r.size, 16);
        assert_eq!(r.seed, 7);
        assert_eq!(r.step, DEFAULT_STEP);
    }

    #[test]
    fn json_round_trip() {
        let original = Recipe {
            size: 12,
            seed: 8_675_309,
            step: 0.25,
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v = serde_json::to_value(Recipe::default()).unwrap();
        assert!(v.get("size").is_some());
        assert!(v.get("seed").is_some());
        assert!(v.get("step").is_some());
    }

    #[test]
    fn from_json_str_fills_missing_keys_with_defaults() {
        let r = Recipe::from_json_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(r.seed, 5);
        assert_eq!(r.size, DEFAULT_SIZE);
        assert_eq!(r.step, DEFAULT_STEP);
    }

    #[test]
    fn from_json_str_rejects_malformed_json() {
        assert!(matches!(
            Recipe::from_json_str("{size:"),
            Err(NoiseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_json_str_rejects_zero_size() {
        assert!(Recipe::from_json_str(r#"{"size": 0}"#).is_err());
    }

    #[test]
    fn validate_rejects_bad_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let r = Recipe {
                step,
                ..Recipe::default()
            };
            assert!(r.validate().is_err(), "step {step} accepted");
        }
    }

    #[test]
    fn build_field_is_populated_and_sized() {
        let field = Recipe::new(5, 11).build_field().unwrap();
        assert_eq!(field.size(), 5);
        assert!(field.is_populated());
    }

    #[test]
    fn render_is_reproducible() {
        let r = Recipe {
            size: 3,
            seed: 21,
            step: 0.2,
        };
        let a = r.render().unwrap();
        let b = r.render().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.side(), 15);
    }

    #[test]
    fn different_seeds_render_differently() {
        let a = Recipe {
            size: 3,
            seed: 1,
            step: 0.5,
        };
        let b = Recipe { seed: 2, ..a.clone() };
        assert_ne!(a.render().unwrap(), b.render().unwrap());
    }
}
