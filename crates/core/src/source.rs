//! Injected randomness for gradient population.
//!
//! A [`GradientField`](crate::GradientField) never reaches for ambient
//! randomness. Callers hand it a [`UnitVectorSource`]: the seeded
//! [`Xorshift64`] for real use, or a closure replaying a fixed sequence when a
//! test needs exact gradients.

use crate::prng::Xorshift64;
use glam::DVec2;

/// Produces one direction per call for gradient population.
///
/// Implementations should return unit vectors; the field normalizes whatever
/// it receives and rejects vectors that cannot be normalized.
pub trait UnitVectorSource {
    /// Draws the next direction.
    fn next_unit_vector(&mut self) -> DVec2;
}

impl UnitVectorSource for Xorshift64 {
    fn next_unit_vector(&mut self) -> DVec2 {
        Xorshift64::next_unit_vector(self)
    }
}

impl<F> UnitVectorSource for F
where
    F: FnMut() -> DVec2,
{
    fn next_unit_vector(&mut self) -> DVec2 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw<S: UnitVectorSource + ?Sized>(source: &mut S) -> DVec2 {
        source.next_unit_vector()
    }

    #[test]
    fn closure_replays_scripted_sequence() {
        let script = [DVec2::X, DVec2::Y, DVec2::NEG_X];
        let mut it = script.into_iter().cycle();
        let mut source = move || it.next().unwrap_or(DVec2::X);
        assert_eq!(draw(&mut source), DVec2::X);
        assert_eq!(draw(&mut source), DVec2::Y);
        assert_eq!(draw(&mut source), DVec2::NEG_X);
        assert_eq!(draw(&mut source), DVec2::X);
    }

    #[test]
    fn xorshift_source_matches_inherent_method() {
        let mut via_trait = Xorshift64::new(5);
        let mut direct = Xorshift64::new(5);
        for _ in 0..10 {
            assert_eq!(draw(&mut via_trait), direct.next_unit_vector());
        }
    }

    #[test]
    fn source_is_usable_as_trait_object() {
        let mut rng = Xorshift64::new(9);
        let source: &mut dyn UnitVectorSource = &mut rng;
        let v = draw(source);
        assert!((v.length() - 1.0).abs() < 1e-12);
    }
}
