//! Mapping between world and box coordinate frames.
//!
//! Box coordinates put the origin at the upper-left corner of the field with
//! y growing downward, spanning `[0, size]` on both axes; this is the frame the
//! sampler works in. World coordinates center the field on the origin with y
//! growing upward, which is how a host scene places the sampled cells.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Converts points between world and box coordinates for a field of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxFrame {
    size: f64,
}

impl BoxFrame {
    /// Frame for a field of side `size`. Any real size is accepted.
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Side length this frame was built for.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// World point to box point: `(wx + size/2, size/2 - wy)`.
    pub fn world_to_box(&self, world: DVec2) -> DVec2 {
        let half = self.size / 2.0;
        DVec2::new(world.x + half, half - world.y)
    }

    /// Box point to world point: `(bx - size/2, size/2 - by)`.
    pub fn box_to_world(&self, boxed: DVec2) -> DVec2 {
        let half = self.size / 2.0;
        DVec2::new(boxed.x - half, half - boxed.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_is_box_center() {
        let frame = BoxFrame::new(10.0);
        assert_eq!(frame.world_to_box(DVec2::ZERO), DVec2::new(5.0, 5.0));
        assert_eq!(frame.box_to_world(DVec2::new(5.0, 5.0)), DVec2::ZERO);
    }

    #[test]
    fn box_origin_is_world_upper_left() {
        let frame = BoxFrame::new(4.0);
        assert_eq!(frame.box_to_world(DVec2::ZERO), DVec2::new(-2.0, 2.0));
        assert_eq!(frame.box_to_world(DVec2::new(4.0, 4.0)), DVec2::new(2.0, -2.0));
    }

    #[test]
    fn moving_down_in_box_moves_down_in_world() {
        let frame = BoxFrame::new(6.0);
        let upper = frame.box_to_world(DVec2::new(1.0, 1.0));
        let lower = frame.box_to_world(DVec2::new(1.0, 2.0));
        assert!(lower.y < upper.y);
        assert_eq!(lower.x, upper.x);
    }

    #[test]
    fn frame_remembers_its_size() {
        let frame = BoxFrame::new(7.5);
        assert_eq!(frame.size(), 7.5);
        let far = frame.world_to_box(DVec2::new(frame.size() / 2.0, -frame.size() / 2.0));
        assert_eq!(far, DVec2::new(7.5, 7.5));
    }

    #[test]
    fn odd_size_uses_fractional_half() {
        let frame = BoxFrame::new(3.0);
        assert_eq!(frame.world_to_box(DVec2::ZERO), DVec2::new(1.5, 1.5));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn box_to_world_inverts_world_to_box(
                size in 0.0_f64..1e4,
                wx in -1e4_f64..1e4,
                wy in -1e4_f64..1e4,
            ) {
                let frame = BoxFrame::new(size);
                let back = frame.box_to_world(frame.world_to_box(DVec2::new(wx, wy)));
                prop_assert!((back.x - wx).abs() < 1e-9, "x: {} vs {wx}", back.x);
                prop_assert!((back.y - wy).abs() < 1e-9, "y: {} vs {wy}", back.y);
            }

            #[test]
            fn world_to_box_inverts_box_to_world(
                size in 0.0_f64..1e4,
                bx in -1e4_f64..1e4,
                by in -1e4_f64..1e4,
            ) {
                let frame = BoxFrame::new(size);
                let back = frame.world_to_box(frame.box_to_world(DVec2::new(bx, by)));
                prop_assert!((back.x - bx).abs() < 1e-9);
                prop_assert!((back.y - by).abs() < 1e-9);
            }
        }
    }
}
