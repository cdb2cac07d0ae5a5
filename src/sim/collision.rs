//! Wall bounce and pairwise repulsion for floating shapes
//!
//! The field is axis-aligned, so wall contact is resolved per axis
//! independently (a corner hit flips both components). Shape-shape contact
//! is a soft spring-like impulse along the line between the pair, not an
//! elastic collision.

use glam::Vec2;

use crate::consts::{COLLISION_PADDING, REPULSION_GAIN};

/// Result of a single-axis wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounce {
    /// Clamped coordinate for this axis
    pub coord: f32,
    /// Whether the velocity component must flip for the next tick
    pub flipped: bool,
}

/// Clamp a coordinate into `[0, hi]`. Min-before-max, so a negative `hi`
/// (shape larger than the viewport) collapses to 0 instead of panicking.
#[inline]
pub fn clamp_to_span(value: f32, hi: f32) -> f32 {
    value.min(hi).max(0.0)
}

/// Resolve one axis of wall contact for an integrated coordinate.
///
/// `hi` is `viewport extent - shape size`, the largest legal coordinate.
pub fn wall_bounce(coord: f32, hi: f32) -> AxisBounce {
    if coord <= 0.0 || coord >= hi {
        AxisBounce {
            coord: clamp_to_span(coord, hi),
            flipped: true,
        }
    } else {
        AxisBounce {
            coord,
            flipped: false,
        }
    }
}

/// Separation threshold below which two shapes repel
#[inline]
pub fn min_distance(size_a: f32, size_b: f32) -> f32 {
    (size_a + size_b) / 2.0 + COLLISION_PADDING
}

/// Soft repulsion impulse for an overlapping pair.
///
/// Computes the point at `min_dist` from `pos_b` along the b-to-a
/// direction and turns the offset into a velocity pair: `a` is pushed
/// outward, `b` gets the exact negation. Coincident positions degrade to
/// `atan2(0, 0) == 0`, a push along +x; degenerate but harmless.
pub fn repel(pos_a: Vec2, pos_b: Vec2, min_dist: f32) -> (Vec2, Vec2) {
    let delta = pos_a - pos_b;
    let angle = delta.y.atan2(delta.x);
    let target = pos_b + Vec2::new(angle.cos(), angle.sin()) * min_dist;

    let vel_a = (target - pos_b) * REPULSION_GAIN;
    (vel_a, -vel_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bounce_left_edge() {
        // Integrated past the left wall: clamp to 0, flip
        let bounce = wall_bounce(-3.0, 720.0);
        assert_eq!(bounce.coord, 0.0);
        assert!(bounce.flipped);
    }

    #[test]
    fn test_wall_bounce_right_edge() {
        let bounce = wall_bounce(725.0, 720.0);
        assert_eq!(bounce.coord, 720.0);
        assert!(bounce.flipped);
    }

    #[test]
    fn test_wall_bounce_interior() {
        let bounce = wall_bounce(300.0, 720.0);
        assert_eq!(bounce.coord, 300.0);
        assert!(!bounce.flipped);
    }

    #[test]
    fn test_clamp_negative_span_pins_to_zero() {
        // Shape wider than the viewport: every coordinate collapses to 0
        assert_eq!(clamp_to_span(10.0, -50.0), 0.0);
        assert_eq!(clamp_to_span(-10.0, -50.0), 0.0);
    }

    #[test]
    fn test_min_distance_includes_padding() {
        assert_eq!(min_distance(100.0, 100.0), 130.0);
        assert_eq!(min_distance(80.0, 200.0), 170.0);
    }

    #[test]
    fn test_repel_is_antiparallel() {
        let a = Vec2::new(400.0, 300.0);
        let b = Vec2::new(340.0, 250.0);
        let (va, vb) = repel(a, b, 130.0);

        assert!(va.length() > 0.0);
        assert_eq!(vb, -va);
    }

    #[test]
    fn test_repel_along_center_line() {
        let a = Vec2::new(480.0, 300.0);
        let b = Vec2::new(400.0, 300.0);
        let (va, _) = repel(a, b, 130.0);

        // Pure +x separation pushes a along +x only
        assert!(va.x > 0.0);
        assert!(va.y.abs() < 1e-5);
        assert!((va.x - 130.0 * REPULSION_GAIN).abs() < 1e-4);
    }

    #[test]
    fn test_repel_coincident_centers_pushes_along_x() {
        let p = Vec2::new(100.0, 100.0);
        let (va, vb) = repel(p, p, 130.0);

        // atan2(0, 0) == 0: push along +x, no crash
        assert!(va.x > 0.0);
        assert_eq!(va.y, 0.0);
        assert_eq!(vb, -va);
    }
}
