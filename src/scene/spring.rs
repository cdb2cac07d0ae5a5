//! Damped spring followers for the cursor glow blobs
//!
//! Two translucent glow layers chase the pointer with different weights;
//! the heavier one lags further behind, which is the whole effect.

use glam::Vec2;

use crate::consts::GLOW_BLOB_OFFSET;

/// Stiffness/damping pair for a unit-mass spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPreset {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringPreset {
    /// Tight follower driving the red glow blob
    pub const PRIMARY: Self = Self {
        stiffness: 200.0,
        damping: 30.0,
    };
    /// Heavier, laggier follower for the white blob
    pub const SECONDARY: Self = Self {
        stiffness: 150.0,
        damping: 40.0,
    };
}

/// Unit-mass damped harmonic spring in 2D, integrated semi-implicitly
#[derive(Debug, Clone, Copy)]
pub struct Spring2 {
    preset: SpringPreset,
    pub position: Vec2,
    velocity: Vec2,
}

impl Spring2 {
    pub fn new(preset: SpringPreset, start: Vec2) -> Self {
        Self {
            preset,
            position: start,
            velocity: Vec2::ZERO,
        }
    }

    /// Pull toward the pointer (viewport px), offset so the blob's center
    /// lands on the cursor rather than its top-left corner.
    pub fn follow(&mut self, pointer: Vec2, dt: f32) {
        self.advance(pointer - Vec2::splat(GLOW_BLOB_OFFSET), dt);
    }

    /// One integration step toward an explicit target
    pub fn advance(&mut self, target: Vec2, dt: f32) {
        let accel =
            (target - self.position) * self.preset.stiffness - self.velocity * self.preset.damping;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring2::new(SpringPreset::PRIMARY, Vec2::ZERO);
        let target = Vec2::new(400.0, 250.0);

        for _ in 0..300 {
            spring.advance(target, DT);
        }

        assert!((spring.position - target).length() < 0.5);
        assert!(spring.velocity().length() < 1.0);
    }

    #[test]
    fn test_secondary_preset_lags_primary() {
        let mut primary = Spring2::new(SpringPreset::PRIMARY, Vec2::ZERO);
        let mut secondary = Spring2::new(SpringPreset::SECONDARY, Vec2::ZERO);
        let target = Vec2::new(300.0, 0.0);

        for _ in 0..20 {
            primary.advance(target, DT);
            secondary.advance(target, DT);
        }

        let primary_gap = (target - primary.position).length();
        let secondary_gap = (target - secondary.position).length();
        assert!(
            secondary_gap > primary_gap,
            "secondary ({secondary_gap}) should trail primary ({primary_gap})"
        );
    }

    #[test]
    fn test_follow_applies_blob_offset() {
        let mut spring = Spring2::new(SpringPreset::PRIMARY, Vec2::ZERO);
        let pointer = Vec2::new(500.0, 400.0);

        for _ in 0..300 {
            spring.follow(pointer, DT);
        }

        let expected = pointer - Vec2::splat(GLOW_BLOB_OFFSET);
        assert!((spring.position - expected).length() < 0.5);
    }

    #[test]
    fn test_spring_at_rest_stays_put() {
        let start = Vec2::new(10.0, 10.0);
        let mut spring = Spring2::new(SpringPreset::PRIMARY, start);
        spring.advance(start, DT);
        assert_eq!(spring.position, start);
        assert_eq!(spring.velocity(), Vec2::ZERO);
    }
}
