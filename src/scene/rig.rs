//! Camera and cursor-light rigs for the backdrop scene
//!
//! Both rigs chase pointer-derived targets with a critically damped
//! smooth-damp (the Game Programming Gems form). The camera sweeps a wider
//! arc on the right half of the screen; the light hugs the pointer tightly.

use glam::{Vec2, Vec3};

/// Camera rest position, matching the scene's initial placement
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 1.0, 5.5);
/// Fixed camera depth along z
const CAMERA_DEPTH: f32 = 5.5;
/// Camera approach time (seconds)
const CAMERA_SMOOTH_TIME: f32 = 1.5;
/// Light approach time (seconds)
const LIGHT_SMOOTH_TIME: f32 = 0.2;
/// Light hover depth in front of the scene
const LIGHT_DEPTH: f32 = 2.0;

/// Critically damped approach toward a moving target with internal
/// velocity state. Stable for any positive smooth time and frame delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothDamp3 {
    velocity: Vec3,
}

impl SmoothDamp3 {
    /// Move `current` toward `target`, closing most of the gap in roughly
    /// `smooth_time` seconds.
    pub fn damp(&mut self, current: Vec3, target: Vec3, smooth_time: f32, dt: f32) -> Vec3 {
        let smooth_time = smooth_time.max(1e-4);
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = current - target;
        let temp = (self.velocity + change * omega) * dt;
        self.velocity = (self.velocity - temp * omega) * exp;
        target + (change + temp) * exp
    }
}

/// Eases the scene camera toward a pointer-offset position, always looking
/// at the origin
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub position: Vec3,
    damp: SmoothDamp3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: CAMERA_HOME,
            damp: SmoothDamp3::default(),
        }
    }

    /// Target position for a pointer in normalized device coordinates
    /// [-1, 1]. The sweep range doubles on the right half of the screen.
    pub fn target_for(pointer: Vec2) -> Vec3 {
        let range = if pointer.x > 0.0 { 2.0 } else { 1.0 };
        Vec3::new(
            -1.0 + pointer.x * range,
            (1.0 + pointer.y) / 2.0,
            CAMERA_DEPTH,
        )
    }

    pub fn update(&mut self, pointer: Vec2, dt: f32) {
        self.position = self
            .damp
            .damp(self.position, Self::target_for(pointer), CAMERA_SMOOTH_TIME, dt);
    }

    /// Look-at target stays pinned at the origin
    pub fn look_at(&self) -> Vec3 {
        Vec3::ZERO
    }
}

/// Eases a point light toward the pointer, mapped into scene units
#[derive(Debug, Clone, Copy)]
pub struct CursorLight {
    pub position: Vec3,
    damp: SmoothDamp3,
}

impl Default for CursorLight {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorLight {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, LIGHT_DEPTH),
            damp: SmoothDamp3::default(),
        }
    }

    /// `world` is the visible scene extent (width, height) in scene units;
    /// pointer is in normalized device coordinates [-1, 1].
    pub fn update(&mut self, pointer: Vec2, world: Vec2, dt: f32) {
        let target = Vec3::new(
            pointer.x * world.x / 2.0,
            pointer.y * world.y / 2.0,
            LIGHT_DEPTH,
        );
        self.position = self
            .damp
            .damp(self.position, target, LIGHT_SMOOTH_TIME, dt);
    }
}
