//! Shape field state and core simulation types
//!
//! A `ShapeField` owns a fixed set of decorative shapes for one page view.
//! Cardinality is constant after construction: shapes are never added or
//! removed while the field lives.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;

/// Rectangular simulation area in viewport pixel space, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the viewport
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest legal coordinate for a shape of the given size, per axis.
    /// Negative when the shape is larger than the viewport; clamping then
    /// pins the shape to the origin edge.
    pub fn span(&self, size: f32) -> Vec2 {
        Vec2::new(self.width - size, self.height - size)
    }
}

/// Shape silhouette. Purely cosmetic: kind drives border radius and
/// rotation in the render layer, never the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Rhombus,
}

/// Cosmetic border-class tag, fixed per shape at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorClass {
    Red500,
    Red600,
    White,
    Red400,
}

/// Palette the constructor draws from, uniformly
pub const PALETTE: [ColorClass; 4] = [
    ColorClass::Red500,
    ColorClass::Red600,
    ColorClass::White,
    ColorClass::Red400,
];

impl ColorClass {
    /// Utility-class string the page styles shapes with
    pub fn as_class(&self) -> &'static str {
        match self {
            ColorClass::Red500 => "border-red-500/30",
            ColorClass::Red600 => "border-red-600/25",
            ColorClass::White => "border-white/20",
            ColorClass::Red400 => "border-red-400/35",
        }
    }

    /// Red-family classes get the red glow shadow, white gets the white one
    pub fn is_red(&self) -> bool {
        !matches!(self, ColorClass::White)
    }
}

/// Per-shape construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    pub kind: ShapeKind,
    pub size: f32,
    pub speed_scale: f32,
}

impl ShapeConfig {
    pub fn new(kind: ShapeKind, size: f32, speed_scale: f32) -> Self {
        Self {
            kind,
            size,
            speed_scale,
        }
    }
}

/// One decorative floating primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Stable identity, unique within a field, assigned at creation
    pub id: u32,
    /// Top-left corner in viewport pixel space
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Edge length / diameter, immutable
    pub size: f32,
    /// Immutable silhouette tag
    pub kind: ShapeKind,
    /// Immutable cosmetic tag
    pub color: ColorClass,
    /// Mutated only by the glow pass
    pub glowing: bool,
}

/// The owning collection + simulation for all shapes' motion and glow state
#[derive(Debug, Clone)]
pub struct ShapeField {
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) shapes: Vec<Shape>,
}

impl ShapeField {
    /// Build a field from an ordered config list.
    ///
    /// Shape `i` of `n` is placed on a ring around the viewport center at
    /// angle `2πi/n` and a random radius in [200, 500), clamped into
    /// bounds. Velocities are uniform in [-0.5, 0.5) per axis, scaled by
    /// the config's speed. An empty config list yields an empty field;
    /// a zero-area viewport collapses placement to the origin edge. Both
    /// are degenerate, not errors.
    pub fn new(configs: &[ShapeConfig], viewport: Viewport, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let n = configs.len();
        let center = viewport.center();

        let mut shapes = Vec::with_capacity(n);
        for (i, cfg) in configs.iter().enumerate() {
            let angle = (i as f32 / n as f32) * TAU;
            let radius = rng.random_range(PLACEMENT_RADIUS_MIN..PLACEMENT_RADIUS_MAX);
            let raw = center + Vec2::new(angle.cos(), angle.sin()) * radius;

            let span = viewport.span(cfg.size);
            let pos = Vec2::new(
                super::clamp_to_span(raw.x, span.x),
                super::clamp_to_span(raw.y, span.y),
            );
            let vel = Vec2::new(
                rng.random_range(-VELOCITY_SPREAD..VELOCITY_SPREAD) * cfg.speed_scale,
                rng.random_range(-VELOCITY_SPREAD..VELOCITY_SPREAD) * cfg.speed_scale,
            );
            let color = PALETTE[rng.random_range(0..PALETTE.len())];

            shapes.push(Shape {
                id: i as u32,
                pos,
                vel,
                size: cfg.size,
                kind: cfg.kind,
                color,
                glowing: false,
            });
        }

        log::debug!("shape field initialized: {} shapes, seed {}", n, seed);
        Self { seed, rng, shapes }
    }

    /// Field with prescribed shapes, for exercising specific geometry
    #[cfg(test)]
    pub(crate) fn from_shapes(shapes: Vec<Shape>, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            shapes,
        }
    }

    /// Seed the field was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only ordered view of the current shapes. The render layer keys
    /// elements by `Shape::id`.
    pub fn snapshot(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
