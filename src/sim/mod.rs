//! Deterministic simulation module
//!
//! All background-motion logic lives here. This module must be pure and
//! deterministic:
//! - Fixed cadence only
//! - Seeded RNG only
//! - Stable iteration order (by shape ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{AxisBounce, clamp_to_span, min_distance, repel, wall_bounce};
pub use state::{ColorClass, PALETTE, Shape, ShapeConfig, ShapeField, ShapeKind, Viewport};
pub use trail::{CursorTrail, TrailColor, TrailFade, TrailPoint};
