//! Driftfield - decorative background simulation for event-site pages
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shape field, collisions, cursor trail)
//! - `scene`: Easing rigs for the 3D backdrop (camera, cursor light, glow springs)
//! - `render`: Maps simulation state to visual-element descriptors
//! - `driver`: Dual-cadence tick driver owned by the page lifecycle
//! - `config`: Field layout configuration

pub mod config;
pub mod driver;
pub mod render;
pub mod scene;
pub mod sim;

pub use config::FieldConfig;
pub use sim::{Shape, ShapeField, Viewport};

/// Simulation constants
pub mod consts {
    /// Motion tick cadence (ms) - reference cadence, the step contract is
    /// tick-period-agnostic
    pub const STEP_INTERVAL_MS: f64 = 50.0;
    /// Glow re-roll cadence (ms)
    pub const GLOW_INTERVAL_MS: f64 = 2000.0;
    /// Maximum catch-up steps per driver advance to prevent spiral of death
    pub const MAX_CATCHUP_STEPS: u32 = 8;

    /// Extra spacing added to the pair separation threshold (px)
    pub const COLLISION_PADDING: f32 = 30.0;
    /// Scale applied to the repulsion impulse
    pub const REPULSION_GAIN: f32 = 0.05;
    /// Glow roll threshold: draws above this mark a shape glowing (30%)
    pub const GLOW_THRESHOLD: f32 = 0.7;

    /// Initial placement ring around the viewport center (px)
    pub const PLACEMENT_RADIUS_MIN: f32 = 200.0;
    pub const PLACEMENT_RADIUS_MAX: f32 = 500.0;
    /// Initial per-axis velocity bound before speed scaling (px/tick)
    pub const VELOCITY_SPREAD: f32 = 0.5;

    /// Cursor trail: minimum gap between accepted samples (ms)
    pub const TRAIL_SAMPLE_MS: f64 = 50.0;
    /// Cursor trail: maximum retained points
    pub const TRAIL_CAPACITY: usize = 20;
    /// Cursor trail: fade-out duration (ms)
    pub const TRAIL_FADE_MS: f64 = 1500.0;
    /// Cursor trail: opacity of a freshly placed dot
    pub const TRAIL_START_OPACITY: f32 = 0.8;

    /// Glow blob offset so the blob centers on the pointer (px)
    pub const GLOW_BLOB_OFFSET: f32 = 150.0;
}
