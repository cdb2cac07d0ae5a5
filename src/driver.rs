//! Dual-cadence driver for the background simulation
//!
//! The page lifecycle owns one of these and feeds it frame deltas. Motion
//! steps run every 50 ms and glow re-rolls every 2000 ms, each on its own
//! accumulator, so the two cadences stay independent regardless of frame
//! rate. Dropping the driver cancels both. Single-threaded cooperative use
//! only - there is no internal synchronization.

use crate::consts::{GLOW_INTERVAL_MS, MAX_CATCHUP_STEPS, STEP_INTERVAL_MS};
use crate::sim::{ShapeField, Viewport};

/// What one `advance` call actually ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub steps: u32,
    pub glow_passes: u32,
}

/// Accumulator-based scheduler for the step and glow cadences
#[derive(Debug, Clone, Default)]
pub struct FieldDriver {
    step_accum_ms: f64,
    glow_accum_ms: f64,
}

impl FieldDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall-clock time; runs zero or more steps and glow
    /// passes at their reference cadences. Step catch-up is capped so a
    /// long frame (tab switch) cannot trigger a burst of stale ticks.
    pub fn advance(
        &mut self,
        field: &mut ShapeField,
        viewport: Viewport,
        elapsed_ms: f64,
    ) -> DriverStats {
        let mut stats = DriverStats::default();

        self.step_accum_ms += elapsed_ms;
        while self.step_accum_ms >= STEP_INTERVAL_MS && stats.steps < MAX_CATCHUP_STEPS {
            field.step(viewport);
            self.step_accum_ms -= STEP_INTERVAL_MS;
            stats.steps += 1;
        }
        if stats.steps == MAX_CATCHUP_STEPS && self.step_accum_ms >= STEP_INTERVAL_MS {
            // Drop the backlog instead of bursting on the next frame
            log::debug!(
                "dropping {:.0} ms of step backlog",
                self.step_accum_ms
            );
            self.step_accum_ms = 0.0;
        }

        self.glow_accum_ms += elapsed_ms;
        while self.glow_accum_ms >= GLOW_INTERVAL_MS {
            field.toggle_glow();
            self.glow_accum_ms -= GLOW_INTERVAL_MS;
            stats.glow_passes += 1;
        }

        stats
    }
}
