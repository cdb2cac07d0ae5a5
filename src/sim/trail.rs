//! Cursor trail: rate-limited fading dots behind the pointer
//!
//! The page feeds every pointer-move event in; at most one dot per 50 ms
//! survives. Dots fade out over 1.5 s and the history is capped at the 20
//! most recent, so the trail is bounded regardless of pointer speed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::{TRAIL_CAPACITY, TRAIL_FADE_MS, TRAIL_SAMPLE_MS, TRAIL_START_OPACITY};

/// Dot tint, drawn 50/50 at sample time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailColor {
    Red,
    White,
}

/// One accepted pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailPoint {
    /// Monotonically increasing, never reused
    pub id: u64,
    pub pos: Vec2,
    pub color: TrailColor,
    /// Timestamp the sample was accepted at (ms)
    pub born_ms: f64,
}

/// Current fade state of a live point, ready for the render layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFade {
    pub id: u64,
    pub pos: Vec2,
    pub color: TrailColor,
    pub opacity: f32,
    pub scale: f32,
}

/// Bounded, rate-limited pointer trail
#[derive(Debug, Clone)]
pub struct CursorTrail {
    points: Vec<TrailPoint>,
    next_id: u64,
    last_sample_ms: f64,
    rng: Pcg32,
}

impl CursorTrail {
    pub fn new(seed: u64) -> Self {
        Self {
            points: Vec::with_capacity(TRAIL_CAPACITY),
            next_id: 0,
            last_sample_ms: f64::NEG_INFINITY,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Record a pointer position. Samples arriving within 50 ms of the
    /// previous accepted one are dropped. Returns whether the sample was
    /// kept.
    pub fn sample(&mut self, pos: Vec2, now_ms: f64) -> bool {
        if now_ms - self.last_sample_ms <= TRAIL_SAMPLE_MS {
            return false;
        }

        let color = if self.rng.random::<f32>() > 0.5 {
            TrailColor::Red
        } else {
            TrailColor::White
        };
        self.points.push(TrailPoint {
            id: self.next_id,
            pos,
            color,
            born_ms: now_ms,
        });
        self.next_id += 1;
        if self.points.len() > TRAIL_CAPACITY {
            self.points.remove(0);
        }
        self.last_sample_ms = now_ms;
        true
    }

    /// Drop points that have fully faded out
    pub fn prune(&mut self, now_ms: f64) {
        self.points.retain(|p| now_ms - p.born_ms < TRAIL_FADE_MS);
    }

    /// Fade state per live point: opacity runs 0.8 -> 0 and scale 1 -> 0
    /// over the fade duration
    pub fn fade(&self, now_ms: f64) -> Vec<TrailFade> {
        self.points
            .iter()
            .filter_map(|p| {
                let t = ((now_ms - p.born_ms) / TRAIL_FADE_MS).clamp(0.0, 1.0) as f32;
                if t >= 1.0 {
                    return None;
                }
                Some(TrailFade {
                    id: p.id,
                    pos: p.pos,
                    color: p.color,
                    opacity: TRAIL_START_OPACITY * (1.0 - t),
                    scale: 1.0 - t,
                })
            })
            .collect()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }
}
