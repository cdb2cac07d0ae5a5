//! Step and glow operations
//!
//! One step is: integrate, bounce off walls, then soft pairwise repulsion.
//! Order matters - a repulsion write in the same step replaces whatever the
//! wall pass left in the velocity.

use glam::Vec2;
use rand::Rng;

use super::collision::{min_distance, repel, wall_bounce};
use super::state::{ShapeField, Viewport};
use crate::consts::GLOW_THRESHOLD;

impl ShapeField {
    /// Advance every shape by one tick inside the given viewport.
    ///
    /// The viewport may differ from the one used at construction (window
    /// resize); clamping honors the value passed here.
    pub fn step(&mut self, viewport: Viewport) {
        // Integration and wall contact, each axis resolved independently
        for shape in &mut self.shapes {
            let span = viewport.span(shape.size);
            let next = shape.pos + shape.vel;

            let x = wall_bounce(next.x, span.x);
            if x.flipped {
                shape.vel.x = -shape.vel.x;
            }
            let y = wall_bounce(next.y, span.y);
            if y.flipped {
                shape.vel.y = -shape.vel.y;
            }
            shape.pos = Vec2::new(x.coord, y.coord);
        }

        // Pairwise repulsion in ascending (i, j) order. Velocities are
        // written in place, so a shape overlapping several neighbors keeps
        // the write from the last pair visited.
        for i in 0..self.shapes.len() {
            for j in (i + 1)..self.shapes.len() {
                let threshold = min_distance(self.shapes[i].size, self.shapes[j].size);
                let offset = self.shapes[i].pos - self.shapes[j].pos;
                if offset.length() < threshold {
                    let (vel_i, vel_j) = repel(self.shapes[i].pos, self.shapes[j].pos, threshold);
                    self.shapes[i].vel = vel_i;
                    self.shapes[j].vel = vel_j;
                }
            }
        }
    }

    /// Re-roll the glow flag on every shape: 30% chance each, independent
    /// of the previous state and of other shapes.
    pub fn toggle_glow(&mut self) {
        for shape in &mut self.shapes {
            shape.glowing = self.rng.random::<f32>() > GLOW_THRESHOLD;
        }
    }
}
