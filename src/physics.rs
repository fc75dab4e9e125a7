/*
 * Physics Module
 *
 * This module owns the body registry and the per-frame integrator.
 * Every frame the Simulation accumulates pairwise softened gravity into
 * each body's velocity (forward Euler), applies the keyboard nudge to
 * bodies under the cursor, and then integrates positions.
 *
 * The force update is deliberately one-sided: each ordered pair (i, j)
 * adds dir * (Fg / mass_i) * dt to body i's velocity, where Fg uses
 * both masses. This is not a Newton's-third-law impulse pair; the toy
 * is tuned around it and the tests pin the exact formula.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::body::Body;
use crate::params::SimulationParams;

// Level-triggered movement key state sampled once per frame
#[derive(Clone, Copy, Debug, Default)]
pub struct NudgeInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl NudgeInput {
    pub const NONE: NudgeInput = NudgeInput {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

// Owns the ordered body list; bodies are only ever appended
#[derive(Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    params: SimulationParams,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            bodies: Vec::new(),
            params,
        }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    // Read-only view of the registry, in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn insert(&mut self, body: Body) {
        self.bodies.push(body);
    }

    // Append a randomized standard body at the given position
    pub fn spawn_standard(&mut self, position: Vec2, rng: &mut impl Rng) {
        let body = Body::standard(position, &self.params, rng);
        self.insert(body);
    }

    // Append a fixed-parameter anchor at the given position
    pub fn spawn_anchor(&mut self, position: Vec2) {
        let body = Body::anchor(position, &self.params);
        self.insert(body);
    }

    // Advance the simulation by dt seconds
    pub fn step(&mut self, dt: f32, cursor: Vec2, nudge: NudgeInput) {
        self.accumulate_gravity(dt);

        let nudge_step = self.params.nudge_speed * dt;
        for body in &mut self.bodies {
            // Nudge a body only while the cursor overlaps it. Simulation
            // space is y-down, so "up" decreases y.
            if nudge.any() && body.contains(cursor) {
                if nudge.left {
                    body.velocity.x -= nudge_step;
                }
                if nudge.right {
                    body.velocity.x += nudge_step;
                }
                if nudge.up {
                    body.velocity.y -= nudge_step;
                }
                if nudge.down {
                    body.velocity.y += nudge_step;
                }
            }

            body.position += body.velocity * dt;
        }
    }

    // Pairwise velocity update over all ordered pairs of distinct bodies.
    // Positions are read-only here, so the result does not depend on the
    // iteration order.
    fn accumulate_gravity(&mut self, dt: f32) {
        let g = self.params.gravitational_constant;
        let softening = self.params.softening;

        for i in 0..self.bodies.len() {
            for j in 0..self.bodies.len() {
                if i == j {
                    continue;
                }

                let offset = self.bodies[j].position - self.bodies[i].position;
                let dist = (offset.x * offset.x + offset.y * offset.y + softening).sqrt();
                let dir = offset.normalize_or_zero();

                let mass_i = self.bodies[i].mass;
                let fg = g * mass_i * self.bodies[j].mass / (dist * dist);

                self.bodies[i].velocity += dir * (fg / mass_i) * dt;
            }
        }
    }
}
