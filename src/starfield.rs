/*
 * Star Field Module
 *
 * This module owns the fixed background star positions and computes the
 * per-frame parallax displacement each star gets from the bodies'
 * aggregate gravity. Stored star positions never change; only the
 * rendered location moves.
 *
 * Displacement is clamped twice: each per-body contribution is capped
 * so a single nearby body cannot produce a visual spike, and the summed
 * offset is capped so the field stays stable as bodies accumulate.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::body::Body;
use crate::params::SimulationParams;

pub struct StarField {
    stars: Vec<Vec2>,
}

impl StarField {
    // Generate the full batch of star positions up front, uniform integer
    // coordinates within [0, width) x [0, height)
    pub fn new(params: &SimulationParams, rng: &mut impl Rng) -> Self {
        let stars = (0..params.star_count)
            .map(|_| {
                let x = rng.gen_range(0..params.width as i32) as f32;
                let y = rng.gen_range(0..params.height as i32) as f32;
                vec2(x, y)
            })
            .collect();

        Self { stars }
    }

    pub fn stars(&self) -> &[Vec2] {
        &self.stars
    }

    // Aggregate clamped pull of all bodies on one field point
    pub fn displacement(point: Vec2, bodies: &[Body], params: &SimulationParams) -> Vec2 {
        let g = params.gravitational_constant;
        let mut offset = Vec2::ZERO;

        for body in bodies {
            let toward = body.position - point;
            let dist = (toward.x * toward.x + toward.y * toward.y + params.softening).sqrt();
            let dir = toward.normalize_or_zero();

            let fg = params.star_pull_factor * g * body.mass / (dist * dist);
            let delta = clamp_magnitude(dir * fg, params.star_delta_limit);

            offset += delta;
        }

        clamp_magnitude(offset, params.star_offset_limit)
    }
}

// Rescale a vector to exactly `limit` length when it exceeds it
fn clamp_magnitude(v: Vec2, limit: f32) -> Vec2 {
    let len_sq = v.length_squared();
    if len_sq > limit * limit {
        v * (limit / len_sq.sqrt())
    } else {
        v
    }
}
