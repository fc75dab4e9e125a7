/*
 * Body Module
 *
 * This module defines the Body struct, a single gravitating point mass.
 * Bodies come in two kinds: standard bodies with randomized mass, size
 * and color, and anchors with a fixed large mass and fixed appearance.
 * The radius is only used for click hit-testing and drawing; bodies
 * overlap freely and never collide.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::camera::Viewport;
use crate::params::SimulationParams;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BodyKind {
    Standard,
    Anchor,
}

#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub color: Rgb<u8>,
    pub kind: BodyKind,
}

impl Body {
    // Create a standard body with randomized mass, derived radius and a random color
    pub fn standard(position: Vec2, params: &SimulationParams, rng: &mut impl Rng) -> Self {
        let mass = rng.gen_range(params.min_mass as i32..=params.max_mass as i32) as f32;
        let radius = (mass / params.mass_per_radius).round();
        let color = rgb(
            rng.gen_range(0..=255u8),
            rng.gen_range(0..=255u8),
            rng.gen_range(0..=255u8),
        );

        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            radius,
            color,
            kind: BodyKind::Standard,
        }
    }

    // Create an anchor: fixed large mass, small fixed radius, always yellow
    pub fn anchor(position: Vec2, params: &SimulationParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: params.anchor_mass,
            radius: params.anchor_radius,
            color: rgb(255, 255, 0),
            kind: BodyKind::Anchor,
        }
    }

    // Does a point in simulation space fall inside the body's visual radius?
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    // Draw the body as a filled circle
    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        let screen_pos = viewport.sim_to_screen(self.position);

        draw.ellipse()
            .x_y(screen_pos.x, screen_pos.y)
            .radius(self.radius)
            .color(self.color);
    }
}
