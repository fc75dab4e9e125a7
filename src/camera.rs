/*
 * Viewport Module
 *
 * This module provides coordinate transformations between simulation
 * space and nannou's screen space. The simulation uses a y-down plane
 * with the origin at the top-left corner, [0, width) x [0, height);
 * nannou windows are centered with y pointing up.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Convert a point from simulation space to nannou screen space
    pub fn sim_to_screen(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a point from nannou screen space to simulation space
    pub fn screen_to_sim(&self, point: Vec2) -> Vec2 {
        vec2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}
