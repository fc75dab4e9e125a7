/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * physics and layout constants for the gravity sandbox. The values are
 * plain data passed into the Simulation and StarField constructors so
 * tests can vary them; the defaults are the canonical toy constants.
 */

// Physics and layout constants for the simulation
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
    pub width: f32,
    pub height: f32,
    // Gravitational constant shared by the integrator and the star field
    pub gravitational_constant: f32,
    // Additive term under the square root of every distance calculation,
    // keeps the force finite at near-zero separation
    pub softening: f32,
    pub star_count: usize,
    // Star pull is this fraction of full-strength gravity
    pub star_pull_factor: f32,
    // Per-body cap on a single star displacement contribution
    pub star_delta_limit: f32,
    // Cap on the summed star displacement
    pub star_offset_limit: f32,
    // Velocity change per second while a movement key is held over a body
    pub nudge_speed: f32,
    pub min_mass: f32,
    pub max_mass: f32,
    // Standard body radius is round(mass / mass_per_radius)
    pub mass_per_radius: f32,
    pub anchor_mass: f32,
    pub anchor_radius: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            gravitational_constant: 0.7,
            softening: 300.0,
            star_count: 5000,
            star_pull_factor: 0.01,
            star_delta_limit: 6.0,
            star_offset_limit: 15.0,
            nudge_speed: 100.0,
            min_mass: 80_000.0,
            max_mass: 400_000.0,
            mass_per_radius: 80_000.0,
            anchor_mass: 15_000_000.0,
            anchor_radius: 10.0,
        }
    }
}
