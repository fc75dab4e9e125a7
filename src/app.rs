/*
 * Application Module
 *
 * This module defines the main application model and the per-frame
 * update for the gravity sandbox. Each frame is fully sequential:
 * sample input, step the integrator with the frame's delta time, then
 * the view pass renders the displaced star field and all bodies.
 */

use nannou::prelude::*;

use crate::camera::Viewport;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::physics::Simulation;
use crate::renderer;
use crate::starfield::StarField;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub star_field: StarField,
    pub viewport: Viewport,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    // Window creation is the only fallible startup step; failing here is fatal
    app.new_window()
        .title("PlanetSim2D")
        .size(params.width as u32, params.height as u32)
        .msaa_samples(4)
        .view(renderer::view)
        .mouse_pressed(input::mouse_pressed)
        .key_pressed(input::key_pressed)
        .build()
        .unwrap();

    let mut rng = rand::thread_rng();
    let star_field = StarField::new(&params, &mut rng);

    Model {
        simulation: Simulation::new(params),
        star_field,
        viewport: Viewport::new(params.width, params.height),
        debug_info: DebugInfo::default(),
        show_debug: false,
    }
}

// Update the model once per frame
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.body_count = model.simulation.bodies().len();

    let dt = update.since_last.as_secs_f32();
    let cursor = model.viewport.screen_to_sim(app.mouse.position());
    let nudge = input::nudge_input(app);

    model.simulation.step(dt, cursor, nudge);
}
