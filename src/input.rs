/*
 * Input Module
 *
 * This module handles user input for the gravity sandbox:
 * - Left click spawns a randomized standard body at the cursor
 * - Right click spawns a fixed-mass anchor at the cursor
 * - WASD / arrow keys nudge the body under the cursor while held
 * - F3 toggles the debug overlay, Escape quits
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::physics::NudgeInput;

// Mouse pressed event handler; clicks are edge-triggered spawns
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    let cursor = model.viewport.screen_to_sim(app.mouse.position());

    match button {
        MouseButton::Left => {
            model.simulation.spawn_standard(cursor, &mut rand::thread_rng());
        }
        MouseButton::Right => {
            model.simulation.spawn_anchor(cursor);
        }
        _ => {}
    }
}

// Key pressed event handler for one-shot actions
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::F3 => model.show_debug = !model.show_debug,
        Key::Escape => app.quit(),
        _ => {}
    }
}

// Sample the level-triggered movement keys for this frame
pub fn nudge_input(app: &App) -> NudgeInput {
    let down = &app.keys.down;

    NudgeInput {
        left: down.contains(&Key::A) || down.contains(&Key::Left),
        right: down.contains(&Key::D) || down.contains(&Key::Right),
        up: down.contains(&Key::W) || down.contains(&Key::Up),
        down: down.contains(&Key::S) || down.contains(&Key::Down),
    }
}
