/*
 * Renderer Module
 *
 * This module draws one frame of the simulation: the displaced star
 * field first, then every body as a filled circle, then the optional
 * debug text overlay. Stars are single white pixels drawn at their
 * stored position plus the clamped gravitational offset.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::starfield::StarField;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    let params = model.simulation.params();
    let bodies = model.simulation.bodies();

    // Stars render at stored position + aggregate pull, rounded to the
    // nearest pixel
    for &star in model.star_field.stars() {
        let offset = StarField::displacement(star, bodies, params);
        let screen_pos = model.viewport.sim_to_screen(star + offset);

        draw.rect()
            .x_y(screen_pos.x.round(), screen_pos.y.round())
            .w_h(1.0, 1.0)
            .color(WHITE);
    }

    for body in bodies {
        body.draw(&draw, &model.viewport);
    }

    if model.show_debug {
        draw_debug_info(&draw, model);
    }

    draw.to_frame(app, &frame).unwrap();
}

// Draw the FPS / frame time / body count overlay in the top-left corner
fn draw_debug_info(draw: &Draw, model: &Model) {
    let params = model.simulation.params();
    let left = -params.width / 2.0 + 100.0;
    let top = params.height / 2.0;

    draw.text(&format!("FPS: {:.1}", model.debug_info.fps))
        .x_y(left, top - 20.0)
        .color(WHITE)
        .font_size(14);

    draw.text(&format!(
        "Frame time: {:.2} ms",
        model.debug_info.frame_time.as_secs_f64() * 1000.0
    ))
    .x_y(left, top - 40.0)
    .color(WHITE)
    .font_size(14);

    draw.text(&format!("Bodies: {}", model.debug_info.body_count))
        .x_y(left, top - 60.0)
        .color(WHITE)
        .font_size(14);
}
