/*
 * Planet Simulation
 *
 * An interactive 2D gravity sandbox. Left click places a randomized
 * massive body, right click places a fixed high-mass anchor; all bodies
 * mutually attract through a softened pairwise gravity law. A field of
 * background stars shifts each frame with the bodies' aggregate pull,
 * giving a parallax effect. Holding WASD or the arrow keys nudges the
 * body under the cursor.
 */

use planetsim::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
