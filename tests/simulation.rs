use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use planetsim::{Body, BodyKind, NudgeInput, Simulation, SimulationParams, StarField};

/// Build a standard body with an explicit mass and zero velocity
fn body_at(x: f32, y: f32, mass: f32) -> Body {
    Body {
        position: vec2(x, y),
        velocity: Vec2::ZERO,
        mass,
        radius: (mass / 80_000.0).round(),
        color: rgb(200, 200, 200),
        kind: BodyKind::Standard,
    }
}

/// Step with the cursor far away from everything and no keys held
fn quiet_step(sim: &mut Simulation, dt: f32) {
    sim.step(dt, vec2(-1e6, -1e6), NudgeInput::NONE);
}

// ==================================================================================
// Spawning
// ==================================================================================

#[test]
fn spawned_bodies_keep_insertion_order() {
    let mut sim = Simulation::new(SimulationParams::default());
    let mut rng = StdRng::seed_from_u64(11);

    sim.spawn_standard(vec2(10.0, 10.0), &mut rng);
    sim.spawn_anchor(vec2(20.0, 20.0));
    sim.spawn_standard(vec2(30.0, 30.0), &mut rng);

    let bodies = sim.bodies();
    assert_eq!(bodies.len(), 3);
    assert_eq!(bodies[0].kind, BodyKind::Standard);
    assert_eq!(bodies[1].kind, BodyKind::Anchor);
    assert_eq!(bodies[2].kind, BodyKind::Standard);
    assert_eq!(bodies[1].position, vec2(20.0, 20.0));
}

#[test]
fn spawn_bounds_hold_over_many_draws() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(params);
    let mut rng = StdRng::seed_from_u64(99);

    for i in 0..500 {
        sim.spawn_standard(vec2(i as f32, 0.0), &mut rng);
    }

    for body in sim.bodies() {
        assert!(body.mass >= 80_000.0 && body.mass <= 400_000.0);
        assert!(body.radius >= 1.0 && body.radius <= 5.0);
    }
}

#[test]
fn anchor_parameters_ignore_spawn_position() {
    let mut sim = Simulation::new(SimulationParams::default());
    sim.spawn_anchor(vec2(0.0, 0.0));
    sim.spawn_anchor(vec2(1234.0, 987.0));

    for body in sim.bodies() {
        assert_eq!(body.mass, 15_000_000.0);
        assert_eq!(body.radius, 10.0);
        assert_eq!(body.color, rgb(255u8, 255, 0));
    }
}

// ==================================================================================
// Integration step
// ==================================================================================

#[test]
fn two_bodies_attract_with_the_stated_magnitude() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(params);
    sim.insert(body_at(100.0, 100.0, 80_000.0));
    sim.insert(body_at(200.0, 100.0, 80_000.0));

    let dt = 1.0 / 60.0;
    quiet_step(&mut sim, dt);

    // Softened distance^2 = 100^2 + 300; each body's velocity change is
    // G * m_other / dist^2 * dt along the line between them
    let expected = 0.7 * 80_000.0 / (100.0f32 * 100.0 + 300.0) * dt;

    let v1 = sim.bodies()[0].velocity;
    let v2 = sim.bodies()[1].velocity;

    assert!(v1.x > 0.0, "body 1 should be pulled toward body 2");
    assert!(v2.x < 0.0, "body 2 should be pulled toward body 1");
    assert!((v1.x - expected).abs() < 1e-4, "v1.x = {}", v1.x);
    assert!((v2.x + expected).abs() < 1e-4, "v2.x = {}", v2.x);
    assert!(v1.y.abs() < 1e-6 && v2.y.abs() < 1e-6);
}

#[test]
fn positions_follow_velocity_after_the_pair_pass() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(params);
    sim.insert(body_at(100.0, 100.0, 80_000.0));
    sim.insert(body_at(200.0, 100.0, 80_000.0));

    let dt = 1.0 / 60.0;
    quiet_step(&mut sim, dt);

    let b = &sim.bodies()[0];
    assert!((b.position.x - (100.0 + b.velocity.x * dt)).abs() < 1e-4);
}

#[test]
fn heavy_anchor_dominates_a_light_body() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(params);
    sim.insert(body_at(100.0, 100.0, 80_000.0));
    sim.spawn_anchor(vec2(400.0, 100.0));

    for _ in 0..30 {
        quiet_step(&mut sim, 1.0 / 60.0);
    }

    // After half a simulated second the light body is falling toward the anchor
    assert!(sim.bodies()[0].position.x > 100.0);
    assert!(sim.bodies()[0].velocity.x > 0.0);
}

#[test]
fn coincident_cluster_survives_many_steps() {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(params);
    for _ in 0..4 {
        sim.insert(body_at(500.0, 500.0, 400_000.0));
    }

    for _ in 0..60 {
        quiet_step(&mut sim, 1.0 / 60.0);
    }

    for body in sim.bodies() {
        assert!(body.position.x.is_finite() && body.position.y.is_finite());
        assert!(body.velocity.x.is_finite() && body.velocity.y.is_finite());
    }
}

// ==================================================================================
// Star field displacement
// ==================================================================================

#[test]
fn star_field_is_immutable_across_queries() {
    let params = SimulationParams::default();
    let mut rng = StdRng::seed_from_u64(5);
    let field = StarField::new(&params, &mut rng);

    let before: Vec<Vec2> = field.stars().to_vec();

    let bodies = [body_at(960.0, 540.0, 400_000.0)];
    for &star in field.stars() {
        let _ = StarField::displacement(star, &bodies, &params);
    }

    assert_eq!(before, field.stars().to_vec());
}

#[test]
fn every_star_displacement_respects_the_aggregate_cap() {
    let params = SimulationParams::default();
    let mut rng = StdRng::seed_from_u64(8);
    let field = StarField::new(&params, &mut rng);

    // A crowded scene of anchors
    let mut sim = Simulation::new(params);
    for i in 0..10 {
        sim.spawn_anchor(vec2(800.0 + 40.0 * i as f32, 500.0));
    }

    for &star in field.stars() {
        let offset = StarField::displacement(star, sim.bodies(), &params);
        assert!(offset.length() <= params.star_offset_limit + 1e-3);
    }
}
