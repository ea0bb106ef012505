// Host-side tests for the effect simulations.
// The main crate is wasm-only, so we include the pure-Rust modules directly;
// only the `step`/layout logic is exercised, painting needs a real canvas.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effect {
    include!("../src/effect.rs");
}
mod drift {
    include!("../src/effects/drift.rs");
}
mod lattice {
    include!("../src/effects/lattice.rs");
}
mod links {
    include!("../src/effects/links.rs");
}
mod orbits {
    include!("../src/effects/orbits.rs");
}
mod waves {
    include!("../src/effects/waves.rs");
}

use constants::*;
use effect::{falloff, Effect};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

#[test]
fn falloff_is_one_at_centre_and_zero_at_radius() {
    assert_eq!(falloff(0.0, 100.0), 1.0);
    assert!((falloff(50.0, 100.0) - 0.5).abs() < 1e-6);
    assert_eq!(falloff(100.0, 100.0), 0.0);
    assert_eq!(falloff(150.0, 100.0), 0.0);
}

#[test]
fn lattice_entity_count_matches_spacing_grid() {
    let mut fx = lattice::Lattice::new();
    fx.rebuild(Vec2::new(800.0, 600.0));
    assert_eq!(fx.cols, 16);
    assert_eq!(fx.rows, 12);
    assert_eq!(fx.nodes.len(), 192);
}

#[test]
fn lattice_resize_regenerates_to_the_new_dimensions() {
    let mut fx = lattice::Lattice::new();
    fx.setup(Vec2::new(800.0, 600.0));
    assert_eq!(fx.nodes.len(), 192);

    fx.resize(Vec2::new(401.0, 301.0)); // partial cells round up
    assert_eq!(fx.cols, 9);
    assert_eq!(fx.rows, 7);
    assert_eq!(fx.nodes.len(), 63);
    assert!(fx.nodes.iter().all(|n| n.offset == Vec2::ZERO));
}

#[test]
fn lattice_homes_cover_the_surface() {
    let size = Vec2::new(800.0, 600.0);
    let mut fx = lattice::Lattice::new();
    fx.rebuild(size);
    for n in &fx.nodes {
        assert!(n.home.x > 0.0 && n.home.x < size.x);
        assert!(n.home.y > 0.0 && n.home.y < size.y);
    }
}

#[test]
fn parked_pointer_exerts_no_force_anywhere() {
    let size = Vec2::new(800.0, 600.0);

    let mut drift = drift::Drift::new(11);
    drift.setup(size);
    let vels: Vec<Vec2> = drift.motes.iter().map(|m| m.vel).collect();
    for _ in 0..120 {
        drift.step(size, POINTER_PARKED, DT);
    }
    let after: Vec<Vec2> = drift.motes.iter().map(|m| m.vel).collect();
    assert_eq!(vels, after);

    let mut lattice = lattice::Lattice::new();
    lattice.setup(size);
    for _ in 0..120 {
        lattice.step(POINTER_PARKED, DT);
    }
    assert!(lattice.nodes.iter().all(|n| n.offset == Vec2::ZERO));

    let mut links = links::Links::new(12);
    links.setup(size);
    let speeds: Vec<f32> = links.nodes.iter().map(|n| n.vel.length()).collect();
    for _ in 0..120 {
        links.step(size, POINTER_PARKED, DT);
    }
    for (before, node) in speeds.iter().zip(&links.nodes) {
        assert!((node.vel.length() - before).abs() < 1e-3);
    }

    let mut orbits = orbits::Orbits::new(13);
    orbits.setup(size);
    for _ in 0..120 {
        orbits.step(POINTER_PARKED, DT);
    }
    assert!(orbits.shapes.iter().all(|s| s.drift == Vec2::ZERO));
}

#[test]
fn drift_pull_bends_velocity_toward_the_pointer() {
    let size = Vec2::new(800.0, 600.0);
    let mut fx = drift::Drift::new(21);
    fx.setup(size);
    fx.motes[0].pos = Vec2::new(400.0, 300.0);
    fx.motes[0].vel = Vec2::ZERO;

    let pointer = Vec2::new(450.0, 300.0); // 50px away, inside DRIFT_PULL_RADIUS
    fx.step(size, pointer, DT);
    assert!(fx.motes[0].vel.x > 0.0);
    assert_eq!(fx.motes[0].vel.y, 0.0);
}

#[test]
fn lattice_node_is_pushed_away_from_the_pointer() {
    let mut fx = lattice::Lattice::new();
    fx.rebuild(Vec2::new(200.0, 200.0));
    let home = fx.nodes[0].home;

    let pointer = home + Vec2::new(10.0, 0.0);
    fx.step(pointer, DT);
    assert!(fx.nodes[0].offset.x < 0.0); // away from the pointer
    assert!(fx.nodes[0].offset.y.abs() < 1e-6);

    // released nodes ease back toward home
    let displaced = fx.nodes[0].offset.x;
    for _ in 0..240 {
        fx.step(POINTER_PARKED, DT);
    }
    assert!(fx.nodes[0].offset.x.abs() < displaced.abs() * 0.01);
}

#[test]
fn links_nodes_steer_away_from_the_pointer() {
    let mut fx = links::Links::new(31);
    fx.nodes = vec![links::LinkNode {
        pos: Vec2::new(100.0, 100.0),
        vel: Vec2::ZERO,
    }];
    let pointer = Vec2::new(110.0, 100.0);
    fx.step(Vec2::new(400.0, 300.0), pointer, DT);
    assert!(fx.nodes[0].vel.x < 0.0);
}

#[test]
fn links_speed_is_capped_under_avoidance() {
    let mut fx = links::Links::new(32);
    fx.nodes = vec![links::LinkNode {
        pos: Vec2::new(100.0, 100.0),
        vel: Vec2::new(-LINK_SPEED_CAP, 0.0),
    }];
    let pointer = Vec2::new(101.0, 100.0);
    for _ in 0..600 {
        fx.step(Vec2::new(4000.0, 4000.0), pointer, DT);
    }
    assert!(fx.nodes[0].vel.length() <= LINK_SPEED_CAP + 1e-3);
}

#[test]
fn links_nodes_stay_inside_the_surface() {
    let size = Vec2::new(400.0, 300.0);
    let mut fx = links::Links::new(33);
    fx.setup(size);
    for _ in 0..600 {
        fx.step(size, POINTER_PARKED, DT);
    }
    for n in &fx.nodes {
        assert!(n.pos.x >= 0.0 && n.pos.x <= size.x);
        assert!(n.pos.y >= 0.0 && n.pos.y <= size.y);
    }
}

#[test]
fn orbit_shapes_keep_spinning() {
    let mut fx = orbits::Orbits::new(41);
    fx.shapes = vec![orbits::OrbitShape {
        anchor: Vec2::new(50.0, 50.0),
        drift: Vec2::ZERO,
        angle: 0.0,
        spin: 1.0,
        sides: 5,
        size: 12.0,
    }];
    fx.step(POINTER_PARKED, 0.5);
    assert!((fx.shapes[0].angle - 0.5).abs() < 1e-6);
}

#[test]
fn orbit_parallax_follows_a_near_pointer() {
    let mut fx = orbits::Orbits::new(42);
    fx.shapes = vec![orbits::OrbitShape {
        anchor: Vec2::new(100.0, 100.0),
        drift: Vec2::ZERO,
        angle: 0.0,
        spin: 0.0,
        sides: 3,
        size: 10.0,
    }];
    let pointer = Vec2::new(150.0, 100.0);
    for _ in 0..600 {
        fx.step(pointer, DT);
    }
    // converges to the configured fraction of the pointer offset
    let expected = (pointer - Vec2::new(100.0, 100.0)) * ORBIT_PULL_FRACTION;
    assert!((fx.shapes[0].drift - expected).length() < 0.1);
}

#[test]
fn wave_phase_advances_with_time_and_setup_resets_it() {
    let mut fx = waves::Waves::new();
    fx.step(0.5);
    fx.step(0.25);
    assert!((fx.phase - 0.75).abs() < 1e-6);
    fx.setup(Vec2::new(800.0, 600.0));
    assert_eq!(fx.phase, 0.0);
}

#[test]
fn wave_midline_holds_at_zero_phase_origin() {
    // sin(0) = 0 for every layer at x = 0, phase = 0
    for layer in 0..WAVE_LAYER_AMPLITUDES.len() {
        assert!((waves::wave_y(layer, 0.0, 0.0, 300.0) - 300.0).abs() < 1e-6);
    }
}

#[test]
fn wave_amplitude_bounds_the_curve() {
    for layer in 0..WAVE_LAYER_AMPLITUDES.len() {
        let mut x = 0.0;
        while x < 800.0 {
            let y = waves::wave_y(layer, x, 1.7, 300.0);
            assert!((y - 300.0).abs() <= WAVE_LAYER_AMPLITUDES[layer] + 1e-4);
            x += 13.0;
        }
    }
}

#[test]
fn seeded_effects_are_reproducible() {
    let size = Vec2::new(800.0, 600.0);
    let mut a = drift::Drift::new(7);
    let mut b = drift::Drift::new(7);
    a.setup(size);
    b.setup(size);
    for (ma, mb) in a.motes.iter().zip(&b.motes) {
        assert_eq!(ma.pos, mb.pos);
        assert_eq!(ma.vel, mb.vel);
    }
}
