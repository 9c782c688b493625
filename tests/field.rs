#![cfg(not(target_arch = "wasm32"))]

//! Host-side checks for the particle simulation; the RNG is injected so
//! every spawn is deterministic.

use folio_wasm::particles::{population, Particle, ParticleField};

/// RNG stub cycling through a fixed sequence.
fn cycling(values: &[f64]) -> impl FnMut() -> f64 + '_ {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn population_is_floor_of_area_ratio() {
    assert_eq!(population(1920.0, 1080.0), 138); // 2 073 600 / 15 000 = 138.24
    assert_eq!(population(600.0, 500.0), 20);
    assert_eq!(population(100.0, 100.0), 0);
    assert_eq!(population(0.0, 0.0), 0);
}

#[test]
fn field_spawns_one_particle_per_area_unit() {
    let field = ParticleField::new(600.0, 500.0, &mut cycling(&[0.5]));
    assert_eq!(field.particles().len(), 20);
}

#[test]
fn spawned_particles_land_inside_the_surface() {
    let mut rng = cycling(&[0.0, 0.99, 0.3, 0.7, 0.5]);
    let field = ParticleField::new(1200.0, 800.0, &mut rng);
    for p in field.particles() {
        assert!((0.0..=1200.0).contains(&p.x));
        assert!((0.0..=800.0).contains(&p.y));
        assert!((1.0..3.0).contains(&p.radius));
        assert!((-0.25..0.25).contains(&p.vx));
        assert!((-0.25..0.25).contains(&p.vy));
    }
}

#[test]
fn resize_discards_and_repopulates_for_the_new_area() {
    let mut field = ParticleField::new(600.0, 500.0, &mut cycling(&[0.5]));
    assert_eq!(field.particles().len(), 20);

    field.resize(300.0, 500.0, &mut cycling(&[0.25]));
    assert_eq!(field.particles().len(), 10);
    // Fresh draws, not survivors: every position comes from the new RNG.
    for p in field.particles() {
        assert_eq!(p.x, 75.0);
        assert_eq!(p.y, 125.0);
    }
}

#[test]
fn step_advances_each_particle_by_its_velocity() {
    // vx = 0.2, vy = -0.15; spawns sit mid-surface so nothing reflects.
    let mut field = ParticleField::new(600.0, 500.0, &mut cycling(&[0.5, 0.5, 0.5, 0.9, 0.2]));
    let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
    let velocities: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.vx, p.vy)).collect();
    field.step();
    for ((p, (x0, y0)), (vx, vy)) in field.particles().iter().zip(before).zip(velocities) {
        assert_eq!(p.x, x0 + vx);
        assert_eq!(p.y, y0 + vy);
    }
}

#[test]
fn crossing_a_boundary_inverts_that_velocity_component() {
    let mut p = Particle { x: 99.9, y: 50.0, radius: 2.0, vx: 0.5, vy: 0.1 };
    p.advance(100.0, 100.0);
    assert_eq!(p.vx, -0.5); // sign flipped, magnitude preserved
    assert_eq!(p.vy, 0.1); // other axis untouched

    let mut p = Particle { x: 50.0, y: 0.1, radius: 2.0, vx: 0.2, vy: -0.5 };
    p.advance(100.0, 100.0);
    assert_eq!(p.vy, 0.5);
    assert_eq!(p.vx, 0.2);
}

#[test]
fn corner_crossing_reflects_both_axes_independently() {
    let mut p = Particle { x: 99.9, y: 0.1, radius: 1.0, vx: 0.3, vy: -0.3 };
    p.advance(100.0, 100.0);
    assert_eq!(p.vx, -0.3);
    assert_eq!(p.vy, 0.3);
}

#[test]
fn tiny_surface_holds_no_particles_and_still_steps() {
    let mut field = ParticleField::new(50.0, 50.0, &mut cycling(&[0.5]));
    assert!(field.particles().is_empty());
    field.step();
}
