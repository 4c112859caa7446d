//! End-to-end properties of the motion engine driven through the public
//! API: pool rebuilds, per-behavior invariants, and the randomized
//! recycle-and-burst cycle of the fountain behaviors.

use glam::Vec2;
use pursuit::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const W: f32 = 1280.0;
const H: f32 = 720.0;

/// Pointer pixel position whose device-space image is `device`.
fn pointer_at_device(device: Vec2) -> PointerState {
    PointerState::at(Vec2::new(
        (device.x + 1.0) * W / 2.0,
        (1.0 - device.y) * H / 2.0,
    ))
}

fn context(behavior: Behavior, pointer: PointerState) -> SimContext {
    SimContext {
        behavior,
        pointer,
        width: W,
        height: H,
    }
}

#[test]
fn absent_pointer_freezes_every_behavior() {
    for behavior in Behavior::ALL {
        let mut pool = ParticlePool::new(40, Vec2::new(0.2, -0.1), 240.0);
        let before: Vec<Particle> = pool.iter().cloned().collect();
        let ctx = context(behavior, PointerState::absent());
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..10 {
            step(&mut pool, &ctx, &mut rng);
        }

        let after: Vec<Particle> = pool.iter().cloned().collect();
        assert_eq!(before, after, "{} ran without a pointer", behavior.label());
    }
}

#[test]
fn chase_pool_converges_on_the_pointer() {
    let target = Vec2::new(0.4, -0.3);
    let mut pool = ParticlePool::new(60, Vec2::new(-1.0, 1.0), 120.0);
    let ctx = context(Behavior::Chase, pointer_at_device(target));
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..2000 {
        step(&mut pool, &ctx, &mut rng);
    }

    for p in pool.iter() {
        assert!(p.position.distance(target) < 1e-2);
    }
}

#[test]
fn orbiting_pool_neither_collapses_nor_escapes() {
    // Sharp orbit holds particles on a ring around the pointer; after
    // settling, nobody should sit on the pointer or drift off screen.
    let target = Vec2::ZERO;
    let mut pool = ParticlePool::new(30, Vec2::new(0.8, 0.8), 200.0);
    let ctx = context(Behavior::SharpOrbit, pointer_at_device(target));
    let mut rng = SmallRng::seed_from_u64(5);

    for _ in 0..2000 {
        step(&mut pool, &ctx, &mut rng);
    }

    for p in pool.iter() {
        let r = p.position.distance(target);
        assert!(r > 0.05, "particle collapsed onto the pointer: r = {}", r);
        assert!(r < 2.0, "particle escaped the surface: r = {}", r);
    }
}

#[test]
fn galaxy_survives_particles_spawned_on_the_pointer() {
    let target = Vec2::new(0.1, 0.1);
    // Rebuild spawns the whole pool exactly at the pointer, the worst case
    // for the magnitude normalization.
    let mut pool = ParticlePool::new(50, target, 180.0);
    let ctx = context(Behavior::Galaxy, pointer_at_device(target));
    let mut rng = SmallRng::seed_from_u64(9);

    for _ in 0..100 {
        step(&mut pool, &ctx, &mut rng);
        for p in pool.iter() {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
    }
}

#[test]
fn fountains_reseed_upward_at_the_pointer() {
    let target = Vec2::new(-0.25, 0.4);
    let pointer = pointer_at_device(target);

    for behavior in [Behavior::Spray, Behavior::Fire, Behavior::Bounce] {
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..50 {
            let mut pool = ParticlePool::new(1, target, 0.0);
            let ctx = context(behavior, pointer);
            step(&mut pool, &ctx, &mut rng);

            let p = pool.iter().next().unwrap();
            assert!(
                p.velocity.y >= 0.0,
                "{} seeded a downward burst",
                behavior.label()
            );
            assert!(p.velocity.x.abs() <= 0.001);
        }
    }
}

#[test]
fn bounce_floor_holds_under_pointer_motion() {
    let mut pool = ParticlePool::new(80, Vec2::new(0.0, 0.5), 60.0);
    let mut rng = SmallRng::seed_from_u64(17);

    // Wiggle the pointer around the upper half of the surface while the
    // pool rains down and bounces.
    for frame in 0..1500u32 {
        let t = frame as f32 * 0.05;
        let device = Vec2::new(0.6 * t.sin(), 0.4 + 0.3 * (t * 0.7).cos());
        let ctx = context(Behavior::Bounce, pointer_at_device(device));
        step(&mut pool, &ctx, &mut rng);

        for p in pool.iter() {
            assert!(p.position.y >= -0.85 - 1e-6);
            assert!(p.position.y <= 2.0 + 1e-6);
        }
    }
}

#[test]
fn rebuild_and_recolor_through_the_pool_api() {
    let mut pool = ParticlePool::new(50, Vec2::ZERO, 180.0);

    pool.rebuild(120, Vec2::new(0.3, 0.3));
    assert_eq!(pool.len(), 120);
    let scales: Vec<f32> = pool.iter().map(|p| p.scale).collect();
    assert!(scales.windows(2).all(|w| w[0] < w[1]));

    // The last particle has the largest scale, hence the dimmest raw
    // color after the brightness-compensation division.
    pool.recolor(0.0);
    let first = pool.iter().next().unwrap().color;
    let last = pool.iter().last().unwrap().color;
    assert!(first.x > last.x);
}
