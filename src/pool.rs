//! The particle pool: an ordered collection rebuilt as a whole on resize.
//!
//! Changing the particle count never grows or shrinks the pool in place.
//! Every particle is re-seeded so the scale and color gradients stay
//! consistent across the whole population.

use glam::{Vec2, Vec4};

use crate::math::hsv_to_rgb;
use crate::particle::Particle;

/// Default particle count.
pub const DEFAULT_COUNT: usize = 50;

/// Maximum particle count accepted by [`ParticlePool::rebuild`].
pub const MAX_COUNT: usize = 500;

/// An ordered, resizable collection of particles sharing one hue.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    hue: f32,
}

impl ParticlePool {
    /// Create a pool of `count` particles spawned at `spawn_at`.
    ///
    /// `hue` is in degrees, [0, 360).
    pub fn new(count: usize, spawn_at: Vec2, hue: f32) -> Self {
        let mut pool = Self {
            particles: Vec::new(),
            hue,
        };
        pool.rebuild(count, spawn_at);
        pool
    }

    /// Number of particles in the pool.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The shared hue in degrees.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Iterate over the particles in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Iterate mutably, in index order. The frame driver uses this for the
    /// per-frame sweep.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// Replace the whole pool with `count` freshly seeded particles.
    ///
    /// Particle `i` gets scale `(i + 1) / (3 * count)` (strictly increasing
    /// with index), size `ln(i + 100000)` (near-constant jitter), zero
    /// velocity, and position `spawn_at`. The count is clamped to
    /// `1..=MAX_COUNT`.
    pub fn rebuild(&mut self, count: usize, spawn_at: Vec2) {
        let count = count.clamp(1, MAX_COUNT);
        let hue = self.hue;

        self.particles.clear();
        self.particles.extend((0..count).map(|i| {
            let scale = (i + 1) as f32 / (3 * count) as f32;
            let size = ((i + 100000) as f32).ln();
            Particle::new(spawn_at, size, scale, gradient_color(hue, scale))
        }));
    }

    /// Re-derive every particle's color from a new hue, without resizing.
    ///
    /// Each color is the shared hue converted to RGB and divided by the
    /// particle's scale, so smaller particles come out brighter. Alpha is
    /// fixed at 1.
    pub fn recolor(&mut self, hue: f32) {
        self.hue = hue.rem_euclid(360.0);
        let hue = self.hue;
        for p in &mut self.particles {
            p.color = gradient_color(hue, p.scale);
        }
    }
}

fn gradient_color(hue_degrees: f32, scale: f32) -> Vec4 {
    let rgb = hsv_to_rgb(hue_degrees / 360.0, 1.0, 1.0) / scale;
    rgb.extend(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_exact_count() {
        let mut pool = ParticlePool::new(50, Vec2::ZERO, 180.0);
        assert_eq!(pool.len(), 50);
        pool.rebuild(7, Vec2::ZERO);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn test_rebuild_clamps_count() {
        let mut pool = ParticlePool::new(0, Vec2::ZERO, 0.0);
        assert_eq!(pool.len(), 1);
        pool.rebuild(100_000, Vec2::ZERO);
        assert_eq!(pool.len(), MAX_COUNT);
    }

    #[test]
    fn test_scale_strictly_increasing() {
        let pool = ParticlePool::new(100, Vec2::ZERO, 300.0);
        let scales: Vec<f32> = pool.iter().map(|p| p.scale).collect();
        for pair in scales.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!((scales[99] - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rebuild_seeds_at_spawn_point_with_zero_velocity() {
        let spawn = Vec2::new(0.4, -0.6);
        let pool = ParticlePool::new(20, spawn, 90.0);
        for p in pool.iter() {
            assert_eq!(p.position, spawn);
            assert_eq!(p.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn test_brightness_compensation_gradient() {
        // Smaller scale divides the hue color by a smaller number, so the
        // first particle carries the largest raw channel values.
        let pool = ParticlePool::new(50, Vec2::ZERO, 0.0);
        let first = pool.iter().next().unwrap();
        let last = pool.iter().last().unwrap();
        assert!(first.color.x > last.color.x);
        assert_eq!(first.color.w, 1.0);
        assert_eq!(last.color.w, 1.0);
    }

    #[test]
    fn test_recolor_keeps_count_and_wraps_hue() {
        let mut pool = ParticlePool::new(30, Vec2::ZERO, 180.0);
        let before: Vec<f32> = pool.iter().map(|p| p.scale).collect();
        pool.recolor(480.0);
        assert_eq!(pool.hue(), 120.0);
        assert_eq!(pool.len(), 30);
        let after: Vec<f32> = pool.iter().map(|p| p.scale).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_recolor_matches_hue() {
        let mut pool = ParticlePool::new(3, Vec2::ZERO, 180.0);
        pool.recolor(120.0);
        // Pure green hue: red and blue channels are zero regardless of the
        // per-particle brightness division.
        for p in pool.iter() {
            assert!(p.color.x.abs() < 1e-5);
            assert!(p.color.y > 0.0);
            assert!(p.color.z.abs() < 1e-5);
        }
    }
}
