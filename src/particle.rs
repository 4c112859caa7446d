//! The per-particle state record and its GPU-side representation.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// A single point-sprite particle.
///
/// Position and velocity live in normalized device coordinates and are
/// rewritten every frame by the active [`Behavior`](crate::rules::Behavior).
/// Size, color, and scale are fixed at pool (re)build time.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in device coordinates, nominally [-1, 1] per axis.
    pub position: Vec2,
    /// Frame-to-frame displacement. Semantics (decay, seeding, gravity)
    /// depend on the active behavior.
    pub velocity: Vec2,
    /// Cosmetic size jitter, seeded from `ln(index + 100000)`.
    pub size: f32,
    /// Per-particle damping/speed/elasticity factor in (0, 1/3], strictly
    /// increasing with pool index. Doubles as the sprite size multiplier.
    pub scale: f32,
    /// RGBA tint. Channels exceed 1.0 for small-scale particles: the pool
    /// divides the shared hue color by `scale` so the smallest sprites
    /// read as the brightest.
    pub color: Vec4,
}

impl Particle {
    /// Create a particle at rest.
    pub fn new(position: Vec2, size: f32, scale: f32, color: Vec4) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            scale,
            color,
        }
    }

    /// The render boundary: everything the GPU needs to place one sprite.
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            scale: self.scale,
            size: self.size,
            color: self.color.to_array(),
        }
    }
}

/// Per-instance vertex data, one entry per particle per frame.
///
/// Layout mirrors the vertex buffer attributes declared in
/// [`gpu`](crate::gpu): two floats of position, scale, size, four of color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub scale: f32,
    pub size: f32,
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(Vec2::new(0.3, -0.2), 11.5, 0.1, Vec4::ONE);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.position, Vec2::new(0.3, -0.2));
    }

    #[test]
    fn test_instance_carries_render_fields() {
        let p = Particle::new(Vec2::new(0.5, 0.25), 11.5, 0.2, Vec4::new(2.0, 1.0, 0.5, 1.0));
        let inst = p.instance();
        assert_eq!(inst.position, [0.5, 0.25]);
        assert_eq!(inst.scale, 0.2);
        assert_eq!(inst.size, 11.5);
        assert_eq!(inst.color, [2.0, 1.0, 0.5, 1.0]);
    }
}
