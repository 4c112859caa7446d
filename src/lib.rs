//! # Pursuit
//!
//! Cursor-chasing particle animations: a pool of point-sprite particles
//! tracks the pointer under one of eight selectable motion behaviors,
//! rendered as alpha-blended textured quads with wgpu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pursuit::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_particle_count(200)
//!         .with_hue(300.0)
//!         .with_behavior(Behavior::Galaxy)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Behaviors
//!
//! A [`Behavior`] is a pure per-frame update rule mapping pointer state
//! and a particle to the particle's next velocity and position. All eight
//! freeze (strict no-op) while the pointer is off the surface:
//!
//! | Index | Behavior | Motion |
//! |-------|----------|--------|
//! | 0 | [`Behavior::Chase`] | straight at the pointer |
//! | 1 | [`Behavior::CircleChase`] | spiral toward the pointer |
//! | 2 | [`Behavior::SloppyOrbit`] | loose orbit with a dead zone |
//! | 3 | [`Behavior::SharpOrbit`] | self-correcting orbit ring |
//! | 4 | [`Behavior::Galaxy`] | constant angular speed at any radius |
//! | 5 | [`Behavior::Spray`] | fountain, recycled off screen |
//! | 6 | [`Behavior::Fire`] | fountain, recycled at the arc apex |
//! | 7 | [`Behavior::Bounce`] | fountain with a damped-restitution floor |
//!
//! ### The pool
//!
//! [`ParticlePool`] holds the particles in index order. Each carries a
//! `scale` of `(i + 1) / (3 * count)`, so speed, bounce elasticity, and
//! sprite size all grow across the population, and a color equal to the
//! shared hue divided by that scale, so the small fast particles glow
//! brightest. Changing the count rebuilds the whole pool; changing the
//! hue recolors it in place.
//!
//! ### The frame loop
//!
//! Once per display refresh the driver sweeps the pool with the active
//! behavior and hands a [`ParticleInstance`] snapshot to the renderer.
//! In the demo binary, digits 1-8 switch behavior, Up/Down resize the
//! pool, and Left/Right shift the hue.

pub mod error;
mod gpu;
pub mod input;
pub mod math;
mod particle;
mod pool;
pub mod rules;
mod shader;
mod simulation;
pub mod textures;
pub mod time;

pub use error::{GpuError, SimulationError, SpriteError};
pub use glam::{Vec2, Vec4};
pub use input::{ControlAction, Input, PointerState};
pub use particle::{Particle, ParticleInstance};
pub use pool::{ParticlePool, DEFAULT_COUNT, MAX_COUNT};
pub use rules::Behavior;
pub use simulation::{step, SimContext, Simulation};
pub use textures::SpriteConfig;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::error::SimulationError;
    pub use crate::input::PointerState;
    pub use crate::particle::Particle;
    pub use crate::pool::ParticlePool;
    pub use crate::rules::Behavior;
    pub use crate::simulation::{step, SimContext, Simulation};
    pub use crate::textures::SpriteConfig;
    pub use crate::{Vec2, Vec4};
}
