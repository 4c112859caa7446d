//! Motion behaviors: the per-frame update rules.
//!
//! A [`Behavior`] maps pointer state and a particle's current state to the
//! particle's next velocity and position. Integration is explicit Euler
//! with a timestep of one frame: velocity here means displacement per
//! frame, in device coordinates.
//!
//! Every behavior is a strict no-op while the pointer is absent; the
//! simulation freezes until the cursor re-enters the surface.
//!
//! The orbital behaviors mix two coordinate spaces on purpose: the
//! particle-to-pointer vector lives in device units while the pointer
//! drift term is raw pixels divided by 1000. The constants were tuned
//! against that mix, so they are kept literal rather than unified.

use glam::Vec2;
use rand::Rng;

use crate::input::PointerState;
use crate::math::{distance, perp};
use crate::particle::Particle;

/// Floor height for [`Behavior::Bounce`], in device coordinates.
pub const FLOOR_Y: f32 = -0.85;

/// A particle motion rule, selected globally and applied to every particle
/// once per frame.
///
/// Variants are indexed 0-7 in declaration order, matching the selector
/// values an embedding UI feeds into [`Behavior::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Velocity points straight at the pointer, scaled by the particle's
    /// `scale`. Exponential convergence; larger particles arrive first.
    Chase,

    /// Chase plus the same vector rotated 90 degrees, so particles close
    /// in along a spiral.
    CircleChase,

    /// Loose orbit. The pull toward the pointer cuts out inside a dead
    /// zone of radius 0.2, leaving only the tangential term and the
    /// pointer drift, so the swarm circles without collapsing to a point.
    SloppyOrbit,

    /// Self-correcting orbit ring. The radial pull is rescaled by distance
    /// band: reversed when too close, zeroed on the ring, damped just
    /// outside it, amplified when far away.
    SharpOrbit,

    /// Tangential speed is normalized by distance from the pointer, giving
    /// near-constant angular velocity at every radius, like a galaxy
    /// rotation curve.
    Galaxy,

    /// Particles burst upward from the pointer, fall under gravity, and
    /// teleport back to the pointer once they drift off screen.
    Spray,

    /// Like [`Behavior::Spray`], but particles recycle at the apex of
    /// their arc (velocity.y dropping below 0.001) instead of off screen,
    /// which keeps the plume short and flame-like.
    Fire,

    /// Spray with a floor at y = -0.85. Floor hits reflect the vertical
    /// velocity damped by `scale + 0.5`, so every bounce is lower than the
    /// last; a particle resting on the floor returns to the pointer.
    Bounce,
}

impl Behavior {
    /// All behaviors in selector order.
    pub const ALL: [Behavior; 8] = [
        Behavior::Chase,
        Behavior::CircleChase,
        Behavior::SloppyOrbit,
        Behavior::SharpOrbit,
        Behavior::Galaxy,
        Behavior::Spray,
        Behavior::Fire,
        Behavior::Bounce,
    ];

    /// Selector index, 0-7.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    /// Behavior for a selector index, if in range.
    pub fn from_index(index: usize) -> Option<Behavior> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Behavior::Chase => "chase",
            Behavior::CircleChase => "circle chase",
            Behavior::SloppyOrbit => "sloppy orbit",
            Behavior::SharpOrbit => "sharp orbit",
            Behavior::Galaxy => "galaxy",
            Behavior::Spray => "spray",
            Behavior::Fire => "fire",
            Behavior::Bounce => "bounce",
        }
    }

    /// Advance one particle by one frame.
    ///
    /// `width`/`height` are the surface pixel dimensions used to map the
    /// pointer into device coordinates. `rng` feeds the burst re-seeding
    /// of Spray, Fire, and Bounce; inject a seeded generator for
    /// deterministic updates.
    pub fn apply<R: Rng>(
        self,
        pointer: &PointerState,
        width: f32,
        height: f32,
        p: &mut Particle,
        rng: &mut R,
    ) {
        let Some(mouse) = pointer.device_position(width, height) else {
            return;
        };
        // Pixel-space pointer movement, vertical axis flipped to match
        // device coordinates.
        let drift = Vec2::new(pointer.delta().x, -pointer.delta().y) / 1000.0;

        match self {
            Behavior::Chase => chase(mouse, p),
            Behavior::CircleChase => circle_chase(mouse, p),
            Behavior::SloppyOrbit => sloppy_orbit(mouse, drift, p),
            Behavior::SharpOrbit => sharp_orbit(mouse, drift, p),
            Behavior::Galaxy => galaxy(mouse, drift, p),
            Behavior::Spray => spray(mouse, p, rng),
            Behavior::Fire => fire(mouse, p, rng),
            Behavior::Bounce => bounce(mouse, p, rng),
        }
    }
}

fn integrate(p: &mut Particle) {
    p.position += p.velocity;
}

fn chase(mouse: Vec2, p: &mut Particle) {
    p.velocity = (mouse - p.position) * p.scale;
    integrate(p);
}

fn circle_chase(mouse: Vec2, p: &mut Particle) {
    let center = mouse - p.position;
    p.velocity = (center + perp(center)) * p.scale;
    integrate(p);
}

fn sloppy_orbit(mouse: Vec2, drift: Vec2, p: &mut Particle) {
    let mut center = mouse - p.position;
    // The tangential term keeps the full vector even inside the dead zone.
    let tangent = perp(center);

    if center.length() < 0.2 {
        center = Vec2::ZERO;
    }

    p.velocity = drift + tangent * p.scale * 0.2 + center * 0.02;
    integrate(p);
}

fn sharp_orbit(mouse: Vec2, drift: Vec2, p: &mut Particle) {
    let center = mouse - p.position;
    let tangent = perp(center);
    let mag = center.length();

    let radial = if mag < 0.2 && mag > 0.15 {
        // On the ring: no radial motion.
        Vec2::ZERO
    } else if mag <= 0.15 {
        // Too close: push outward.
        center * -0.5
    } else if mag > 0.2 && mag < 0.25 {
        // Approaching the ring: ease in.
        center * 0.1
    } else {
        // Far away: correct quickly.
        center * 1.5
    };

    p.velocity = drift + tangent * (p.scale + 0.1) * 0.2 + radial * 0.02;
    integrate(p);
}

fn galaxy(mouse: Vec2, drift: Vec2, p: &mut Particle) {
    let center = mouse - p.position;
    // Epsilon floor: a particle sitting exactly on the pointer must not
    // divide by zero.
    let mag = center.length().max(0.001);
    let tangent = perp(center) / mag;

    p.velocity = drift + tangent * p.scale * 0.1 + center / p.scale * 0.001;
    integrate(p);
}

/// Fresh burst velocity: sideways jitter in [-0.001, 0.001), upward speed
/// in [0, 0.01).
fn burst_velocity<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(
        0.001 * (rng.gen::<f32>() * 2.0 - 1.0),
        0.01 * rng.gen::<f32>(),
    )
}

fn spray<R: Rng>(mouse: Vec2, p: &mut Particle, rng: &mut R) {
    // Off screen: recycle to the pointer.
    if p.position.length() > std::f32::consts::SQRT_2 {
        p.position = mouse;
    }

    if distance(mouse, p.position) < 0.01 {
        p.velocity = burst_velocity(rng);
    } else {
        p.velocity.y += -0.0002;
    }
    integrate(p);
}

fn fire<R: Rng>(mouse: Vec2, p: &mut Particle, rng: &mut R) {
    // Near the apex of the arc: recycle to the pointer.
    if p.velocity.y < 0.001 {
        p.position = mouse;
    }

    if distance(mouse, p.position) < 0.01 {
        p.velocity = burst_velocity(rng);
    } else {
        p.velocity.y += -0.0002;
    }
    integrate(p);
}

fn bounce<R: Rng>(mouse: Vec2, p: &mut Particle, rng: &mut R) {
    // Resting on the floor with the bounce energy spent: recycle.
    if p.position.y <= FLOOR_Y && p.velocity.y.abs() < 0.01 {
        p.position = mouse;
    }

    if distance(mouse, p.position) < 0.01 {
        p.velocity = burst_velocity(rng);
    } else if p.position.y <= FLOOR_Y {
        // Reflect and damp; scale + 0.5 < 1 keeps each bounce lower than
        // the previous one.
        p.velocity.y = -(p.scale + 0.5) * p.velocity.y;
    } else {
        p.velocity.y += -0.001;
    }
    integrate(p);

    // Hard floor invariant, independent of which branch ran.
    p.position.y = p.position.y.clamp(FLOOR_Y, 2.0);
}
