//! Small math helpers shared by the motion rules and the particle pool.
//!
//! All simulation math happens in normalized device coordinates: the
//! visible surface spans -1 to 1 on each axis with Y pointing up. Pointer
//! events arrive in screen pixels (Y pointing down), so [`to_device`] is
//! the single place that bridges the two spaces.

use glam::{Vec2, Vec3};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Rotate a vector 90 degrees counter-clockwise: `(x, y) -> (-y, x)`.
///
/// Applied to the particle-to-pointer vector this yields the tangential
/// component that produces orbital motion.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Map a screen-pixel coordinate to normalized device coordinates.
///
/// `(0, 0)` (top-left) maps to `(-1, 1)`, `(w, h)` (bottom-right) maps to
/// `(1, -1)`. The vertical axis flips because screen Y grows downward
/// while device Y grows upward.
#[inline]
pub fn to_device(pixel: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        2.0 * pixel.x / width - 1.0,
        2.0 * pixel.y / -height + 1.0,
    )
}

/// Convert HSV to RGB.
///
/// * `h` - hue, 0.0 to 1.0 (wraps: red → yellow → green → cyan → blue → magenta → red)
/// * `s` - saturation, 0.0 (gray) to 1.0 (vivid)
/// * `v` - value, 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}
