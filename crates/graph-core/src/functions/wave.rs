//! Height-field transforms.
//!
//! Inputs are read as lattice `(x, z)` and passed through unchanged; only the
//! height `y` depends on position and time.

use glam::Vec3;

use crate::math::sin_pi;

/// Single travelling sine along x.
pub fn sine(x: f32, z: f32, t: f32) -> Vec3 {
    Vec3::new(x, sin_pi(x + t), z)
}

/// Diagonal sine travelling along x + z.
pub fn sine_2d(x: f32, z: f32, t: f32) -> Vec3 {
    Vec3::new(x, sin_pi(x + z + t), z)
}

/// Average of one sine along x and one along z.
pub fn cross_sine_2d(x: f32, z: f32, t: f32) -> Vec3 {
    let y = 0.5 * (sin_pi(x + t) + sin_pi(z + t));
    Vec3::new(x, y, z)
}

/// Base sine plus a half-amplitude double-frequency harmonic.
pub fn multi_sine(x: f32, z: f32, t: f32) -> Vec3 {
    let mut y = sin_pi(x + t);
    y += 0.5 * sin_pi(2.0 * (x + 2.0 * t));
    y *= 2.0 / 3.0;
    Vec3::new(x, y, z)
}

/// Slow diagonal wave with two faster axis-aligned harmonics.
pub fn multi_sine_2d(x: f32, z: f32, t: f32) -> Vec3 {
    let mut y = 4.0 * sin_pi(x + z + 0.5 * t);
    y += sin_pi(x + t);
    y += 0.5 * sin_pi(2.0 * (z + 2.0 * t));
    y *= 1.0 / 5.5;
    Vec3::new(x, y, z)
}

/// Feedback wave. The third term samples the running height rather than z;
/// that self-reference is what gives the surface its folded look.
pub fn weird(x: f32, z: f32, t: f32) -> Vec3 {
    let mut y = sin_pi(x + z + t);
    y += 0.5 * sin_pi(2.0 * (x + t));
    y += 0.5 * sin_pi(2.0 * (y + t));
    y *= 0.25;
    Vec3::new(x, y, z)
}

/// Concentric ripple spreading from the origin, damped with distance.
pub fn ripple(x: f32, z: f32, t: f32) -> Vec3 {
    let d = (x * x + z * z).sqrt();
    let y = sin_pi(4.0 * d - t) / (1.0 + 10.0 * d);
    Vec3::new(x, y, z)
}
