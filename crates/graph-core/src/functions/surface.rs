//! Parametric surfaces.
//!
//! Inputs are read as `(u, v)` in [-1, 1]. `u` sweeps the full circle
//! around the vertical axis and `v` runs bottom to top, so every surface is
//! built as a ring of radius `r` at height `y`.

use glam::Vec3;

use crate::math::{cos_pi, sin_pi};

/// Point on the ring of radius `r` at angle `PI * u` and height `y`.
#[inline]
fn ring(u: f32, r: f32, y: f32) -> Vec3 {
    Vec3::new(r * sin_pi(u), y, r * cos_pi(u))
}

/// Unit cylinder.
pub fn cylinder(u: f32, v: f32, _t: f32) -> Vec3 {
    ring(u, 1.0, v)
}

/// Cylinder with six radial bulges around its circumference.
pub fn wobbly_cylinder(u: f32, v: f32, _t: f32) -> Vec3 {
    let r = 1.0 + 0.2 * sin_pi(6.0 * u);
    ring(u, r, v)
}

/// Six-pointed star prism whose points spiral up the height and rotate over time.
pub fn twisting_star(u: f32, v: f32, t: f32) -> Vec3 {
    let r = 0.8 + 0.2 * sin_pi(6.0 * u + 2.0 * v + t);
    ring(u, r, v)
}

/// Unit sphere. `v` maps to latitude, so the ring radius shrinks towards the poles.
pub fn sphere(u: f32, v: f32, _t: f32) -> Vec3 {
    let r = cos_pi(0.5 * v);
    ring(u, r, sin_pi(0.5 * v))
}
