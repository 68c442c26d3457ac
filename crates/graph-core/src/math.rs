use std::f32::consts::PI;

/// Smooth interpolation - port of GLSL smoothstep
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `sin(PI * x)`, the building block of every transform.
#[inline]
pub fn sin_pi(x: f32) -> f32 {
    (PI * x).sin()
}

/// `cos(PI * x)`
#[inline]
pub fn cos_pi(x: f32) -> f32 {
    (PI * x).cos()
}

/// Lattice step for a grid spanning [-1, 1] with `resolution` cells per axis.
#[inline]
pub fn grid_step(resolution: u32) -> f32 {
    2.0 / resolution as f32
}

/// Centre of cell `index` along one grid axis: `(index + 0.5) * step - 1`.
#[inline]
pub fn grid_coordinate(index: u32, step: f32) -> f32 {
    (index as f32 + 0.5) * step - 1.0
}
