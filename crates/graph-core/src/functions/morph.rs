//! Timed blends between two transforms.

use glam::Vec3;

use crate::functions::{FunctionSelector, GraphFunction};
use crate::math::smoothstep;

/// Blend `from` into `to` at `(u, v, t)`.
///
/// `progress` is clamped to [0, 1] and eased with a smoothstep, so the
/// points leave `from` and settle into `to` without a velocity jump.
pub fn morph(from: GraphFunction, to: GraphFunction, progress: f32, u: f32, v: f32, t: f32) -> Vec3 {
    let blend = smoothstep(0.0, 1.0, progress);
    from(u, v, t).lerp(to(u, v, t), blend)
}

/// An in-flight switch from one function to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: FunctionSelector,
    pub to: FunctionSelector,
    /// Elapsed time at which the blend started.
    pub start_time: f32,
    /// Blend length in seconds of elapsed time.
    pub duration: f32,
}

impl Transition {
    pub fn new(from: FunctionSelector, to: FunctionSelector, start_time: f32, duration: f32) -> Self {
        Self { from, to, start_time, duration }
    }

    /// Linear progress in [0, 1] at `time`.
    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, time: f32) -> bool {
        self.progress(time) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::surface::{cylinder, sphere};
    use crate::functions::wave::sine;
    use crate::functions::FunctionLibrary;

    #[test]
    fn test_morph_endpoints() {
        let (u, v, t) = (0.3, -0.4, 1.2);
        let a = morph(sine, sphere, 0.0, u, v, t);
        let b = morph(sine, sphere, 1.0, u, v, t);
        assert!((a - sine(u, v, t)).length() < 1e-6, "progress 0 should equal source: {:?}", a);
        assert!((b - sphere(u, v, t)).length() < 1e-6, "progress 1 should equal target: {:?}", b);
    }

    #[test]
    fn test_morph_clamps_progress() {
        let (u, v, t) = (0.1, 0.2, 0.0);
        assert_eq!(morph(sine, cylinder, -3.0, u, v, t), morph(sine, cylinder, 0.0, u, v, t));
        assert_eq!(morph(sine, cylinder, 7.0, u, v, t), morph(sine, cylinder, 1.0, u, v, t));
    }

    #[test]
    fn test_morph_midpoint_is_average() {
        // smoothstep(0.5) == 0.5
        let (u, v, t) = (-0.6, 0.5, 0.75);
        let mid = morph(sine, sphere, 0.5, u, v, t);
        let avg = (sine(u, v, t) + sphere(u, v, t)) * 0.5;
        assert!((mid - avg).length() < 1e-5, "midpoint {:?} != average {:?}", mid, avg);
    }

    #[test]
    fn test_transition_progress() {
        let lib = FunctionLibrary::standard();
        let from = lib.select(0).unwrap();
        let to = lib.select(3).unwrap();
        let tr = Transition::new(from, to, 2.0, 4.0);
        assert_eq!(tr.progress(1.0), 0.0);
        assert_eq!(tr.progress(2.0), 0.0);
        assert!((tr.progress(3.0) - 0.25).abs() < 1e-6);
        assert!(!tr.is_complete(5.9));
        assert!(tr.is_complete(6.0));
        assert!(tr.is_complete(100.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let lib = FunctionLibrary::standard();
        let tr = Transition::new(lib.select(0).unwrap(), lib.select(1).unwrap(), 5.0, 0.0);
        assert!(tr.is_complete(5.0));
        assert!(tr.is_complete(0.0));
    }
}
