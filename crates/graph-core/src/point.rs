//! Renderable point handles and the factories that create them.
//!
//! The grid never talks to a renderer directly. A host supplies a
//! [`PointFactory`] whose points implement [`PointHandle`]; the grid sets
//! their scale once and their local position every tick. Parenting the
//! points under a common container is the factory's job and must not
//! offset the local position.

use std::convert::Infallible;

use glam::Vec3;

pub trait PointHandle {
    fn set_local_position(&mut self, position: Vec3);
    fn local_position(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: f32);
    fn local_scale(&self) -> f32;
}

pub trait PointFactory {
    type Point: PointHandle;
    type Error: std::error::Error + Send + Sync + 'static;

    fn create(&mut self) -> Result<Self::Point, Self::Error>;
}

/// Plain CPU-side point: a position and a uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl PointHandle for Marker {
    fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn local_position(&self) -> Vec3 {
        self.position
    }

    fn set_local_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn local_scale(&self) -> f32 {
        self.scale
    }
}

/// Infallible factory producing [`Marker`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerFactory;

impl PointFactory for MarkerFactory {
    type Point = Marker;
    type Error = Infallible;

    fn create(&mut self) -> Result<Marker, Infallible> {
        Ok(Marker::default())
    }
}
