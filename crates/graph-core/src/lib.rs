//! Animated function graph: a library of closed-form transforms and a grid
//! evaluator that moves a lattice of points through them every frame.

pub mod config;
pub mod error;
pub mod functions;
pub mod grid;
pub mod math;
pub mod point;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use functions::{FunctionLibrary, FunctionName, FunctionSelector};
pub use grid::{Grid, GridState};
pub use point::{Marker, MarkerFactory, PointFactory, PointHandle};
