use crate::error::{GraphError, Result};
use crate::functions::{FunctionLibrary, FunctionSelector};

/// Smallest supported points-per-axis.
pub const MIN_RESOLUTION: u32 = 10;
/// Largest supported points-per-axis.
pub const MAX_RESOLUTION: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Points per grid axis; the grid holds `resolution * resolution` points.
    pub resolution: u32,
    /// Index into the function library.
    pub function: usize,
    /// Multiplier applied to elapsed time before it reaches a transform.
    pub time_scale: f32,
    /// Seconds a transition between two functions takes.
    pub transition_duration: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            resolution: MIN_RESOLUTION,
            function: 0,
            time_scale: 1.0,
            transition_duration: 1.0,
        }
    }
}

impl GraphConfig {
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_function(mut self, function: usize) -> Self {
        self.function = function;
        self
    }

    /// Check every field, returning the selector for `function` on success.
    pub fn validate(&self, library: &FunctionLibrary) -> Result<FunctionSelector> {
        validate_resolution(self.resolution)?;
        if !self.time_scale.is_finite() {
            return Err(GraphError::InvalidTimeScale(self.time_scale));
        }
        if !self.transition_duration.is_finite() || self.transition_duration < 0.0 {
            return Err(GraphError::InvalidTransitionDuration(self.transition_duration));
        }
        library.select(self.function)
    }
}

pub fn validate_resolution(resolution: u32) -> Result<()> {
    if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        Ok(())
    } else {
        Err(GraphError::InvalidResolution {
            resolution,
            min: MIN_RESOLUTION,
            max: MAX_RESOLUTION,
        })
    }
}
