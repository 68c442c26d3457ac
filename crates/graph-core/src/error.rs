//! Error types for graph configuration and point allocation.

use thiserror::Error;

/// Boxed error returned by a [`PointFactory`](crate::point::PointFactory).
pub type FactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// Resolution outside the supported lattice sizes.
    #[error("resolution {resolution} outside allowed range {min}..={max}")]
    InvalidResolution { resolution: u32, min: u32, max: u32 },

    /// Function index past the end of the library.
    #[error("function index {index} out of range (library has {len} functions)")]
    FunctionOutOfRange { index: usize, len: usize },

    /// No function with the given name.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("time scale must be finite, got {0}")]
    InvalidTimeScale(f32),

    #[error("transition duration must be finite and non-negative, got {0}")]
    InvalidTransitionDuration(f32),

    /// Tick or transition requested before a successful initialize.
    #[error("grid not initialized - call Grid::initialize() first")]
    NotInitialized,

    /// The point factory failed; the original error is kept as the source.
    #[error("point factory failed: {0}")]
    Factory(#[source] FactoryError),
}

impl GraphError {
    /// True for errors caused by bad configuration values, as opposed to
    /// lifecycle or factory failures.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidResolution { .. }
                | GraphError::FunctionOutOfRange { .. }
                | GraphError::UnknownFunction(_)
                | GraphError::InvalidTimeScale(_)
                | GraphError::InvalidTransitionDuration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
