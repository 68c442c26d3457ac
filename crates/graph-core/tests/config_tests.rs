use graph_core::config::{validate_resolution, GraphConfig, MAX_RESOLUTION, MIN_RESOLUTION};
use graph_core::{FunctionLibrary, GraphError};

#[test]
fn test_config_default_values() {
    let config = GraphConfig::default();

    assert_eq!(config.resolution, 10);
    assert_eq!(config.function, 0);
    assert_eq!(config.time_scale, 1.0);
    assert_eq!(config.transition_duration, 1.0);
}

#[test]
fn test_default_config_is_valid() {
    let lib = FunctionLibrary::standard();
    let selector = GraphConfig::default().validate(&lib).unwrap();
    assert_eq!(selector.index(), 0);
}

#[test]
fn test_resolution_bounds() {
    assert!(validate_resolution(MIN_RESOLUTION).is_ok());
    assert!(validate_resolution(MAX_RESOLUTION).is_ok());
    assert!(validate_resolution(MIN_RESOLUTION - 1).is_err());
    assert!(validate_resolution(MAX_RESOLUTION + 1).is_err());
}

#[test]
fn test_validate_reports_each_field() {
    let lib = FunctionLibrary::standard();

    let config = GraphConfig::default().with_function(lib.len());
    assert!(matches!(config.validate(&lib), Err(GraphError::FunctionOutOfRange { .. })));

    let config = GraphConfig { time_scale: f32::INFINITY, ..GraphConfig::default() };
    assert!(matches!(config.validate(&lib), Err(GraphError::InvalidTimeScale(_))));

    let config = GraphConfig { transition_duration: -0.5, ..GraphConfig::default() };
    assert!(matches!(config.validate(&lib), Err(GraphError::InvalidTransitionDuration(_))));

    // negative time scale plays the animation backwards and is allowed
    let config = GraphConfig { time_scale: -1.0, ..GraphConfig::default() };
    assert!(config.validate(&lib).is_ok());
}

#[test]
fn test_error_messages() {
    let err = validate_resolution(5).unwrap_err();
    assert_eq!(err.to_string(), "resolution 5 outside allowed range 10..=100");
    assert!(err.is_config_error());
    assert!(!GraphError::NotInitialized.is_config_error());
}
