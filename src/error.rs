use thiserror::Error;

use crate::profile::BuilderState;

/// Top-level error type for gear profile generation.
#[derive(Debug, Error)]
pub enum GearError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    State(#[from] InvalidStateError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Mathematically undefined operations in the gear geometry.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("radius {target} lies inside the base circle (radius {base}); the involute is undefined there")]
    InsideBaseCircle { target: f64, base: f64 },

    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Profile command emitted in a state that does not accept it.
#[derive(Debug, Error)]
pub enum InvalidStateError {
    #[error("`{command}` is not allowed while the profile is {state:?}")]
    Command {
        command: &'static str,
        state: BuilderState,
    },

    #[error("spline must pass through at least one point")]
    EmptySpline,
}

/// Gear parameters outside their valid range.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be finite")]
    NotFinite { parameter: &'static str },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`GearError`].
pub type Result<T> = std::result::Result<T, GearError>;
