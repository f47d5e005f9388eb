use thiserror::Error;

/// Top-level error type for the Quadrix core.
#[derive(Debug, Error)]
pub enum QuadrixError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors raised while validating user-supplied surface parameters.
///
/// These are boundary errors: once a parameter set has been constructed,
/// sampling and analysis cannot fail.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be positive (> 0)")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is not a finite number")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("sample domain is empty: min {min} must be less than max {max}")]
    EmptyDomain { min: f64, max: f64 },

    #[error("grid resolution {resolution} is below the minimum of {min}")]
    ResolutionTooSmall { resolution: usize, min: usize },
}

/// Convenience type alias for results using [`QuadrixError`].
pub type Result<T> = std::result::Result<T, QuadrixError>;
