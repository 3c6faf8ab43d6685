use hydrocalc_solvers::equation::bisection;
use thiserror::Error;

/// Errors that may occur when evaluating a fluid-mechanics calculation.
#[derive(Debug, Error)]
pub enum FluidsError {
    /// The input values are invalid or inconsistent.
    ///
    /// Indicates that the inputs are physically invalid or outside the
    /// calculation's valid domain, such as a zero pipe diameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The Colebrook-White equation could not be solved for a friction factor.
    #[error("friction factor solve failed: {0}")]
    FrictionSolve(#[from] bisection::Error),
}

/// Checks that a value is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), FluidsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FluidsError::InvalidInput(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

/// Checks that a value is finite and not negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), FluidsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FluidsError::InvalidInput(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

/// Checks that a value is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), FluidsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FluidsError::InvalidInput(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
