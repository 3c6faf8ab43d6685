use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with a validated residual tolerance.
    ///
    /// A midpoint is accepted as the root when `|residual| < residual_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-positive or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let default = Config::default();
        assert_eq!(
            Config::new(default.max_iters(), default.residual_tol()),
            Ok(default)
        );
    }

    #[test]
    fn rejects_bad_tolerances() {
        for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(100, tol), Err(ConfigError::ResidualTol));
        }
    }

    #[test]
    fn zero_iterations_is_allowed() {
        let config = Config::new(0, 1e-3).expect("valid config");
        assert_eq!(config.max_iters(), 0);
    }
}
