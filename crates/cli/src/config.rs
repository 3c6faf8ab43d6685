use std::{fs, path::Path};

use hydrocalc_solvers::equation::bisection::Config;
use serde::Deserialize;

use crate::error::CliError;

/// Friction factor solver settings, as read from a TOML file.
///
/// ```toml
/// max_iters = 200
/// residual_tol = 1e-9
/// ```
///
/// Missing keys fall back to the solver defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    pub max_iters: usize,
    pub residual_tol: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            max_iters: config.max_iters(),
            residual_tol: config.residual_tol(),
        }
    }
}

impl SolverSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Validates the settings into a solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if the residual tolerance is not finite and positive.
    pub fn into_config(self) -> Result<Config, CliError> {
        Ok(Config::new(self.max_iters, self.residual_tol)?)
    }
}

/// Loads the solver config from an optional settings file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => SolverSettings::from_file(path)?.into_config(),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_the_solver() {
        let config = SolverSettings::default()
            .into_config()
            .expect("defaults are valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = SolverSettings::from_toml("residual_tol = 1e-9").expect("valid toml");

        assert_eq!(settings.max_iters, 100);
        assert_relative_eq!(settings.residual_tol, 1e-9);
    }

    #[test]
    fn full_file() {
        let config = SolverSettings::from_toml("max_iters = 40\nresidual_tol = 1e-8")
            .and_then(SolverSettings::into_config)
            .expect("valid settings");

        assert_eq!(config.max_iters(), 40);
        assert_relative_eq!(config.residual_tol(), 1e-8);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = SolverSettings::from_toml("tolerance = 1e-6");
        assert!(matches!(result, Err(CliError::ParseConfig(_))));
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let result = SolverSettings::from_toml("residual_tol = 0.0")
            .and_then(SolverSettings::into_config);
        assert!(matches!(result, Err(CliError::SolverConfig(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = load(Some(Path::new("/nonexistent/hydrocalc-solver.toml")));
        match result {
            Err(CliError::ReadConfig { path, .. }) => {
                assert!(path.ends_with("hydrocalc-solver.toml"));
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
