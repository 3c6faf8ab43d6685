use std::{io, path::PathBuf};

use hydrocalc_fluids::FluidsError;
use hydrocalc_solvers::equation::bisection::{self, ConfigError};
use thiserror::Error;

/// Errors that end a `hydrocalc` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a value was still being prompted for.
    #[error("input ended before a value for {0} was entered")]
    EndOfInput(String),

    /// The solver settings file could not be read.
    #[error("failed to read solver settings from {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The solver settings file is not valid TOML for [`SolverSettings`].
    ///
    /// [`SolverSettings`]: crate::config::SolverSettings
    #[error("invalid solver settings: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// The solver settings were parsed but rejected.
    #[error("invalid solver settings: {0}")]
    SolverConfig(#[from] ConfigError),

    /// A calculation rejected its inputs or failed to solve.
    #[error(transparent)]
    Fluids(#[from] FluidsError),
}

impl CliError {
    /// Explains a friction factor solve failure in terms of the pipe inputs.
    ///
    /// Returns `None` for errors whose message already says enough.
    #[must_use]
    pub fn diagnosis(&self) -> Option<String> {
        let Self::Fluids(FluidsError::FrictionSolve(error)) = self else {
            return None;
        };

        match error {
            bisection::Error::NotBracketed {
                lower,
                upper,
                lower_residual,
                upper_residual,
            } => Some(format!(
                "The Colebrook-White residual does not change sign between f = {lower} \
                 ({lower_residual:+.4e}) and f = {upper} ({upper_residual:+.4e}).\n\
                 The relative roughness is likely outside the range the equation covers."
            )),
            bisection::Error::InvalidDomain { x, residual } => Some(format!(
                "The Colebrook-White residual is {residual} at f = {x}.\n\
                 Check that the Reynolds number and roughness are positive and finite."
            )),
            _ => None,
        }
    }
}
