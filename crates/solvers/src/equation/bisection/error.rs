use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::bracket::BracketError;

/// Reasons a bisection solve fails to produce an estimate.
#[derive(Debug, Error)]
pub enum Error {
    /// The bracket endpoints are unusable.
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// Both endpoint residuals have the same sign.
    #[error(
        "root not bracketed: f({lower}) = {lower_residual}, f({upper}) = {upper_residual}"
    )]
    NotBracketed {
        lower: f64,
        upper: f64,
        lower_residual: f64,
        upper_residual: f64,
    },

    /// A residual was NaN or infinite.
    #[error("non-finite residual {residual} at x = {x}")]
    InvalidDomain { x: f64, residual: f64 },

    #[error("residual problem failed")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model evaluation failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
