use thiserror::Error;

use hydrocalc_core::{EquationProblem, Model, Snapshot};

/// A residual evaluation at one point `x`.
///
/// Holds the model input and output that produced the residuals, so a
/// solver can hand back the exact state behind its answer.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Failure while evaluating a residual, tagged by where it happened.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model evaluation failed")]
    Model(#[source] ME),
    #[error("residual problem failed")]
    Problem(#[source] PE),
}

/// Result of [`evaluate`] for a model/problem pair.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Computes the residuals of `problem` at `x`.
///
/// Runs the three steps in order: `x` to model input, model call, then
/// residuals from the input/output pair.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if the input or residuals cannot be
/// built, and [`EvalError::Model`] if the model call fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;

    match problem.residuals(&input, &output) {
        Ok(residuals) => Ok(Evaluation {
            x,
            residuals,
            snapshot: Snapshot::new(input, output),
        }),
        Err(error) => Err(EvalError::Problem(error)),
    }
}
