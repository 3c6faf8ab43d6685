//! Bisection for scalar equations on a bracketed interval.
//!
//! # Algorithm
//!
//! Both endpoints are evaluated first. An endpoint whose residual is exactly
//! zero is returned immediately. Otherwise the residuals must have opposite
//! signs, and the solver repeatedly evaluates the midpoint, keeping the half
//! of the bracket across which the residual still changes sign.
//!
//! A midpoint is accepted once `|residual| < residual_tol`. If the iteration
//! limit is reached first, the last midpoint is returned with
//! [`Status::MaxIters`] so callers can still use it as an estimate.
//!
//! Only the residual sign drives the bracket update, so the worst-case
//! iteration count depends on the bracket width and not on the shape of the
//! residual.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt with that midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use hydrocalc_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, ResidualFn, evaluate};

use bracket::{Bounds, Bracket, Sign};

/// Finds a root of the equation using the bisection method.
///
/// Observers see each midpoint evaluation and the bracket it came from.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the residuals at the
/// endpoints do not change sign, a residual is non-finite, or the model or
/// problem returns an error during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [lower, upper] = bounds.as_array();

    let lower_eval = evaluate(model, problem, [lower])?;
    let lower_residual = finite_residual(&lower_eval)?;
    #[allow(clippy::float_cmp)]
    if lower_residual == 0.0 {
        return Ok(Solution::from_eval(lower_eval, Status::Converged, 0));
    }

    let upper_eval = evaluate(model, problem, [upper])?;
    let upper_residual = finite_residual(&upper_eval)?;
    #[allow(clippy::float_cmp)]
    if upper_residual == 0.0 {
        return Ok(Solution::from_eval(upper_eval, Status::Converged, 0));
    }

    let lower_sign = Sign::of(lower_residual);
    if lower_sign == Sign::of(upper_residual) {
        return Err(Error::NotBracketed {
            lower,
            upper,
            lower_residual,
            upper_residual,
        });
    }

    let mut bracket = Bracket::new(bounds, lower_sign);
    let mut last = None;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_eval = evaluate(model, problem, [mid])?;
        let mid_residual = finite_residual(&mid_eval)?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::from_eval(
                        mid_eval,
                        Status::StoppedByObserver,
                        iter,
                    ));
                }
            }
        }

        if mid_residual.abs() < config.residual_tol() {
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        bracket.shrink(mid, Sign::of(mid_residual));
        last = Some(mid_eval);
    }

    // With no midpoint evaluated, fall back to the better endpoint.
    let estimate = match last {
        Some(eval) => eval,
        None if lower_residual.abs() <= upper_residual.abs() => lower_eval,
        None => upper_eval,
    };

    Ok(Solution::from_eval(
        estimate,
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the residuals at the
/// endpoints do not change sign, a residual is non-finite, or the model or
/// problem returns an error during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Runs bisection on a plain residual closure.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the residuals at the
/// endpoints do not change sign, or a residual is non-finite.
pub fn solve_fn<F>(
    residual: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    let residual = ResidualFn::new(residual);
    solve_unobserved(&residual, &residual, bracket, config)
}

/// Returns the residual of an evaluation, rejecting NaN and infinities.
fn finite_residual<I, O>(eval: &Evaluation<I, O, 1>) -> Result<f64, Error> {
    let residual = eval.residuals[0];
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::InvalidDomain {
            x: eval.x[0],
            residual,
        })
    }
}
