//! Solvers for equation problems: finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! Plain closures can be solved through [`ResidualFn`], which adapts any
//! `Fn(f64) -> f64` into a model/problem pair.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//!
//! [`EquationProblem`]: hydrocalc_core::EquationProblem

mod evaluate;
mod residual_fn;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use residual_fn::ResidualFn;

pub mod bisection;
