use std::convert::Infallible;

use hydrocalc_core::{EquationProblem, Model};

/// Adapts a plain residual closure into a model and a scalar equation problem.
///
/// The model maps `x` to `residual(x)` and the problem reports that output
/// as the residual, so `ResidualFn` can be passed as both arguments of an
/// equation solver.
///
/// ```
/// use hydrocalc_solvers::equation::{ResidualFn, bisection};
///
/// let residual = ResidualFn::new(|x: f64| x * x - 2.0);
/// let solution = bisection::solve_unobserved(
///     &residual,
///     &residual,
///     [0.0, 2.0],
///     &bisection::Config::default(),
/// )
/// .unwrap();
///
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResidualFn<F> {
    func: F,
}

impl<F> ResidualFn<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a residual closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Model for ResidualFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.func)(*input))
    }
}

impl<F> EquationProblem<1> for ResidualFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}
