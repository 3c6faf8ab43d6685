use std::convert::Infallible;

use hydrocalc_core::{EquationProblem, Model};

/// The Colebrook-White relation for a fixed Reynolds number and roughness.
///
/// Maps a candidate Darcy friction factor `f` to the right-hand side
///
/// `-2 log10(eps / 3.7 + 2.51 / (Re sqrt(f)))`
///
/// which equals `1 / sqrt(f)` at the solution.
///
/// A non-positive Reynolds number or friction factor yields a non-finite
/// output rather than an error, so degenerate inputs surface as an invalid
/// domain in the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookWhite {
    pub reynolds: f64,
    pub relative_roughness: f64,
}

impl ColebrookWhite {
    #[must_use]
    pub fn new(reynolds: f64, relative_roughness: f64) -> Self {
        Self {
            reynolds,
            relative_roughness,
        }
    }
}

impl Model for ColebrookWhite {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, friction_factor: &f64) -> Result<f64, Infallible> {
        let roughness_term = self.relative_roughness / 3.7;
        let viscous_term = 2.51 / (self.reynolds * friction_factor.sqrt());
        Ok(-2.0 * (roughness_term + viscous_term).log10())
    }
}

/// Equation problem whose root is the Colebrook-White friction factor.
///
/// The residual is `1 / sqrt(f) - rhs`, where `rhs` is the output of
/// [`ColebrookWhite`]. It is positive below the root and negative above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrictionFactorProblem;

impl EquationProblem<1> for FrictionFactorProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, friction_factor: &f64, rhs: &f64) -> Result<[f64; 1], Infallible> {
        Ok([friction_factor.sqrt().recip() - rhs])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hydrocalc_solvers::equation::{
        bisection::{self, Config, Error, Status},
        evaluate,
    };

    use crate::pipe::SEARCH_BRACKET;

    #[test]
    fn residual_vanishes_at_known_root() {
        // Independently computed root for Re = 1e5, eps = 1e-4.
        let model = ColebrookWhite::new(1e5, 1e-4);
        let eval = evaluate(&model, &FrictionFactorProblem, [0.018_513_866]).expect("infallible");

        assert!(eval.residuals[0].abs() < 1e-5);
    }

    #[test]
    fn residual_changes_sign_across_search_bracket() {
        let model = ColebrookWhite::new(1e5, 1e-4);
        let [lower, upper] = SEARCH_BRACKET;

        let low = evaluate(&model, &FrictionFactorProblem, [lower]).expect("infallible");
        let high = evaluate(&model, &FrictionFactorProblem, [upper]).expect("infallible");

        assert!(low.residuals[0] > 0.0);
        assert!(high.residuals[0] < 0.0);
    }

    #[test]
    fn solves_smooth_pipe() {
        let model = ColebrookWhite::new(1e5, 0.0);
        let solution = bisection::solve_unobserved(
            &model,
            &FrictionFactorProblem,
            SEARCH_BRACKET,
            &Config::default(),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.018, max_relative = 0.01);
        assert_relative_eq!(solution.snapshot.output, solution.x.sqrt().recip(), epsilon = 1e-6);
    }

    #[test]
    fn zero_reynolds_is_invalid_domain() {
        let model = ColebrookWhite::new(0.0, 1e-4);
        let result = bisection::solve_unobserved(
            &model,
            &FrictionFactorProblem,
            SEARCH_BRACKET,
            &Config::default(),
        );

        assert!(matches!(result, Err(Error::InvalidDomain { .. })));
    }
}
