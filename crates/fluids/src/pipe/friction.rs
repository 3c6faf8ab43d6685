use std::fmt;

use hydrocalc_solvers::equation::bisection::{self, Action, Config, Event, Status};
use tracing::{debug, trace, warn};

use crate::{
    FluidsError,
    error::{ensure_non_negative, ensure_positive},
};

use super::colebrook::{ColebrookWhite, FrictionFactorProblem};

/// Range of physically plausible Darcy friction factors searched by the solver.
pub const SEARCH_BRACKET: [f64; 2] = [0.001, 0.15];

/// Reynolds number at which flow stops being treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Reynolds number at which flow is considered fully turbulent.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Flow regime classified by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// `Re < 2300`.
    Laminar,
    /// `2300 <= Re < 4000`, handled with the Colebrook-White relation.
    Transitional,
    /// `Re >= 4000`.
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    #[must_use]
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds < TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }

    /// Returns true if the friction factor needs the Colebrook-White solver.
    #[must_use]
    pub fn uses_colebrook(self) -> bool {
        !matches!(self, Self::Laminar)
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "LAMINAR"),
            Self::Transitional => write!(f, "TRANSITION"),
            Self::Turbulent => write!(f, "TURBULENT"),
        }
    }
}

/// How a friction factor was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrictionMethod {
    /// Closed-form `64 / Re`.
    Laminar,
    /// Bisection on the Colebrook-White residual.
    Colebrook {
        status: Status,
        iters: usize,
        residual: f64,
    },
}

/// A Darcy friction factor and the regime it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub value: f64,
    pub regime: FlowRegime,
    pub method: FrictionMethod,
}

impl FrictionFactor {
    /// Returns true if the value came from a solve that hit its iteration cap.
    #[must_use]
    pub fn is_reduced_precision(&self) -> bool {
        matches!(
            self.method,
            FrictionMethod::Colebrook {
                status: Status::MaxIters,
                ..
            }
        )
    }
}

/// Computes the Darcy friction factor for a pipe flow.
///
/// Laminar flow uses `64 / Re` and never reaches the solver. Transitional
/// and turbulent flow solve the Colebrook-White equation by bisection over
/// [`SEARCH_BRACKET`].
///
/// # Errors
///
/// Returns [`FluidsError::InvalidInput`] for a non-positive Reynolds number
/// or a negative relative roughness, and [`FluidsError::FrictionSolve`] if
/// the Colebrook-White root is not bracketed or the residual is non-finite.
pub fn friction_factor(
    reynolds: f64,
    relative_roughness: f64,
    config: &Config,
) -> Result<FrictionFactor, FluidsError> {
    ensure_positive("Reynolds number", reynolds)?;
    ensure_non_negative("relative roughness", relative_roughness)?;

    let regime = FlowRegime::from_reynolds(reynolds);
    debug!(reynolds, %regime, "selected flow regime");

    if !regime.uses_colebrook() {
        return Ok(FrictionFactor {
            value: 64.0 / reynolds,
            regime,
            method: FrictionMethod::Laminar,
        });
    }

    let model = ColebrookWhite::new(reynolds, relative_roughness);
    let trace_iteration = |event: &Event<'_, f64, f64>| {
        let [lower, upper] = event.bracket;
        trace!(
            iter = event.iter,
            lower,
            upper,
            f = event.x(),
            residual = event.residual(),
            "bisection step"
        );
        None::<Action>
    };
    let solution = bisection::solve(
        &model,
        &FrictionFactorProblem,
        SEARCH_BRACKET,
        config,
        trace_iteration,
    )?;

    if solution.status == Status::MaxIters {
        warn!(
            reynolds,
            relative_roughness,
            residual = solution.residual,
            "friction factor did not reach tolerance"
        );
    }

    Ok(FrictionFactor {
        value: solution.x,
        regime,
        method: FrictionMethod::Colebrook {
            status: solution.status,
            iters: solution.iters,
            residual: solution.residual,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn classifies_regimes_at_boundaries() {
        assert_eq!(FlowRegime::from_reynolds(1500.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2299.999), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(3999.999), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(4000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn laminar_uses_closed_form() {
        let friction = friction_factor(1500.0, 1e-4, &Config::default()).expect("valid input");

        assert_eq!(friction.regime, FlowRegime::Laminar);
        assert_eq!(friction.method, FrictionMethod::Laminar);
        assert_relative_eq!(friction.value, 64.0 / 1500.0);
    }

    #[test]
    fn laminar_ignores_roughness_bracketing() {
        // Roughness this large cannot be bracketed, but laminar flow never solves.
        let friction = friction_factor(1000.0, 0.5, &Config::default()).expect("valid input");
        assert_relative_eq!(friction.value, 0.064);
    }

    #[test]
    fn solver_starts_at_laminar_limit() {
        let friction = friction_factor(2300.0, 0.0, &Config::default()).expect("valid input");

        assert_eq!(friction.regime, FlowRegime::Transitional);
        assert!(matches!(
            friction.method,
            FrictionMethod::Colebrook {
                status: Status::Converged,
                ..
            }
        ));
        assert_relative_eq!(friction.value, 0.047_28, max_relative = 1e-3);
    }

    #[test]
    fn turbulent_at_limit() {
        let friction = friction_factor(4000.0, 1e-3, &Config::default()).expect("valid input");

        assert_eq!(friction.regime, FlowRegime::Turbulent);
        assert!(matches!(friction.method, FrictionMethod::Colebrook { .. }));
        assert_relative_eq!(friction.value, 0.040_91, max_relative = 1e-3);
    }

    #[test]
    fn reports_reduced_precision() {
        let config = Config::new(5, 1e-12).expect("valid config");
        let friction = friction_factor(1e5, 1e-4, &config).expect("valid input");

        assert!(friction.is_reduced_precision());
        match friction.method {
            FrictionMethod::Colebrook { status, iters, .. } => {
                assert_eq!(status, Status::MaxIters);
                assert_eq!(iters, 5);
            }
            FrictionMethod::Laminar => panic!("expected a Colebrook solve"),
        }
    }

    #[test]
    fn rejects_degenerate_inputs() {
        for reynolds in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                friction_factor(reynolds, 1e-4, &Config::default()),
                Err(FluidsError::InvalidInput(_))
            ));
        }
        assert!(matches!(
            friction_factor(1e5, -1e-4, &Config::default()),
            Err(FluidsError::InvalidInput(_))
        ));
    }

    #[test]
    fn very_rough_pipe_is_not_bracketed() {
        let result = friction_factor(1e5, 0.5, &Config::default());
        assert!(matches!(
            result,
            Err(FluidsError::FrictionSolve(bisection::Error::NotBracketed { .. }))
        ));
    }
}
