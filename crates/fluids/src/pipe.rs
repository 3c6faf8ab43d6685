//! Pressure drop for fully developed flow in a circular pipe.
//!
//! The friction factor comes from [`friction_factor`], and the losses follow
//! the Darcy-Weisbach relation:
//!
//! - `dp = f (L / D) rho V² / 2`
//! - `h_L = dp / (rho g)`
//! - `P = dp Q`

mod colebrook;
mod friction;

pub use colebrook::{ColebrookWhite, FrictionFactorProblem};
pub use friction::{
    FlowRegime, FrictionFactor, FrictionMethod, LAMINAR_LIMIT, SEARCH_BRACKET, TURBULENT_LIMIT,
    friction_factor,
};

use std::f64::consts::PI;

use hydrocalc_solvers::equation::bisection::Config;
use uom::si::{
    angle::radian,
    dynamic_viscosity::pascal_second,
    f64::{
        Angle, Area, DynamicViscosity, Length, MassDensity, Power, Pressure, Velocity,
        VolumeRate,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    FluidsError,
    error::{ensure_finite, ensure_non_negative, ensure_positive},
    gravity,
};

/// Flow of a liquid through a straight circular pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    pub flow_rate: VolumeRate,
    pub diameter: Length,
    pub length: Length,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    /// Pipe angle from the horizontal, positive when flowing uphill.
    pub inclination: Angle,
}

/// Result of a pipe flow analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlowReport {
    pub area: Area,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub friction: FrictionFactor,
    /// Frictional pressure drop over the pipe length.
    pub pressure_drop: Pressure,
    /// Frictional head loss.
    pub head_loss: Length,
    /// Power needed to overcome the frictional pressure drop.
    pub pumping_power: Power,
    /// Elevation change over the pipe length, `L sin(theta)`.
    ///
    /// Reported separately; it is not part of `head_loss`.
    pub elevation_head: Length,
}

impl PipeFlow {
    /// Returns the pipe cross-sectional area.
    #[must_use]
    pub fn area(&self) -> Area {
        self.diameter * self.diameter * (PI / 4.0)
    }

    /// Returns the mean flow velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.flow_rate / self.area()
    }

    /// Returns the Reynolds number `rho V D / mu`.
    #[must_use]
    pub fn reynolds_number(&self) -> f64 {
        (self.density * self.velocity() * self.diameter / self.viscosity).value
    }

    /// Returns the flow regime, which decides whether roughness matters.
    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        FlowRegime::from_reynolds(self.reynolds_number())
    }

    /// Analyzes the flow for a pipe with the given absolute roughness.
    ///
    /// The roughness is only used outside the laminar regime.
    ///
    /// # Errors
    ///
    /// Returns [`FluidsError::InvalidInput`] if an input is non-physical, or
    /// [`FluidsError::FrictionSolve`] if the friction factor cannot be solved.
    pub fn analyze(
        &self,
        roughness: Length,
        config: &Config,
    ) -> Result<PipeFlowReport, FluidsError> {
        self.validate()?;
        ensure_non_negative("roughness", roughness.get::<meter>())?;

        let area = self.area();
        let velocity = self.velocity();
        let reynolds = self.reynolds_number();
        let relative_roughness = (roughness / self.diameter).value;

        let friction = friction_factor(reynolds, relative_roughness, config)?;

        let dynamic_pressure: Pressure = 0.5 * self.density * velocity * velocity;
        let slenderness = (self.length / self.diameter).value;
        let pressure_drop = dynamic_pressure * (friction.value * slenderness);
        let head_loss: Length = pressure_drop / (self.density * gravity());
        let pumping_power: Power = pressure_drop * self.flow_rate;
        let elevation_head = self.length * self.inclination.get::<radian>().sin();

        Ok(PipeFlowReport {
            area,
            velocity,
            reynolds,
            friction,
            pressure_drop,
            head_loss,
            pumping_power,
            elevation_head,
        })
    }

    fn validate(&self) -> Result<(), FluidsError> {
        ensure_positive("flow rate", self.flow_rate.get::<cubic_meter_per_second>())?;
        ensure_positive("diameter", self.diameter.get::<meter>())?;
        ensure_positive("pipe length", self.length.get::<meter>())?;
        ensure_positive("density", self.density.get::<kilogram_per_cubic_meter>())?;
        ensure_positive("viscosity", self.viscosity.get::<pascal_second>())?;
        ensure_finite("inclination", self.inclination.get::<radian>())
    }
}
