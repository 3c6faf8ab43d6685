use uom::si::{
    acceleration::meter_per_second_squared,
    angular_velocity::radian_per_second,
    f64::{Acceleration, AngularVelocity, Length},
    length::meter,
};

use crate::{
    FluidsError,
    error::{ensure_finite, ensure_non_negative, ensure_positive},
};

use super::effective_gravity;

/// An open cylindrical tank spinning about its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidRotation {
    pub speed: AngularVelocity,
    /// Upward acceleration (`a_z`), usually zero.
    pub vertical: Acceleration,
    /// Liquid depth at rest.
    pub fluid_height: Length,
    pub tank_height: Length,
    pub radius: Length,
}

/// Paraboloid free surface of a rotating tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingSurface {
    /// Height difference between wall and center, `omega² R² / (2 (g + a_z))`.
    pub paraboloid_height: Length,
    /// Surface height at the wall.
    pub max_height: Length,
    /// Surface height on the axis; negative when the vortex reaches the bottom.
    pub min_height: Length,
    /// True when the surface at the wall rises above the rim.
    pub spills: bool,
    /// Radius of the exposed bottom, if any.
    pub dry_spot_radius: Option<Length>,
}

impl RigidRotation {
    /// Computes the paraboloid surface, spill and dry-spot conditions.
    ///
    /// The liquid volume is conserved, so the surface rises at the wall by
    /// the same amount it drops on the axis.
    ///
    /// # Errors
    ///
    /// Returns [`FluidsError::InvalidInput`] if a dimension is non-physical,
    /// the liquid is deeper than the tank, or `g + a_z` is not positive.
    pub fn analyze(&self) -> Result<RotatingSurface, FluidsError> {
        self.validate()?;

        let omega = self.speed.get::<radian_per_second>();
        let g = effective_gravity(self.vertical)?.get::<meter_per_second_squared>();
        let radius = self.radius.get::<meter>();
        let height = self.fluid_height.get::<meter>();

        let paraboloid = omega.powi(2) * radius.powi(2) / (2.0 * g);
        let z_max = height + 0.5 * paraboloid;
        let z_min = height - 0.5 * paraboloid;

        let dry_spot_radius = (z_min < 0.0)
            .then(|| Length::new::<meter>((2.0 * g * z_min.abs()).sqrt() / omega.abs()));

        Ok(RotatingSurface {
            paraboloid_height: Length::new::<meter>(paraboloid),
            max_height: Length::new::<meter>(z_max),
            min_height: Length::new::<meter>(z_min),
            spills: Length::new::<meter>(z_max) > self.tank_height,
            dry_spot_radius,
        })
    }

    fn validate(&self) -> Result<(), FluidsError> {
        ensure_finite("rotation speed", self.speed.get::<radian_per_second>())?;
        ensure_finite(
            "vertical acceleration",
            self.vertical.get::<meter_per_second_squared>(),
        )?;
        ensure_non_negative("fluid height", self.fluid_height.get::<meter>())?;
        ensure_positive("tank height", self.tank_height.get::<meter>())?;
        ensure_positive("tank radius", self.radius.get::<meter>())?;

        if self.fluid_height > self.tank_height {
            return Err(FluidsError::InvalidInput(
                "fluid height exceeds tank height".into(),
            ));
        }
        Ok(())
    }
}
