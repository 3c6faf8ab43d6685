use uom::si::{
    acceleration::meter_per_second_squared,
    angle::radian,
    f64::{Acceleration, Angle, Length, MassDensity, Pressure},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
};

use crate::{
    FluidsError,
    error::{ensure_finite, ensure_non_negative, ensure_positive},
};

use super::effective_gravity;

/// An open rectangular tank accelerating in a straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAcceleration {
    /// Acceleration along the tank length (`a_x`).
    pub horizontal: Acceleration,
    /// Upward acceleration (`a_z`).
    pub vertical: Acceleration,
    /// Liquid depth at rest.
    pub fluid_height: Length,
    pub tank_height: Length,
    /// Tank length in the direction of motion.
    pub tank_length: Length,
    /// Tank width perpendicular to the motion.
    pub tank_width: Length,
    pub density: MassDensity,
}

/// Whether the tilted surface stays inside the tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearOutcome {
    /// The surface stays below the rim.
    Contained {
        /// Static pressure at the bottom, `rho (g + a_z) h`.
        bottom_pressure: Pressure,
    },
    /// The surface rises past the rim at the trailing wall.
    Overflow {
        /// Horizontal distance from the tank center to where the surface meets the rim.
        rim_distance: Length,
    },
}

/// Free-surface shape for a linearly accelerating tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSloshing {
    /// Surface angle from the horizontal, `atan(a_x / (g + a_z))`.
    pub surface_angle: Angle,
    /// Rise of the surface at the trailing wall, `(L / 2) tan(theta)`.
    pub rise: Length,
    /// Largest `a_x` the tank tolerates before spilling.
    pub max_horizontal_acceleration: Acceleration,
    pub outcome: LinearOutcome,
}

impl LinearAcceleration {
    /// Computes the free surface and checks for overflow.
    ///
    /// The direction of `a_x` only changes which wall the liquid climbs, so
    /// the overflow check uses the magnitude of the rise.
    ///
    /// # Errors
    ///
    /// Returns [`FluidsError::InvalidInput`] if a dimension is non-physical,
    /// the liquid is deeper than the tank, or `g + a_z` is not positive.
    pub fn analyze(&self) -> Result<LinearSloshing, FluidsError> {
        self.validate()?;
        let effective = effective_gravity(self.vertical)?;

        let slope = (self.horizontal / effective).value;
        let surface_angle = Angle::new::<radian>(slope.atan());
        let half_length = self.tank_length * 0.5;
        let rise = half_length * slope;

        let freeboard = self.tank_height - self.fluid_height;
        let max_horizontal_acceleration = effective * (freeboard / half_length).value;

        let outcome = if rise.abs() <= freeboard {
            LinearOutcome::Contained {
                bottom_pressure: self.density * effective * self.fluid_height,
            }
        } else {
            LinearOutcome::Overflow {
                rim_distance: freeboard / slope.abs(),
            }
        };

        Ok(LinearSloshing {
            surface_angle,
            rise,
            max_horizontal_acceleration,
            outcome,
        })
    }

    fn validate(&self) -> Result<(), FluidsError> {
        ensure_finite(
            "horizontal acceleration",
            self.horizontal.get::<meter_per_second_squared>(),
        )?;
        ensure_finite(
            "vertical acceleration",
            self.vertical.get::<meter_per_second_squared>(),
        )?;
        ensure_non_negative("fluid height", self.fluid_height.get::<meter>())?;
        ensure_positive("tank height", self.tank_height.get::<meter>())?;
        ensure_positive("tank length", self.tank_length.get::<meter>())?;
        ensure_positive("tank width", self.tank_width.get::<meter>())?;
        ensure_positive("density", self.density.get::<kilogram_per_cubic_meter>())?;

        if self.fluid_height > self.tank_height {
            return Err(FluidsError::InvalidInput(
                "fluid height exceeds tank height".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, pressure::pascal};

    fn tank(a_x: f64) -> LinearAcceleration {
        LinearAcceleration {
            horizontal: Acceleration::new::<meter_per_second_squared>(a_x),
            vertical: Acceleration::new::<meter_per_second_squared>(0.0),
            fluid_height: Length::new::<meter>(1.0),
            tank_height: Length::new::<meter>(1.5),
            tank_length: Length::new::<meter>(4.0),
            tank_width: Length::new::<meter>(2.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        }
    }

    #[test]
    fn gentle_acceleration_is_contained() {
        let result = tank(2.0).analyze().expect("valid tank");

        let slope: f64 = 2.0 / 9.81;
        assert_relative_eq!(
            result.surface_angle.get::<degree>(),
            slope.atan().to_degrees(),
            max_relative = 1e-12
        );
        assert_relative_eq!(result.rise.get::<meter>(), 2.0 * slope, max_relative = 1e-12);
        // a_max = g * 0.5 / 2
        assert_relative_eq!(
            result
                .max_horizontal_acceleration
                .get::<meter_per_second_squared>(),
            9.81 * 0.25,
            max_relative = 1e-12
        );

        match result.outcome {
            LinearOutcome::Contained { bottom_pressure } => {
                assert_relative_eq!(
                    bottom_pressure.get::<pascal>(),
                    1000.0 * 9.81,
                    max_relative = 1e-12
                );
            }
            LinearOutcome::Overflow { .. } => panic!("expected contained surface"),
        }
    }

    #[test]
    fn hard_acceleration_overflows() {
        let result = tank(5.0).analyze().expect("valid tank");

        match result.outcome {
            LinearOutcome::Overflow { rim_distance } => {
                // 0.5 / (5 / 9.81)
                assert_relative_eq!(
                    rim_distance.get::<meter>(),
                    0.5 * 9.81 / 5.0,
                    max_relative = 1e-12
                );
            }
            LinearOutcome::Contained { .. } => panic!("expected overflow"),
        }
    }

    #[test]
    fn braking_overflows_like_accelerating() {
        let forward = tank(5.0).analyze().expect("valid tank");
        let backward = tank(-5.0).analyze().expect("valid tank");

        assert_relative_eq!(backward.rise.get::<meter>(), -forward.rise.get::<meter>());
        assert!(matches!(backward.outcome, LinearOutcome::Overflow { .. }));
    }

    #[test]
    fn max_acceleration_is_the_spill_threshold() {
        let limit = tank(0.0)
            .analyze()
            .expect("valid tank")
            .max_horizontal_acceleration
            .get::<meter_per_second_squared>();

        let below = tank(limit * 0.999).analyze().expect("valid tank");
        let above = tank(limit * 1.001).analyze().expect("valid tank");

        assert!(matches!(below.outcome, LinearOutcome::Contained { .. }));
        assert!(matches!(above.outcome, LinearOutcome::Overflow { .. }));
    }

    #[test]
    fn rejects_free_fall() {
        let mut falling = tank(1.0);
        falling.vertical = Acceleration::new::<meter_per_second_squared>(-9.81);

        assert!(matches!(
            falling.analyze(),
            Err(FluidsError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_overfilled_tank() {
        let mut full = tank(1.0);
        full.fluid_height = Length::new::<meter>(2.0);

        assert!(matches!(full.analyze(), Err(FluidsError::InvalidInput(_))));
    }
}
