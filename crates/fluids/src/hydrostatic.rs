//! Resultant force on a submerged rectangular plate.
//!
//! The pressure acting on the plate is evaluated at its centroid and
//! includes atmospheric pressure at the free surface:
//!
//! - `F = (P_atm + rho * g * h_cg) * a * b`
//!
//! where `h_cg` depends on the plate orientation (see [`Orientation`]).

use uom::si::{
    angle::radian,
    f64::{Angle, Area, Force, Length, MassDensity, Pressure},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
};

use crate::{
    FluidsError, atmospheric_pressure,
    error::{ensure_finite, ensure_non_negative, ensure_positive},
    gravity,
};

/// Orientation of the plate relative to the free surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// Plate inclined at an angle from the horizontal.
    ///
    /// `h_cg = s + (b / 2) * sin(angle)`
    Tilted(Angle),

    /// Plate perpendicular to the free surface.
    ///
    /// `h_cg = s + b / 2`
    Vertical,

    /// Plate parallel to the free surface at depth `s`.
    ///
    /// `h_cg = s`. The plate length `b` only contributes to the area here,
    /// never to the depth.
    Horizontal,
}

/// A rectangular plate submerged in a liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmergedPlate {
    /// Liquid density.
    pub density: MassDensity,
    /// Distance from the free surface to the top edge of the plate (`s`).
    pub top_depth: Length,
    /// Plate length along its slope, away from the surface (`b`).
    pub length: Length,
    /// Plate width, parallel to the surface (`a`).
    pub width: Length,
}

/// Result of a hydrostatic force calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrostaticForce {
    /// Depth of the plate centroid below the free surface.
    pub centroid_depth: Length,
    /// Absolute pressure at the centroid.
    pub centroid_pressure: Pressure,
    /// Plate area.
    pub area: Area,
    /// Resultant force on the wetted face.
    pub force: Force,
}

impl SubmergedPlate {
    /// Returns the plate area `a * b`.
    #[must_use]
    pub fn area(&self) -> Area {
        self.width * self.length
    }

    /// Returns the depth of the plate centroid for the given orientation.
    #[must_use]
    pub fn centroid_depth(&self, orientation: Orientation) -> Length {
        match orientation {
            Orientation::Tilted(angle) => {
                self.top_depth + self.length * (0.5 * angle.get::<radian>().sin())
            }
            Orientation::Vertical => self.top_depth + self.length * 0.5,
            Orientation::Horizontal => self.top_depth,
        }
    }

    /// Computes the resultant force on the plate.
    ///
    /// # Errors
    ///
    /// Returns [`FluidsError::InvalidInput`] if the density, length or width
    /// is not positive, the top depth is negative, or the tilt angle is not
    /// finite.
    pub fn resultant_force(
        &self,
        orientation: Orientation,
    ) -> Result<HydrostaticForce, FluidsError> {
        self.validate()?;
        if let Orientation::Tilted(angle) = orientation {
            ensure_finite("tilt angle", angle.get::<radian>())?;
        }

        let centroid_depth = self.centroid_depth(orientation);
        let gauge: Pressure = self.density * gravity() * centroid_depth;
        let centroid_pressure = atmospheric_pressure() + gauge;
        let area = self.area();

        Ok(HydrostaticForce {
            centroid_depth,
            centroid_pressure,
            area,
            force: centroid_pressure * area,
        })
    }

    fn validate(&self) -> Result<(), FluidsError> {
        ensure_positive("density", self.density.get::<kilogram_per_cubic_meter>())?;
        ensure_non_negative("top depth", self.top_depth.get::<meter>())?;
        ensure_positive("plate length", self.length.get::<meter>())?;
        ensure_positive("plate width", self.width.get::<meter>())
    }
}
