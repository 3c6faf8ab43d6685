use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Pressure},
    pressure::pascal,
};

/// Gravitational acceleration in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Atmospheric pressure at the free surface in Pa.
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Returns [`STANDARD_GRAVITY`] as a quantity.
#[must_use]
pub fn gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY)
}

/// Returns [`ATMOSPHERIC_PRESSURE`] as a quantity.
#[must_use]
pub fn atmospheric_pressure() -> Pressure {
    Pressure::new::<pascal>(ATMOSPHERIC_PRESSURE)
}
