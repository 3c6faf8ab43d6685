//! Liquid in a tank moving as a rigid body.
//!
//! Under uniform acceleration or steady rotation the liquid moves with the
//! tank, and its free surface becomes a plane ([`linear`]) or a paraboloid
//! ([`rotation`]). Vertical acceleration `a_z` adds to gravity in both cases.

pub mod linear;
pub mod rotation;

pub use linear::{LinearAcceleration, LinearOutcome, LinearSloshing};
pub use rotation::{RigidRotation, RotatingSurface};

use uom::si::{acceleration::meter_per_second_squared, f64::Acceleration};

use crate::{FluidsError, error::ensure_positive, gravity};

/// Returns `g + a_z`, rejecting a non-positive result.
fn effective_gravity(vertical: Acceleration) -> Result<Acceleration, FluidsError> {
    let effective = gravity() + vertical;
    ensure_positive(
        "effective gravity (g + a_z)",
        effective.get::<meter_per_second_squared>(),
    )?;
    Ok(effective)
}
