//! Fluid-mechanics calculations for hydrocalc.
//!
//! - [`hydrostatic`]: resultant force on a submerged rectangular plate
//! - [`pipe`]: Darcy-Weisbach pressure drop with a Colebrook-White friction
//!   factor resolved by bisection
//! - [`tank`]: free surface of a liquid in a tank under linear acceleration
//!   or rigid-body rotation
//!
//! All physical quantities are `uom` SI quantities with `f64` storage.
//! Dimensionless groups (Reynolds number, relative roughness, friction
//! factor) are plain `f64`.

mod constants;
mod error;

pub mod hydrostatic;
pub mod pipe;
pub mod tank;

pub use constants::{ATMOSPHERIC_PRESSURE, STANDARD_GRAVITY, atmospheric_pressure, gravity};
pub use error::FluidsError;
