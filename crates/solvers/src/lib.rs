//! Numerical solvers for hydrocalc.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `hydrocalc-core`, so they know nothing about the physics they solve.
//!
//! [`Model`]: hydrocalc_core::Model

pub mod equation;
