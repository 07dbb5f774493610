//! Bounded root finders for thermodynamic property inversion.
//!
//! This crate provides the scalar/vector Newton iterations used to invert
//! gas-property relations (temperature from enthalpy or entropy, pressure
//! from entropy) and the bounded bisection used to recover Mach number from
//! corrected mass flow. Jacobians are analytic and supplied by the caller;
//! nothing here differentiates numerically.

pub mod bisect;
pub mod error;
pub mod newton;

pub use bisect::{BisectConfig, Monotonic, bisect};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, newton_solve, newton_solve_bounded};
