//! Error types for flow calculations.

use pf_core::PfError;
use pf_gas::GasError;
use pf_solver::SolverError;
use thiserror::Error;

/// Errors that can occur during compressible-flow calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Mach number must be non-negative (got {mach})")]
    NegativeMach { mach: f64 },

    #[error("stagnation ratio {what} must be at least 1 (got {value})")]
    StagnationRatioBelowOne { what: &'static str, value: f64 },

    #[error("corrected flow per unit area {value} exceeds the sonic maximum {limit}")]
    AboveSonicLimit { value: f64, limit: f64 },

    #[error("non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("flow passage is under-defined: {what}")]
    Undefined { what: &'static str },

    #[error("altitude {value} m is above the {limit} m model ceiling")]
    AltitudeAboveCeiling { value: f64, limit: f64 },

    #[error("gas error: {0}")]
    Gas(#[from] GasError),

    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for PfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::NegativeMach { .. } => PfError::InvalidArg {
                what: "negative Mach number",
            },
            FlowError::StagnationRatioBelowOne { what, .. } => PfError::InvalidArg { what },
            FlowError::AboveSonicLimit { .. } => PfError::OutOfRange {
                what: "corrected flow above sonic maximum",
            },
            FlowError::NonPhysical { what } => PfError::InvalidArg { what },
            FlowError::Undefined { what } => PfError::InvalidArg { what },
            FlowError::AltitudeAboveCeiling { .. } => PfError::OutOfRange {
                what: "altitude above atmosphere model ceiling",
            },
            FlowError::Gas(e) => e.into(),
            FlowError::Solver(e) => e.into(),
        }
    }
}
