//! Gas property errors.

use pf_core::PfError;
use pf_solver::SolverError;
use thiserror::Error;

/// Result type for gas operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur during gas property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Temperature outside the species' polynomial coverage.
    #[error("temperature {value} K is outside the valid range [{min}, {max}) K for {species}")]
    TemperatureOutOfRange {
        species: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Malformed species table (breakpoints or coefficient sets).
    #[error("invalid species table: {what}")]
    InvalidTable { what: &'static str },

    /// Non-physical values (negative pressure, etc.).
    #[error("non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// A property inversion did not converge; the state is unchanged.
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}

impl From<GasError> for PfError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::TemperatureOutOfRange { .. } => PfError::OutOfRange {
                what: "temperature outside species polynomial range",
            },
            GasError::InvalidTable { what } => PfError::InvalidArg { what },
            GasError::NonPhysical { what } => PfError::InvalidArg { what },
            GasError::Solver(e) => e.into(),
        }
    }
}
