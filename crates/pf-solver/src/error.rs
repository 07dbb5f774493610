//! Error types for solver operations.

use pf_core::PfError;
use thiserror::Error;

/// Errors that can occur during a root-finding invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Singular Jacobian: {what}")]
    SingularJacobian { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ConvergenceFailed { what: _ } => PfError::ConvergenceFailed {
                what: "root finder exhausted its iteration budget",
            },
            SolverError::SingularJacobian { what: _ } => PfError::Invariant {
                what: "singular Jacobian",
            },
            SolverError::InvalidArg { what } => PfError::InvalidArg { what },
            SolverError::Numeric { what: _ } => PfError::Invariant {
                what: "numeric error inside a solve",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::ConvergenceFailed {
            what: "no root after 500 iterations".into(),
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn error_to_pf_error() {
        let err = SolverError::InvalidArg { what: "bounds" };
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::InvalidArg { .. }));
    }
}
