//! pf-gas: single-species ideal-gas properties for propflow.
//!
//! Provides:
//! - NASA-9 piecewise-polynomial tables (`SpeciesThermo`)
//! - A built-in species catalog (`GasSpecies`)
//! - A thermodynamic state with a fully-derived snapshot (`GasState`) whose
//!   enthalpy/entropy setters invert the polynomials through the Newton
//!   solvers in `pf-solver`
//!
//! All quantities are SI and per unit mass (J/kg, J/(kg·K)). Enthalpy is
//! referenced against 298.15 K unless a state is built with the 0 K
//! reference flag.
//!
//! NASA-9 report (McBride et al., 2002): <https://ntrs.nasa.gov/citations/20020085330>

pub mod catalog;
pub mod error;
pub mod nasa9;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use error::{GasError, GasResult};
pub use nasa9::{SpeciesThermo, ThermoRange};
pub use species::GasSpecies;
pub use state::{
    GasProperties, GasSolver, GasState, SolveMethod, SpecEnthalpy, SpecEntropy, SpecHeatCapacity,
};
