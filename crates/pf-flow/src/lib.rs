//! pf-flow: compressible channel-flow relations for propflow.
//!
//! Provides:
//! - Isentropic total/static ratios and their Mach inversions
//! - Corrected-flow-per-unit-area and its bisection inverse
//! - `FlowStation`, the total/static flow passage used at element ports
//! - ISA atmosphere for ambient conditions

pub mod atmosphere;
pub mod compressible;
pub mod error;
pub mod station;

pub use atmosphere::{Atmosphere, isa};
pub use error::{FlowError, FlowResult};
pub use station::{DesignMode, FlowStation, Frame};
