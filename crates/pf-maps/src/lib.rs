//! pf-maps: compressor performance maps for propflow.
//!
//! A map is a pair of sorted independent grids (corrected speed and R-line)
//! with 2-D characteristic arrays for mass flow, pressure ratio and
//! isentropic efficiency. Evaluation interpolates the characteristics and
//! rescales them to a design point set by `set_scaling`; until a design pass
//! runs, the map evaluates unscaled (all factors 1).

pub mod error;
pub mod grid;
pub mod map;
pub mod schema;

pub use error::{MapError, MapResult};
pub use map::{CompressorMap, MapPoint};
pub use schema::{MapFile, load_json, load_yaml, save_json, save_yaml};
