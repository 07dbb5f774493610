//! Error types for map handling.

use pf_core::PfError;
use thiserror::Error;

/// Errors that can occur while building, scaling or loading a map.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("map grid {what} must be strictly increasing with at least two points")]
    BadGrid { what: &'static str },

    #[error("characteristic {what} must be {rows}x{cols} to match the grids")]
    ShapeMismatch {
        what: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("design {axis} value {value} is not a point of the map grid")]
    DesignNotOnGrid { axis: &'static str, value: f64 },

    #[error("map design value for {what} makes scaling undefined")]
    DegenerateDesign { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MapResult<T> = Result<T, MapError>;

impl From<MapError> for PfError {
    fn from(e: MapError) -> Self {
        match e {
            MapError::BadGrid { what } => PfError::InvalidArg { what },
            MapError::ShapeMismatch { what, .. } => PfError::InvalidArg { what },
            MapError::DesignNotOnGrid { .. } => PfError::InvalidArg {
                what: "design point not on the map grid",
            },
            MapError::DegenerateDesign { what } => PfError::InvalidArg { what },
            MapError::Io(_) => PfError::InvalidArg { what: "map file I/O" },
            MapError::Yaml(_) => PfError::InvalidArg {
                what: "map file YAML",
            },
            MapError::Json(_) => PfError::InvalidArg {
                what: "map file JSON",
            },
        }
    }
}
