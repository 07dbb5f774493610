//! Compressor map file schema.
//!
//! The file carries the design values of the independent map variables, the
//! independent grid vectors, and the characteristic arrays indexed
//! `[corrected speed][R-line]`. Shape and sortedness are validated when the
//! data is turned into a `CompressorMap`, not here.

use crate::error::MapResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapFile {
    pub design: DesignDef,
    pub grid: GridDef,
    pub characteristic: CharacteristicDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDef {
    /// Design corrected speed, in map-referred units
    pub des_nc: f64,
    /// Design R-line
    pub des_rline: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub grid_nc: Vec<f64>,
    pub grid_rline: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacteristicDef {
    pub massflow: Vec<Vec<f64>>,
    pub pressure_ratio: Vec<Vec<f64>>,
    pub isen_efficiency: Vec<Vec<f64>>,
}

pub fn load_yaml(path: &std::path::Path) -> MapResult<MapFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml(path: &std::path::Path, map: &MapFile) -> MapResult<()> {
    let content = serde_yaml::to_string(map)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> MapResult<MapFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json(path: &std::path::Path, map: &MapFile) -> MapResult<()> {
    let content = serde_json::to_string_pretty(map)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
design:
  des_nc: 1.0
  des_rline: 2.0
grid:
  grid_nc: [0.5, 1.0]
  grid_rline: [1.0, 2.0, 3.0]
characteristic:
  massflow:
    - [10.0, 12.0, 14.0]
    - [20.0, 22.0, 24.0]
  pressure_ratio:
    - [1.2, 1.3, 1.4]
    - [1.8, 1.9, 2.0]
  isen_efficiency:
    - [0.80, 0.82, 0.81]
    - [0.84, 0.88, 0.85]
"#;

    #[test]
    fn parses_yaml() {
        let file: MapFile = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(file.design.des_nc, 1.0);
        assert_eq!(file.grid.grid_rline.len(), 3);
        assert_eq!(file.characteristic.massflow[1][2], 24.0);
    }

    #[test]
    fn yaml_round_trip() {
        let file: MapFile = serde_yaml::from_str(SAMPLE).unwrap();
        let text = serde_yaml::to_string(&file).unwrap();
        let back: MapFile = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, file);
    }

    #[test]
    fn json_round_trip() {
        let file: MapFile = serde_yaml::from_str(SAMPLE).unwrap();
        let text = serde_json::to_string(&file).unwrap();
        let back: MapFile = serde_json::from_str(&text).unwrap();
        assert_eq!(back, file);
    }
}
