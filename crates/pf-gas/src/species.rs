//! Built-in gas species.

use crate::catalog;
use crate::nasa9::SpeciesThermo;

/// Gas species with built-in NASA-9 coverage, relevant for air-breathing
/// propulsion cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasSpecies {
    /// Dry air (pseudo-species)
    Air,
    /// Argon (Ar)
    Ar,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Water vapor (H₂O)
    H2O,
}

impl GasSpecies {
    pub const ALL: [GasSpecies; 6] = [
        GasSpecies::Air,
        GasSpecies::Ar,
        GasSpecies::N2,
        GasSpecies::O2,
        GasSpecies::CO2,
        GasSpecies::H2O,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GasSpecies::Air => "Air",
            GasSpecies::Ar => "Ar",
            GasSpecies::N2 => "N2",
            GasSpecies::O2 => "O2",
            GasSpecies::CO2 => "CO2",
            GasSpecies::H2O => "H2O",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GasSpecies::Air => "Air",
            GasSpecies::Ar => "Argon",
            GasSpecies::N2 => "Nitrogen",
            GasSpecies::O2 => "Oxygen",
            GasSpecies::CO2 => "Carbon Dioxide",
            GasSpecies::H2O => "Water Vapor",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    pub fn molar_mass(&self) -> f64 {
        catalog::molar_mass(*self)
    }

    /// Build the NASA-9 table for this species.
    pub fn thermo(&self) -> SpeciesThermo {
        catalog::table(*self)
    }
}

impl std::str::FromStr for GasSpecies {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AIR" => Ok(GasSpecies::Air),
            "AR" | "ARGON" => Ok(GasSpecies::Ar),
            "N2" | "NITROGEN" => Ok(GasSpecies::N2),
            "O2" | "OXYGEN" => Ok(GasSpecies::O2),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(GasSpecies::CO2),
            "H2O" | "WATER" | "WATER VAPOR" => Ok(GasSpecies::H2O),
            _ => Err("unknown species"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("air".parse::<GasSpecies>().unwrap(), GasSpecies::Air);
        assert_eq!("Argon".parse::<GasSpecies>().unwrap(), GasSpecies::Ar);
        assert_eq!("water".parse::<GasSpecies>().unwrap(), GasSpecies::H2O);
        assert!("kerosene".parse::<GasSpecies>().is_err());
    }

    #[test]
    fn canonical_key_roundtrip() {
        for species in GasSpecies::ALL {
            let parsed = species
                .key()
                .parse::<GasSpecies>()
                .expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(GasSpecies::Ar.display_name(), "Argon");
        assert_eq!(GasSpecies::CO2.display_name(), "Carbon Dioxide");
    }
}
