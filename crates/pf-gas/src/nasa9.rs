//! NASA-9 piecewise-polynomial thermodynamic tables.
//!
//! A species is described by an ordered set of temperature breakpoints and,
//! for each adjacent breakpoint pair, a 9-coefficient polynomial set with its
//! 7 temperature exponents and a reference-enthalpy shift. The table itself
//! is immutable; `GasState` owns the formulas that consume it.

use crate::error::{GasError, GasResult};
use pf_core::units::constants::R_MOL;

/// One temperature range of a NASA-9 table.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoRange {
    /// Polynomial coefficients c0..c8
    pub coeffs: [f64; 9],
    /// Temperature exponents for the power array
    pub exponents: [f64; 7],
    /// h(298.15 K) - h(0 K) for this range [J/kg]
    pub dh0: f64,
}

/// Immutable piecewise-polynomial table for one gas species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesThermo {
    name: String,
    molec_weight: f64,
    breakpoints: Vec<f64>,
    ranges: Vec<ThermoRange>,
}

impl SpeciesThermo {
    /// Build a table, validating its invariants: strictly increasing positive
    /// breakpoints and exactly one coefficient set per adjacent pair.
    pub fn new(
        name: impl Into<String>,
        molec_weight: f64,
        breakpoints: Vec<f64>,
        ranges: Vec<ThermoRange>,
    ) -> GasResult<Self> {
        if !(molec_weight.is_finite() && molec_weight > 0.0) {
            return Err(GasError::InvalidTable {
                what: "molecular weight must be positive and finite",
            });
        }
        if breakpoints.len() < 2 {
            return Err(GasError::InvalidTable {
                what: "at least two temperature breakpoints are required",
            });
        }
        if breakpoints[0] <= 0.0 {
            return Err(GasError::InvalidTable {
                what: "breakpoints must be positive absolute temperatures",
            });
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GasError::InvalidTable {
                what: "breakpoints must be strictly increasing",
            });
        }
        if ranges.len() != breakpoints.len() - 1 {
            return Err(GasError::InvalidTable {
                what: "each breakpoint pair needs exactly one coefficient set",
            });
        }

        Ok(Self {
            name: name.into(),
            molec_weight,
            breakpoints,
            ranges,
        })
    }

    /// Catalog-internal constructor for tables whose data is known valid.
    /// The catalog tests re-validate every built-in entry through `new`.
    pub(crate) fn from_validated_parts(
        name: &str,
        molec_weight: f64,
        breakpoints: Vec<f64>,
        ranges: Vec<ThermoRange>,
    ) -> Self {
        Self {
            name: name.to_string(),
            molec_weight,
            breakpoints,
            ranges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molecular weight [kg/kmol]
    pub fn molec_weight(&self) -> f64 {
        self.molec_weight
    }

    /// Species-specific gas constant [J/(kg·K)]
    pub fn gas_constant(&self) -> f64 {
        R_MOL / self.molec_weight * 1000.0
    }

    /// Lowest valid temperature [K] (inclusive)
    pub fn t_min(&self) -> f64 {
        self.breakpoints[0]
    }

    /// Highest valid temperature [K] (exclusive)
    pub fn t_max(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Binary-search the range containing `t`.
    ///
    /// The valid domain is `[t_min, t_max)`: a temperature below the first
    /// breakpoint or at/above the last one has no polynomial coverage.
    pub fn range_for(&self, t: f64) -> GasResult<usize> {
        let i = self.breakpoints.partition_point(|&b| b <= t);
        if i == 0 || i == self.breakpoints.len() {
            return Err(GasError::TemperatureOutOfRange {
                species: self.name.clone(),
                value: t,
                min: self.t_min(),
                max: self.t_max(),
            });
        }
        Ok(i - 1)
    }

    pub fn range(&self, idx: usize) -> &ThermoRange {
        &self.ranges[idx]
    }

    /// `[t^e0 .. t^e6, ln t]` for the given range.
    ///
    /// The logarithm rides along as the eighth element because the enthalpy
    /// and entropy-complement polynomials both need it.
    pub fn power_array(&self, t: f64, range_idx: usize) -> [f64; 8] {
        let exponents = &self.ranges[range_idx].exponents;
        let mut array = [0.0_f64; 8];
        for (slot, &e) in array.iter_mut().zip(exponents.iter()) {
            *slot = t.powf(e);
        }
        array[7] = t.ln();
        array
    }
}
