// pf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, MassDensity as UomMassDensity, MassRate as UomMassRate,
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Process-wide physical constants. Read-only by construction; nothing in the
/// engine mutates these at runtime.
pub mod constants {
    /// Universal gas constant [J/(mol·K)]
    pub const R_MOL: f64 = 8.3144;

    /// Standard gravitational acceleration [m/s²]
    pub const G0_MPS2: f64 = 9.806_65;

    /// Sea-level standard-day temperature [K]
    pub const T_SL: f64 = 288.15;

    /// Sea-level standard-day pressure [Pa]
    pub const P_SL: f64 = 101_325.0;

    /// Sea-level standard-day density [kg/m³]
    pub const RHO_SL: f64 = 1.225;

    /// Sea-level standard-day speed of sound [m/s]
    pub const A_SL: f64 = 340.294;

    /// Tropospheric temperature lapse rate [K/m]
    pub const LAPSE_RATE: f64 = -0.0065;

    /// Geopotential altitude of the tropopause [m]
    pub const H_TROPOPAUSE: f64 = 11_000.0;

    /// Specific gas constant of dry air [J/(kg·K)]
    pub const R_AIR: f64 = 287.052_87;

    /// Specific heat ratio of air at moderate temperatures
    pub const GAMMA_AIR: f64 = 1.4;

    /// Default thermodynamic reference temperature [K]
    pub const T_REF: f64 = 298.15;

    /// Default thermodynamic reference pressure [Pa]
    pub const P_REF: f64 = 101_325.0;
}
