//! ISA standard atmosphere (BADA form).
//!
//! Lapse-rate troposphere up to 11 km, isothermal stratosphere above, valid
//! to 24 995 m.

use crate::error::{FlowError, FlowResult};
use pf_core::units::constants::{G0_MPS2, GAMMA_AIR, H_TROPOPAUSE, LAPSE_RATE, P_SL, R_AIR, T_SL};
use pf_core::units::{Density, Pressure, Temperature, Velocity, k, kgpm3, mps, pa};

/// Highest altitude the model covers [m].
pub const MAX_ALTITUDE_M: f64 = 24_995.0;

/// Ambient conditions at one geopotential altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Atmosphere {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
    pub speed_of_sound: Velocity,
}

/// Standard-day atmospheric state at the given geopotential altitude [m].
pub fn isa(altitude_m: f64) -> FlowResult<Atmosphere> {
    if altitude_m > MAX_ALTITUDE_M {
        return Err(FlowError::AltitudeAboveCeiling {
            value: altitude_m,
            limit: MAX_ALTITUDE_M,
        });
    }

    let (t, p) = if altitude_m <= H_TROPOPAUSE {
        let t = T_SL + LAPSE_RATE * altitude_m;
        let p = P_SL * (t / T_SL).powf(-G0_MPS2 / (LAPSE_RATE * R_AIR));
        (t, p)
    } else {
        let t = T_SL + LAPSE_RATE * H_TROPOPAUSE;
        let p_tropopause = P_SL * (t / T_SL).powf(-G0_MPS2 / (LAPSE_RATE * R_AIR));
        let p = p_tropopause * (-G0_MPS2 / (R_AIR * t) * (altitude_m - H_TROPOPAUSE)).exp();
        (t, p)
    };

    let rho = p / (R_AIR * t);
    let a = (GAMMA_AIR * R_AIR * t).sqrt();

    Ok(Atmosphere {
        temperature: k(t),
        pressure: pa(p),
        density: kgpm3(rho),
        speed_of_sound: mps(a),
    })
}
