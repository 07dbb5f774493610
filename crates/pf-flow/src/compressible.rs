//! Compressible-flow relations for channel flow.
//!
//! Pure functions of Mach number, specific heat ratio and gas constant. The
//! corrected-flow inversion is the only iterative one; it bisects on the
//! subsonic or supersonic branch of the corrected-flow curve.

use crate::error::{FlowError, FlowResult};
use pf_solver::bisect::{BisectConfig, Monotonic, bisect};

/// Upper Mach bound for the supersonic bisection branch.
const SUPERSONIC_SEARCH_LIMIT: f64 = 10.0;

/// Solutions this close to Mach 1 are treated as choked flow.
const CHOKE_TOLERANCE: f64 = 1e-6;

/// Specific heat at constant pressure from the heat ratio and gas constant.
pub fn cp_from_gamma(gamma: f64, r: f64) -> f64 {
    r * gamma / (gamma - 1.0)
}

/// Specific heat at constant volume from the heat ratio and gas constant.
pub fn cv_from_gamma(gamma: f64, r: f64) -> f64 {
    r / (gamma - 1.0)
}

/// Isentropic static-to-total pressure ratio p/Pt at a Mach number.
pub fn p_over_pt(mach: f64, gamma: f64) -> FlowResult<f64> {
    if mach < 0.0 {
        return Err(FlowError::NegativeMach { mach });
    }
    Ok((1.0 + 0.5 * (gamma - 1.0) * mach * mach).powf(-gamma / (gamma - 1.0)))
}

/// Isentropic static-to-total temperature ratio T/Tt at a Mach number.
pub fn t_over_tt(mach: f64, gamma: f64) -> FlowResult<f64> {
    if mach < 0.0 {
        return Err(FlowError::NegativeMach { mach });
    }
    Ok(1.0 / (1.0 + 0.5 * (gamma - 1.0) * mach * mach))
}

/// Mach number from the total-to-static pressure ratio Pt/p.
pub fn mach_from_pressure_ratio(pt_over_p: f64, gamma: f64) -> FlowResult<f64> {
    if pt_over_p < 1.0 {
        return Err(FlowError::StagnationRatioBelowOne {
            what: "Pt/p",
            value: pt_over_p,
        });
    }
    Ok(((2.0 / (gamma - 1.0)) * (pt_over_p.powf((gamma - 1.0) / gamma) - 1.0)).sqrt())
}

/// Mach number from the total-to-static temperature ratio Tt/T.
pub fn mach_from_temperature_ratio(tt_over_t: f64, gamma: f64) -> FlowResult<f64> {
    if tt_over_t < 1.0 {
        return Err(FlowError::StagnationRatioBelowOne {
            what: "Tt/T",
            value: tt_over_t,
        });
    }
    Ok(((2.0 / (gamma - 1.0)) * (tt_over_t - 1.0)).sqrt())
}

/// Corrected mass flow per unit area from the passage quantities.
pub fn corrected_mass_flow(mdot: f64, pt: f64, tt: f64, area: f64) -> f64 {
    mdot * tt.sqrt() / (pt * area)
}

fn dm_unchecked(mach: f64, gamma: f64, r: f64) -> f64 {
    (gamma / r).sqrt()
        * mach
        * (1.0 + 0.5 * (gamma - 1.0) * mach * mach).powf(-(gamma + 1.0) / (2.0 * (gamma - 1.0)))
}

/// Corrected mass flow per unit area as a function of Mach number.
///
/// Strictly increasing on [0, 1], peaking at the sonic condition, then
/// strictly decreasing.
pub fn corrected_flow_per_area(mach: f64, gamma: f64, r: f64) -> FlowResult<f64> {
    if mach < 0.0 {
        return Err(FlowError::NegativeMach { mach });
    }
    Ok(dm_unchecked(mach, gamma, r))
}

/// Sonic (maximum) corrected mass flow per unit area.
pub fn max_corrected_flow_per_area(gamma: f64, r: f64) -> f64 {
    dm_unchecked(1.0, gamma, r)
}

/// Invert the corrected-flow relation for Mach number by bisection.
///
/// Fails if the target exceeds the sonic maximum. Searches [0, 1] on the
/// subsonic branch or [1, 10] on the supersonic branch; a solution within
/// 1e-6 of unity is snapped exactly to 1 (choked flow).
pub fn mach_from_corrected_flow(
    target: f64,
    supersonic: bool,
    gamma: f64,
    r: f64,
) -> FlowResult<f64> {
    let limit = max_corrected_flow_per_area(gamma, r);
    if target > limit {
        return Err(FlowError::AboveSonicLimit {
            value: target,
            limit,
        });
    }

    let (lo, hi, shape) = if supersonic {
        (1.0, SUPERSONIC_SEARCH_LIMIT, Monotonic::Decreasing)
    } else {
        (0.0, 1.0, Monotonic::Increasing)
    };
    let mach = bisect(
        lo,
        hi,
        |m| Ok(dm_unchecked(m, gamma, r)),
        target,
        shape,
        &BisectConfig::default(),
    )?;

    if (mach - 1.0).abs() < CHOKE_TOLERANCE {
        return Ok(1.0);
    }
    Ok(mach)
}

/// Enthalpy of a calorically perfect gas at temperature T.
pub fn enthalpy_from_temperature(t: f64, gamma: f64, r: f64) -> f64 {
    cp_from_gamma(gamma, r) * t
}

/// Entropy change from sea-level conditions via the Gibbs equation,
/// normalized by cp.
pub fn gibbs_delta_s(p: f64, t: f64, gamma: f64) -> FlowResult<f64> {
    use pf_core::units::constants::{P_SL, T_SL};
    if p / P_SL < 0.0 || t / T_SL < 0.0 {
        return Err(FlowError::NonPhysical {
            what: "fluid state must be real (P/P0 > 0 and T/T0 > 0)",
        });
    }
    let gmi = gamma - 1.0;
    Ok((t / T_SL).ln() - gmi / gamma * (p / P_SL).ln())
}

/// Impulse of a channel flow.
pub fn stream_impulse(p: f64, area: f64, mdot: f64, velocity: f64) -> f64 {
    p * area + mdot * velocity
}

/// Annulus area from tip diameter and hub-to-tip ratio.
pub fn annulus_area(diameter: f64, hub_tip_ratio: f64) -> f64 {
    std::f64::consts::PI * (diameter / 2.0).powi(2) * (1.0 - hub_tip_ratio * hub_tip_ratio)
}

/// Annulus area from mean radius and hub-to-tip ratio.
pub fn annulus_area_mean(r_mean: f64, hub_tip_ratio: f64) -> f64 {
    4.0 * std::f64::consts::PI * r_mean * r_mean * (1.0 - hub_tip_ratio) / (1.0 + hub_tip_ratio)
}
