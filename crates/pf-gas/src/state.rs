//! Thermodynamic gas state with a fully-derived snapshot.
//!
//! A `GasState` pairs one species table with a current (T, P) and keeps every
//! derived property in sync with them. All mutation funnels through a single
//! commit that derives the complete snapshot first and only then stores it,
//! so a failed setter never leaves the state half-updated.

use crate::error::{GasError, GasResult};
use crate::nasa9::SpeciesThermo;
use nalgebra::{DMatrix, DVector};
use pf_core::units::constants::{P_REF, T_REF};
use pf_core::units::{Pressure, Temperature, k, pa};
use pf_solver::error::{SolverError, SolverResult};
use pf_solver::newton::{NewtonConfig, newton_solve, newton_solve_bounded};
use std::sync::Arc;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Newton variant used by the enthalpy/entropy setters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolveMethod {
    /// Full Newton steps, no bounds
    Plain,
    /// Relaxed steps bounded to the species' valid temperature span
    #[default]
    Relaxed,
}

/// Solver selection for the gas-state setters.
#[derive(Clone, Debug, Default)]
pub struct GasSolver {
    pub method: SolveMethod,
    pub config: NewtonConfig,
}

/// Derived snapshot, always consistent with the owning state's (T, P).
///
/// Returned by value so callers can never alias the internal copy.
#[derive(Debug, Clone, PartialEq)]
pub struct GasProperties {
    /// `[T^e0 .. T^e6, ln T]` for the active polynomial range
    pub t_array: [f64; 8],
    /// Specific heat at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,
    /// Specific heat at constant volume [J/(kg·K)]
    pub cv: SpecHeatCapacity,
    /// Specific heat ratio cp/cv
    pub gamma: f64,
    /// Enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Entropy complement, the temperature-only part of entropy [J/(kg·K)]
    pub phi: SpecEntropy,
    /// Entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Speed of sound [m/s]
    pub a: f64,
}

/// Thermodynamic state (T, P) of one gas species.
#[derive(Debug, Clone)]
pub struct GasState {
    species: Arc<SpeciesThermo>,
    t_ref: f64,
    p_ref: f64,
    ref0: bool,
    t: f64,
    p: f64,
    props: GasProperties,
}

fn cp_poly(c: &[f64; 9], a: &[f64; 8], r: f64) -> f64 {
    (c[0] * a[0] + c[1] * a[1] + c[2] * a[2] + c[3] * a[3] + c[4] * a[4] + c[5] * a[5]
        + c[6] * a[6])
        * r
}

fn h_poly(c: &[f64; 9], a: &[f64; 8], r: f64, t: f64, shift: f64) -> f64 {
    (-c[0] * a[0] + c[1] * a[1] * a[7] + c[2] * a[2] + c[3] * a[3] / 2.0 + c[4] * a[4] / 3.0
        + c[5] * a[5] / 4.0
        + c[6] * a[6] / 5.0
        + c[7] / t)
        * r
        * t
        + shift
}

fn phi_poly(c: &[f64; 9], a: &[f64; 8], r: f64) -> f64 {
    (-c[0] * a[0] / 2.0 - c[1] * a[1] + c[2] * a[7] + c[3] * a[3] + c[4] * a[4] / 2.0
        + c[5] * a[5] / 3.0
        + c[6] * a[6] / 4.0
        + c[8])
        * r
}

/// Derive the full snapshot for (t, p). Pure: no state is touched.
fn derive(
    species: &SpeciesThermo,
    ref0: bool,
    p_ref: f64,
    t: f64,
    p: f64,
) -> GasResult<GasProperties> {
    if !(p.is_finite() && p > 0.0) {
        return Err(GasError::NonPhysical { what: "pressure" });
    }

    let range_idx = species.range_for(t)?;
    let t_array = species.power_array(t, range_idx);
    let range = species.range(range_idx);
    let c = &range.coeffs;
    let r = species.gas_constant();

    let cp = cp_poly(c, &t_array, r);
    let cv = cp - r;
    let gamma = cp / cv;
    let shift = if ref0 { range.dh0 } else { 0.0 };
    let h = h_poly(c, &t_array, r, t, shift);
    let phi = phi_poly(c, &t_array, r);
    let s = phi - r * (p / p_ref).ln();
    let a = (gamma * r * t).sqrt();

    Ok(GasProperties {
        t_array,
        cp,
        cv,
        gamma,
        h,
        phi,
        s,
        a,
    })
}

fn solver_err(e: GasError) -> SolverError {
    SolverError::Numeric {
        what: e.to_string(),
    }
}

impl GasState {
    /// Create a state at (t, p) with the default references
    /// (298.15 K, 101325 Pa) and enthalpy referenced against 298.15 K.
    pub fn new(species: Arc<SpeciesThermo>, t: Temperature, p: Pressure) -> GasResult<Self> {
        Self::with_reference(species, t, p, k(T_REF), pa(P_REF), false)
    }

    /// Create a state with explicit reference conditions. `ref0` switches the
    /// enthalpy reference from 298.15 K to 0 K via each range's dh0 shift.
    pub fn with_reference(
        species: Arc<SpeciesThermo>,
        t: Temperature,
        p: Pressure,
        t_ref: Temperature,
        p_ref: Pressure,
        ref0: bool,
    ) -> GasResult<Self> {
        let p_ref = p_ref.value;
        if !(p_ref.is_finite() && p_ref > 0.0) {
            return Err(GasError::NonPhysical {
                what: "reference pressure",
            });
        }

        let t_val = t.value;
        let p_val = p.value;
        let props = derive(&species, ref0, p_ref, t_val, p_val)?;
        Ok(Self {
            species,
            t_ref: t_ref.value,
            p_ref,
            ref0,
            t: t_val,
            p: p_val,
            props,
        })
    }

    /// Atomically move the state to (t, p): the snapshot is derived first and
    /// only a fully successful derivation is stored.
    fn commit(&mut self, t: f64, p: f64) -> GasResult<()> {
        let props = derive(&self.species, self.ref0, self.p_ref, t, p)?;
        self.t = t;
        self.p = p;
        self.props = props;
        Ok(())
    }

    fn enthalpy_at(&self, t: f64) -> GasResult<f64> {
        let range_idx = self.species.range_for(t)?;
        let a = self.species.power_array(t, range_idx);
        let range = self.species.range(range_idx);
        let shift = if self.ref0 { range.dh0 } else { 0.0 };
        Ok(h_poly(&range.coeffs, &a, self.r(), t, shift))
    }

    fn cp_at(&self, t: f64) -> GasResult<f64> {
        let range_idx = self.species.range_for(t)?;
        let a = self.species.power_array(t, range_idx);
        Ok(cp_poly(&self.species.range(range_idx).coeffs, &a, self.r()))
    }

    fn entropy_at(&self, t: f64, p: f64) -> GasResult<f64> {
        let range_idx = self.species.range_for(t)?;
        let a = self.species.power_array(t, range_idx);
        let phi = phi_poly(&self.species.range(range_idx).coeffs, &a, self.r());
        Ok(phi - self.r() * (p / self.p_ref).ln())
    }

    /// Run a scalar temperature solve starting from the reference
    /// temperature, bounded to the species' valid span in relaxed mode.
    fn solve_temperature<V, S>(&self, solver: &GasSolver, value: V, slope: S) -> GasResult<f64>
    where
        V: Fn(&GasState, f64) -> GasResult<f64>,
        S: Fn(&GasState, f64) -> GasResult<f64>,
    {
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            value(self, x[0])
                .map(|v| DVector::from_element(1, v))
                .map_err(solver_err)
        };
        let jacobian = |x: &DVector<f64>| -> SolverResult<DMatrix<f64>> {
            slope(self, x[0])
                .map(|j| DMatrix::from_element(1, 1, j))
                .map_err(solver_err)
        };
        let x0 = DVector::from_element(1, self.t_ref);

        let result = match solver.method {
            SolveMethod::Plain => newton_solve(x0, residual, jacobian, &solver.config)?,
            SolveMethod::Relaxed => {
                let lower = DVector::from_element(1, self.species.t_min());
                let upper = DVector::from_element(1, self.species.t_max());
                newton_solve_bounded(x0, residual, jacobian, &lower, &upper, &solver.config)?
            }
        };
        Ok(result.x[0])
    }

    /// Set temperature and pressure directly.
    pub fn set_tp(&mut self, t: Temperature, p: Pressure) -> GasResult<()> {
        self.commit(t.value, p.value)
    }

    /// Find T such that h(T) equals the target, at the current pressure.
    ///
    /// Residual h(T) - h_target with analytic Jacobian cp(T). On
    /// non-convergence the previous state is retained.
    pub fn set_h(&mut self, h_target: SpecEnthalpy, solver: &GasSolver) -> GasResult<()> {
        let t = self.solve_temperature(
            solver,
            |gas, t| gas.enthalpy_at(t).map(|h| h - h_target),
            |gas, t| gas.cp_at(t),
        )?;
        self.commit(t, self.p)
    }

    /// Find T such that s(T, P) equals the target at the current pressure.
    ///
    /// Residual s(T, P) - s_target with analytic Jacobian cp(T)/T.
    pub fn set_s_const_p(&mut self, s_target: SpecEntropy, solver: &GasSolver) -> GasResult<()> {
        let p = self.p;
        let t = self.solve_temperature(
            solver,
            |gas, t| gas.entropy_at(t, p).map(|s| s - s_target),
            |gas, t| gas.cp_at(t).map(|cp| cp / t),
        )?;
        self.commit(t, self.p)
    }

    /// Set the state from enthalpy and entropy.
    ///
    /// The temperature is solved from enthalpy first; if that fails the
    /// pressure solve never runs and the state is unchanged. The pressure
    /// then comes from s = φ - R·ln(P/Pref) with the entropy complement φ
    /// fixed by the committed temperature.
    pub fn set_hs(
        &mut self,
        h_target: SpecEnthalpy,
        s_target: SpecEntropy,
        solver: &GasSolver,
    ) -> GasResult<()> {
        self.set_h(h_target, solver)?;

        let phi = self.props.phi;
        let r = self.r();
        let p_ref = self.p_ref;
        let residual = move |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(
                1,
                phi - r * (x[0] / p_ref).ln() - s_target,
            ))
        };
        let jacobian = move |x: &DVector<f64>| -> SolverResult<DMatrix<f64>> {
            Ok(DMatrix::from_element(1, 1, -r / x[0]))
        };
        let x0 = DVector::from_element(1, p_ref);

        let result = match solver.method {
            SolveMethod::Plain => newton_solve(x0, residual, jacobian, &solver.config)?,
            SolveMethod::Relaxed => {
                // Lower bound keeps trial pressures non-negative; no upper bound.
                let lower = DVector::from_element(1, 0.0);
                let upper = DVector::from_element(1, f64::INFINITY);
                newton_solve_bounded(x0, residual, jacobian, &lower, &upper, &solver.config)?
            }
        };
        self.commit(self.t, result.x[0])
    }

    /// Set the state from enthalpy and a prescribed pressure.
    ///
    /// The temperature solve runs first; nothing is committed if it fails.
    pub fn set_hp(
        &mut self,
        h_target: SpecEnthalpy,
        p: Pressure,
        solver: &GasSolver,
    ) -> GasResult<()> {
        let t = self.solve_temperature(
            solver,
            |gas, t| gas.enthalpy_at(t).map(|h| h - h_target),
            |gas, t| gas.cp_at(t),
        )?;
        self.commit(t, p.value)
    }

    /// Set the state from entropy and a prescribed pressure: the temperature
    /// is solved from the entropy at that pressure.
    pub fn set_sp(
        &mut self,
        s_target: SpecEntropy,
        p: Pressure,
        solver: &GasSolver,
    ) -> GasResult<()> {
        let p_val = p.value;
        if !(p_val.is_finite() && p_val > 0.0) {
            return Err(GasError::NonPhysical { what: "pressure" });
        }
        let t = self.solve_temperature(
            solver,
            |gas, t| gas.entropy_at(t, p_val).map(|s| s - s_target),
            |gas, t| gas.cp_at(t).map(|cp| cp / t),
        )?;
        self.commit(t, p_val)
    }

    pub fn species(&self) -> &SpeciesThermo {
        &self.species
    }

    pub fn temperature(&self) -> Temperature {
        k(self.t)
    }

    pub fn pressure(&self) -> Pressure {
        pa(self.p)
    }

    pub fn t_ref(&self) -> Temperature {
        k(self.t_ref)
    }

    pub fn p_ref(&self) -> Pressure {
        pa(self.p_ref)
    }

    pub fn ref0(&self) -> bool {
        self.ref0
    }

    /// Species-specific gas constant [J/(kg·K)]
    pub fn r(&self) -> f64 {
        self.species.gas_constant()
    }

    /// Independent copy of the derived snapshot.
    pub fn properties(&self) -> GasProperties {
        self.props.clone()
    }

    pub fn cp(&self) -> SpecHeatCapacity {
        self.props.cp
    }

    pub fn cv(&self) -> SpecHeatCapacity {
        self.props.cv
    }

    pub fn gamma(&self) -> f64 {
        self.props.gamma
    }

    pub fn h(&self) -> SpecEnthalpy {
        self.props.h
    }

    pub fn phi(&self) -> SpecEntropy {
        self.props.phi
    }

    pub fn s(&self) -> SpecEntropy {
        self.props.s
    }

    /// Speed of sound [m/s]
    pub fn a(&self) -> f64 {
        self.props.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::GasSpecies;

    fn air_at(t: f64, p: f64) -> GasState {
        GasState::new(Arc::new(GasSpecies::Air.thermo()), k(t), pa(p)).unwrap()
    }

    #[test]
    fn air_properties_at_room_temperature() {
        let gas = air_at(300.0, 101_325.0);
        let r = gas.r();
        assert!((r - 287.04).abs() < 0.1);
        assert!((gas.cp() - 1004.7).abs() < 0.5);
        assert!((gas.cv() - (gas.cp() - r)).abs() < 1e-9);
        assert!((gas.gamma() - gas.cp() / gas.cv()).abs() < 1e-12);
        assert!((gas.a() - (gas.gamma() * r * 300.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn entropy_equals_complement_at_reference_pressure() {
        let gas = air_at(450.0, 101_325.0);
        assert!((gas.s() - gas.phi()).abs() < 1e-9);
    }

    #[test]
    fn entropy_drops_with_pressure() {
        let low = air_at(450.0, 101_325.0);
        let high = air_at(450.0, 2.0 * 101_325.0);
        let expected = low.s() - low.r() * 2.0_f64.ln();
        assert!((high.s() - expected).abs() < 1e-9);
    }

    #[test]
    fn ref0_flag_shifts_enthalpy_by_dh0() {
        let species = Arc::new(GasSpecies::Air.thermo());
        let cold = GasState::new(species.clone(), k(400.0), pa(101_325.0)).unwrap();
        let shifted = GasState::with_reference(
            species.clone(),
            k(400.0),
            pa(101_325.0),
            k(T_REF),
            pa(P_REF),
            true,
        )
        .unwrap();
        let dh0 = species.range(0).dh0;
        assert!((shifted.h() - cold.h() - dh0).abs() < 1e-6);
    }

    #[test]
    fn set_tp_out_of_range_keeps_state() {
        let mut gas = air_at(300.0, 101_325.0);
        let before = gas.properties();
        assert!(gas.set_tp(k(150.0), pa(101_325.0)).is_err());
        assert_eq!(gas.properties(), before);
        assert!((gas.temperature().value - 300.0).abs() < 1e-12);
    }

    #[test]
    fn set_h_recovers_temperature() {
        let mut gas = air_at(520.0, 200_000.0);
        let h_target = gas.h();
        gas.set_tp(k(350.0), pa(200_000.0)).unwrap();
        gas.set_h(h_target, &GasSolver::default()).unwrap();
        assert!((gas.temperature().value - 520.0).abs() < 1e-3);
        assert!((gas.pressure().value - 200_000.0).abs() < 1e-9);
    }

    #[test]
    fn set_h_with_plain_method() {
        let mut gas = air_at(300.0, 101_325.0);
        let target = air_at(700.0, 101_325.0).h();
        let solver = GasSolver {
            method: SolveMethod::Plain,
            config: NewtonConfig::default(),
        };
        gas.set_h(target, &solver).unwrap();
        assert!((gas.temperature().value - 700.0).abs() < 1e-3);
    }

    #[test]
    fn set_s_const_p_recovers_temperature() {
        let mut gas = air_at(640.0, 101_325.0);
        let s_target = gas.s();
        gas.set_tp(k(400.0), pa(101_325.0)).unwrap();
        gas.set_s_const_p(s_target, &GasSolver::default()).unwrap();
        assert!((gas.temperature().value - 640.0).abs() < 1e-3);
    }

    #[test]
    fn set_hs_recovers_temperature_and_pressure() {
        let reference = air_at(600.0, 150_000.0);
        let (h_target, s_target) = (reference.h(), reference.s());

        let mut gas = air_at(300.0, 101_325.0);
        gas.set_hs(h_target, s_target, &GasSolver::default()).unwrap();
        assert!((gas.temperature().value - 600.0).abs() < 1e-3);
        assert!((gas.pressure().value - 150_000.0).abs() / 150_000.0 < 1e-5);
    }

    #[test]
    fn set_hs_short_circuits_on_enthalpy_failure() {
        let mut gas = air_at(300.0, 101_325.0);
        let before = gas.properties();
        // No temperature inside the table reaches this enthalpy
        let unreachable = air_at(5000.0, 101_325.0).h() * 10.0;
        let err = gas
            .set_hs(unreachable, 100.0, &GasSolver::default())
            .unwrap_err();
        assert!(matches!(err, GasError::Solver(_)));
        assert_eq!(gas.properties(), before);
        assert!((gas.pressure().value - 101_325.0).abs() < 1e-12);
    }

    #[test]
    fn set_hp_sets_both_fields() {
        let reference = air_at(550.0, 101_325.0);
        let mut gas = air_at(300.0, 101_325.0);
        gas.set_hp(reference.h(), pa(250_000.0), &GasSolver::default())
            .unwrap();
        assert!((gas.temperature().value - 550.0).abs() < 1e-3);
        assert!((gas.pressure().value - 250_000.0).abs() < 1e-9);
    }

    #[test]
    fn set_sp_solves_at_the_new_pressure() {
        let reference = air_at(450.0, 80_000.0);
        let s_target = reference.s();
        let mut gas = air_at(300.0, 101_325.0);
        gas.set_sp(s_target, pa(80_000.0), &GasSolver::default())
            .unwrap();
        assert!((gas.temperature().value - 450.0).abs() < 1e-3);
        assert!((gas.pressure().value - 80_000.0).abs() < 1e-9);
    }

    #[test]
    fn properties_are_independent_copies() {
        let gas = air_at(300.0, 101_325.0);
        let mut copy = gas.properties();
        copy.cp = 0.0;
        assert!(gas.cp() > 1000.0);
    }
}
