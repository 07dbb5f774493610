//! Flow station: total/static gas states for a flow passage.
//!
//! A station holds the stagnation ("total") and static states of the gas
//! moving through a passage, plus the physical flow quantities tying them
//! together. On-design evaluation sizes the passage area from a prescribed
//! Mach number; off-design evaluation recovers the Mach number from the
//! fixed area via the corrected-flow inversion.

use crate::compressible::{
    corrected_flow_per_area, corrected_mass_flow, mach_from_corrected_flow, p_over_pt, t_over_tt,
};
use crate::error::{FlowError, FlowResult};
use pf_core::units::{Area, MassRate, Pressure, Temperature, Velocity, k, m2, mps, pa};
use pf_gas::nasa9::SpeciesThermo;
use pf_gas::state::{GasSolver, GasState, SpecEnthalpy, SpecEntropy};
use std::sync::Arc;
use tracing::debug;

/// On-design sizes the passage area; off-design recovers the Mach number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesignMode {
    OnDesign,
    OffDesign,
}

/// Which of the station's two gas states a query refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Total,
    Static,
}

/// Total and static gas states of one flow passage.
#[derive(Debug, Clone)]
pub struct FlowStation {
    name: String,
    total: GasState,
    static_state: GasState,
    mode: DesignMode,
    mach: Option<f64>,
    velocity: Option<Velocity>,
    area: Option<Area>,
    mdot: Option<MassRate>,
}

impl FlowStation {
    /// Create a station with both states at the species' reference
    /// conditions and no flow quantities defined yet.
    pub fn new(name: impl Into<String>, species: Arc<SpeciesThermo>) -> FlowResult<Self> {
        use pf_core::units::constants::{P_REF, T_REF};
        let total = GasState::new(species.clone(), k(T_REF), pa(P_REF))?;
        let static_state = GasState::new(species, k(T_REF), pa(P_REF))?;
        Ok(Self {
            name: name.into(),
            total,
            static_state,
            mode: DesignMode::OnDesign,
            mach: None,
            velocity: None,
            area: None,
            mdot: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn design_mode(&self) -> DesignMode {
        self.mode
    }

    pub fn set_design_mode(&mut self, mode: DesignMode) {
        self.mode = mode;
    }

    pub fn set_mdot(&mut self, mdot: MassRate) {
        self.mdot = Some(mdot);
    }

    pub fn set_area(&mut self, area: Area) {
        self.area = Some(area);
    }

    pub fn set_mach(&mut self, mach: f64) -> FlowResult<()> {
        if mach < 0.0 {
            return Err(FlowError::NegativeMach { mach });
        }
        self.mach = Some(mach);
        Ok(())
    }

    /// Whether mass flow plus either Mach number or area are defined, i.e.
    /// the passage can be evaluated.
    pub fn ready(&self) -> bool {
        self.mdot.is_some() && (self.mach.is_some() || self.area.is_some())
    }

    /// The gas state for the requested frame.
    pub fn gas(&self, frame: Frame) -> &GasState {
        match frame {
            Frame::Total => &self.total,
            Frame::Static => &self.static_state,
        }
    }

    pub fn total(&self) -> &GasState {
        &self.total
    }

    pub fn static_state(&self) -> &GasState {
        &self.static_state
    }

    pub fn mach(&self) -> Option<f64> {
        self.mach
    }

    pub fn velocity(&self) -> Option<Velocity> {
        self.velocity
    }

    pub fn area(&self) -> Option<Area> {
        self.area
    }

    pub fn mdot(&self) -> Option<MassRate> {
        self.mdot
    }

    /// Update the physical flow and static quantities.
    ///
    /// On-design with a Mach number set, sizes the area; off-design with an
    /// area set, recovers the Mach number from corrected flow (choked flow
    /// snaps to exactly 1). Then the static state follows from the isentropic
    /// ratios and the velocity from `V = M · a_static`.
    pub fn evaluate(&mut self) -> FlowResult<()> {
        let mdot = self
            .mdot
            .ok_or(FlowError::Undefined {
                what: "mass flow must be set before evaluation",
            })?
            .value;

        let tt = self.total.temperature().value;
        let pt = self.total.pressure().value;
        let gamma_t = self.total.gamma();
        let r = self.total.r();

        let mach = match (self.mode, self.mach, self.area) {
            (DesignMode::OnDesign, Some(mach), _) => {
                let dm = corrected_flow_per_area(mach, gamma_t, r)?;
                self.area = Some(m2(mdot * tt.sqrt() / (pt * dm)));
                mach
            }
            (DesignMode::OffDesign, _, Some(area)) => {
                let d = corrected_mass_flow(mdot, pt, tt, area.value);
                let mach = mach_from_corrected_flow(d, false, gamma_t, r)?;
                debug!(station = %self.name, d, mach, "off-design Mach recovered");
                self.mach = Some(mach);
                mach
            }
            _ => {
                return Err(FlowError::Undefined {
                    what: "need Mach number (on-design) or area (off-design)",
                });
            }
        };

        let t_static = t_over_tt(mach, gamma_t)? * tt;
        let p_static = p_over_pt(mach, gamma_t)? * pt;
        self.static_state.set_tp(k(t_static), pa(p_static))?;
        self.velocity = Some(mps(mach * self.static_state.a()));
        Ok(())
    }

    fn evaluate_if_ready(&mut self) -> FlowResult<()> {
        if self.ready() {
            self.evaluate()
        } else {
            Ok(())
        }
    }

    /// Set total conditions from temperature and pressure.
    pub fn set_total_tp(&mut self, tt: Temperature, pt: Pressure) -> FlowResult<()> {
        self.total.set_tp(tt, pt)?;
        self.evaluate_if_ready()
    }

    /// Set total conditions from enthalpy and pressure.
    pub fn set_total_hp(
        &mut self,
        ht: SpecEnthalpy,
        pt: Pressure,
        solver: &GasSolver,
    ) -> FlowResult<()> {
        self.total.set_hp(ht, pt, solver)?;
        self.evaluate_if_ready()
    }

    /// Set total conditions from enthalpy and entropy.
    pub fn set_total_hs(
        &mut self,
        ht: SpecEnthalpy,
        st: SpecEntropy,
        solver: &GasSolver,
    ) -> FlowResult<()> {
        self.total.set_hs(ht, st, solver)?;
        self.evaluate_if_ready()
    }

    /// Set total conditions from entropy and pressure.
    pub fn set_total_sp(
        &mut self,
        st: SpecEntropy,
        pt: Pressure,
        solver: &GasSolver,
    ) -> FlowResult<()> {
        self.total.set_sp(st, pt, solver)?;
        self.evaluate_if_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::kgps;
    use pf_gas::species::GasSpecies;

    fn air_station(name: &str) -> FlowStation {
        FlowStation::new(name, Arc::new(GasSpecies::Air.thermo())).unwrap()
    }

    #[test]
    fn evaluate_requires_mass_flow() {
        let mut st = air_station("inlet");
        st.set_mach(0.5).unwrap();
        let err = st.evaluate().unwrap_err();
        assert!(matches!(err, FlowError::Undefined { .. }));
    }

    #[test]
    fn evaluate_requires_mach_or_area() {
        let mut st = air_station("inlet");
        st.set_mdot(kgps(50.0));
        let err = st.evaluate().unwrap_err();
        assert!(matches!(err, FlowError::Undefined { .. }));
    }

    #[test]
    fn on_design_sizes_the_area() {
        let mut st = air_station("inlet");
        st.set_mdot(kgps(50.0));
        st.set_mach(0.55).unwrap();
        st.set_total_tp(k(288.15), pa(101_325.0)).unwrap();

        let area = st.area().expect("area sized on design").value;
        let gamma = st.total().gamma();
        let r = st.total().r();
        let dm = corrected_flow_per_area(0.55, gamma, r).unwrap();
        let expected = 50.0 * 288.15_f64.sqrt() / (101_325.0 * dm);
        assert!((area - expected).abs() < 1e-12);

        // Static state sits below total per the isentropic ratios
        assert!(st.static_state().temperature().value < 288.15);
        assert!(st.static_state().pressure().value < 101_325.0);
        let v = st.velocity().unwrap().value;
        assert!((v - 0.55 * st.static_state().a()).abs() < 1e-9);
    }

    #[test]
    fn off_design_recovers_the_mach_number() {
        // Size the passage on design, then rerun off-design with the same
        // area and check the Mach number comes back.
        let mut st = air_station("duct");
        st.set_mdot(kgps(40.0));
        st.set_mach(0.62).unwrap();
        st.set_total_tp(k(320.0), pa(150_000.0)).unwrap();
        let area = st.area().unwrap();

        let mut off = air_station("duct");
        off.set_design_mode(DesignMode::OffDesign);
        off.set_mdot(kgps(40.0));
        off.set_area(area);
        off.set_total_tp(k(320.0), pa(150_000.0)).unwrap();

        let mach = off.mach().expect("off-design Mach");
        assert!((mach - 0.62).abs() < 1e-5);
    }

    #[test]
    fn off_design_choked_flow_runs_at_the_sonic_point() {
        let mut st = air_station("throat");
        st.set_design_mode(DesignMode::OffDesign);
        st.set_mdot(kgps(30.0));
        st.set_total_tp(k(300.0), pa(101_325.0)).unwrap();

        // Area exactly at the sonic corrected flow
        let gamma = st.total().gamma();
        let r = st.total().r();
        let d_max = crate::compressible::max_corrected_flow_per_area(gamma, r);
        let area = 30.0 * 300.0_f64.sqrt() / (101_325.0 * d_max);
        st.set_area(m2(area));

        st.evaluate().unwrap();
        let mach = st.mach().unwrap();
        assert!((mach - 1.0).abs() < 1e-4);
        assert!(mach <= 1.0);
    }

    #[test]
    fn off_design_rejects_corrected_flow_above_sonic() {
        let mut st = air_station("throat");
        st.set_design_mode(DesignMode::OffDesign);
        st.set_mdot(kgps(30.0));
        st.set_total_tp(k(300.0), pa(101_325.0)).unwrap();

        let gamma = st.total().gamma();
        let r = st.total().r();
        let d_max = crate::compressible::max_corrected_flow_per_area(gamma, r);
        let area = 30.0 * 300.0_f64.sqrt() / (101_325.0 * d_max) * 0.9; // too small
        st.set_area(m2(area));

        let err = st.evaluate().unwrap_err();
        assert!(matches!(err, FlowError::AboveSonicLimit { .. }));
    }

    #[test]
    fn setting_totals_before_flow_quantities_defers_evaluation() {
        let mut st = air_station("inlet");
        st.set_total_tp(k(288.15), pa(101_325.0)).unwrap();
        assert!(st.mach().is_none());
        assert!(st.velocity().is_none());

        st.set_mdot(kgps(25.0));
        st.set_mach(0.3).unwrap();
        st.set_total_tp(k(288.15), pa(101_325.0)).unwrap();
        assert!(st.area().is_some());
        assert!(st.velocity().is_some());
    }

    #[test]
    fn frame_dispatch_reaches_both_states() {
        let mut st = air_station("inlet");
        st.set_mdot(kgps(25.0));
        st.set_mach(0.4).unwrap();
        st.set_total_tp(k(400.0), pa(200_000.0)).unwrap();

        assert!((st.gas(Frame::Total).temperature().value - 400.0).abs() < 1e-12);
        assert!(st.gas(Frame::Static).temperature().value < 400.0);
    }

    #[test]
    fn set_total_hp_drives_evaluation() {
        let reference =
            GasState::new(Arc::new(GasSpecies::Air.thermo()), k(500.0), pa(101_325.0)).unwrap();
        let ht = reference.h();

        let mut st = air_station("inlet");
        st.set_mdot(kgps(20.0));
        st.set_mach(0.5).unwrap();
        st.set_total_hp(ht, pa(180_000.0), &GasSolver::default())
            .unwrap();

        assert!((st.total().temperature().value - 500.0).abs() < 1e-3);
        assert!((st.total().pressure().value - 180_000.0).abs() < 1e-9);
        assert!(st.area().is_some());
    }
}
