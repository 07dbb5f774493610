//! Compressor map evaluation and design-point scaling.

use crate::error::{MapError, MapResult};
use crate::grid::interp2;
use crate::schema::MapFile;

/// One evaluated operating point, in engine-referred units.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    /// Corrected mass flow
    pub mc: f64,
    /// Total pressure ratio
    pub pr: f64,
    /// Isentropic efficiency
    pub eff: f64,
    /// Distance from the surge line at the same corrected speed
    pub surge_margin: f64,
}

/// Two-dimensional compressor characteristic over (corrected speed, R-line).
///
/// Grid data is immutable after construction. The four scaling factors are
/// the only mutable state; they default to 1 (unscaled) until a design
/// evaluation calls `set_scaling`, and evaluating off-design before that
/// deliberately runs unscaled.
#[derive(Debug, Clone)]
pub struct CompressorMap {
    name: String,
    nc_grid: Vec<f64>,
    r_grid: Vec<f64>,
    mc: Vec<Vec<f64>>,
    pr: Vec<Vec<f64>>,
    eff: Vec<Vec<f64>>,
    nc_des: f64,
    r_des: f64,
    mc_des: f64,
    pr_des: f64,
    eff_des: f64,
    s_pr: f64,
    s_mc: f64,
    s_nc: f64,
    s_eff: f64,
}

fn check_grid(axis: &[f64], what: &'static str) -> MapResult<()> {
    if axis.len() < 2 || axis.windows(2).any(|w| w[0] >= w[1]) {
        return Err(MapError::BadGrid { what });
    }
    Ok(())
}

fn check_shape(
    table: &[Vec<f64>],
    rows: usize,
    cols: usize,
    what: &'static str,
) -> MapResult<()> {
    if table.len() != rows || table.iter().any(|row| row.len() != cols) {
        return Err(MapError::ShapeMismatch { what, rows, cols });
    }
    Ok(())
}

impl CompressorMap {
    /// Build a map from parsed file data.
    ///
    /// The declared design speed and R-line must match grid points exactly;
    /// the design characteristics are read straight from the arrays at those
    /// indices, never interpolated.
    pub fn new(name: impl Into<String>, file: MapFile) -> MapResult<Self> {
        let MapFile {
            design,
            grid,
            characteristic,
        } = file;

        check_grid(&grid.grid_nc, "corrected speed")?;
        check_grid(&grid.grid_rline, "R-line")?;

        let rows = grid.grid_nc.len();
        let cols = grid.grid_rline.len();
        check_shape(&characteristic.massflow, rows, cols, "mass flow")?;
        check_shape(&characteristic.pressure_ratio, rows, cols, "pressure ratio")?;
        check_shape(&characteristic.isen_efficiency, rows, cols, "efficiency")?;

        let nc_idx = grid
            .grid_nc
            .iter()
            .position(|&v| v == design.des_nc)
            .ok_or(MapError::DesignNotOnGrid {
                axis: "corrected speed",
                value: design.des_nc,
            })?;
        let r_idx = grid
            .grid_rline
            .iter()
            .position(|&v| v == design.des_rline)
            .ok_or(MapError::DesignNotOnGrid {
                axis: "R-line",
                value: design.des_rline,
            })?;

        let mc_des = characteristic.massflow[nc_idx][r_idx];
        let pr_des = characteristic.pressure_ratio[nc_idx][r_idx];
        let eff_des = characteristic.isen_efficiency[nc_idx][r_idx];

        Ok(Self {
            name: name.into(),
            nc_grid: grid.grid_nc,
            r_grid: grid.grid_rline,
            mc: characteristic.massflow,
            pr: characteristic.pressure_ratio,
            eff: characteristic.isen_efficiency,
            nc_des: design.des_nc,
            r_des: design.des_rline,
            mc_des,
            pr_des,
            eff_des,
            s_pr: 1.0,
            s_mc: 1.0,
            s_nc: 1.0,
            s_eff: 1.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First R-line of the grid: the surge boundary.
    pub fn r_surge(&self) -> f64 {
        self.r_grid[0]
    }

    /// Last R-line of the grid: the windmill boundary.
    pub fn r_windmill(&self) -> f64 {
        self.r_grid[self.r_grid.len() - 1]
    }

    pub fn nc_min(&self) -> f64 {
        self.nc_grid[0]
    }

    pub fn nc_max(&self) -> f64 {
        self.nc_grid[self.nc_grid.len() - 1]
    }

    /// Map-referred design values (corrected speed, R-line).
    pub fn design_point(&self) -> (f64, f64) {
        (self.nc_des, self.r_des)
    }

    /// Map-referred design characteristics (mc, pr, eff).
    pub fn design_values(&self) -> (f64, f64, f64) {
        (self.mc_des, self.pr_des, self.eff_des)
    }

    /// Current scaling factors (pr, mc, Nc, eff).
    pub fn scaling(&self) -> (f64, f64, f64, f64) {
        (self.s_pr, self.s_mc, self.s_nc, self.s_eff)
    }

    /// Set the similarity scaling from a design evaluation.
    ///
    /// Fails with a domain error if any map design value would put a zero in
    /// a denominator; nothing is stored in that case.
    pub fn set_scaling(
        &mut self,
        pr_des: f64,
        mc_des: f64,
        nc_des: f64,
        eff_des: f64,
    ) -> MapResult<()> {
        if self.pr_des - 1.0 == 0.0 {
            return Err(MapError::DegenerateDesign {
                what: "pressure ratio (map design value is 1)",
            });
        }
        if self.mc_des == 0.0 {
            return Err(MapError::DegenerateDesign { what: "mass flow" });
        }
        if self.eff_des == 0.0 {
            return Err(MapError::DegenerateDesign { what: "efficiency" });
        }
        if self.nc_des == 0.0 {
            return Err(MapError::DegenerateDesign {
                what: "corrected speed",
            });
        }

        self.s_pr = (pr_des - 1.0) / (self.pr_des - 1.0);
        self.s_mc = mc_des / self.mc_des;
        self.s_eff = eff_des / self.eff_des;
        self.s_nc = nc_des / self.nc_des;
        Ok(())
    }

    fn interp(&self, table: &[Vec<f64>], nc: f64, r: f64) -> f64 {
        interp2(&self.nc_grid, &self.r_grid, table, nc, r)
    }

    /// Surge margin at the de-scaled speed, against scaled surge-line values.
    fn surge_margin(&self, nc_descaled: f64, mc: f64, pr: f64) -> f64 {
        let pr_surge_raw = self.interp(&self.pr, nc_descaled, self.r_surge());
        let mc_surge_raw = self.interp(&self.mc, nc_descaled, self.r_surge());

        let mc_surge = self.s_mc * mc_surge_raw;
        let pr_surge = 1.0 + self.s_pr * (pr_surge_raw - 1.0);

        (pr_surge * mc) / (pr * mc_surge)
    }

    /// Evaluate the map at an engine-referred corrected speed and R-line.
    ///
    /// The speed is de-scaled into map coordinates, the characteristics are
    /// interpolated there, and the results are scaled back out.
    pub fn evaluate(&self, nc: f64, r: f64) -> MapPoint {
        let nc_descaled = nc / self.s_nc;

        let mc_raw = self.interp(&self.mc, nc_descaled, r);
        let pr_raw = self.interp(&self.pr, nc_descaled, r);
        let eff_raw = self.interp(&self.eff, nc_descaled, r);

        let mc = self.s_mc * mc_raw;
        let pr = 1.0 + self.s_pr * (pr_raw - 1.0);
        let eff = self.s_eff * eff_raw;

        let surge_margin = self.surge_margin(nc_descaled, mc, pr);

        MapPoint {
            mc,
            pr,
            eff,
            surge_margin,
        }
    }
}
