//! Newton iteration with an optional trust-region relaxation.
//!
//! Two variants share one convergence contract: a step is converged when the
//! weighted norm of the most recent correction,
//! `Σ (Δxᵢ / (rel_tol·xᵢ + abs_tol))²`, drops below 1. The plain variant
//! takes full Newton steps; the bounded variant relaxes the step length to
//! stay inside a caller-declared box and to keep correction norms from
//! growing, recomputing the cached Jacobian when relaxation alone stalls.

use crate::error::{SolverError, SolverResult};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace, warn};

/// Newton solver configuration.
#[derive(Clone, Debug)]
pub struct NewtonConfig {
    /// Maximum outer iterations; exhausting this is the only hard failure
    pub max_iterations: usize,
    /// Relative tolerance on each solution component
    pub rel_tol: f64,
    /// Absolute tolerance on each solution component
    pub abs_tol: f64,
    /// Relaxation trials allowed per outer iteration (bounded variant)
    pub trial_max: usize,
    /// Failed trials between Jacobian recomputations (bounded variant)
    pub recalc_every: usize,
    /// Factor the relaxation is divided by on each failed trial
    pub relax_ratio: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            rel_tol: 1e-6,
            abs_tol: 1e-6,
            trial_max: 10,
            recalc_every: 5,
            relax_ratio: std::f64::consts::SQRT_2,
        }
    }
}

/// Newton iteration result.
#[derive(Clone, Debug)]
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Weighted norm of the final correction
    pub norm: f64,
    /// Number of outer iterations taken
    pub iterations: usize,
    /// Number of Jacobian evaluations
    pub jacobian_evals: usize,
}

/// Solve `J·Δx = f` for the correction vector.
///
/// The scalar case divides directly instead of going through a linear solve.
fn newton_step(jac: &DMatrix<f64>, residual: &DVector<f64>) -> SolverResult<DVector<f64>> {
    if jac.nrows() == 1 && jac.ncols() == 1 {
        let j = jac[(0, 0)];
        if j == 0.0 {
            return Err(SolverError::SingularJacobian {
                what: "scalar Jacobian is zero".to_string(),
            });
        }
        return Ok(DVector::from_element(1, residual[0] / j));
    }

    jac.clone()
        .lu()
        .solve(residual)
        .ok_or_else(|| SolverError::SingularJacobian {
            what: format!("LU solve failed for {}x{} Jacobian", jac.nrows(), jac.ncols()),
        })
}

/// Weighted convergence norm evaluated at the new iterate.
fn weighted_norm(dx: &DVector<f64>, x_new: &DVector<f64>, config: &NewtonConfig) -> f64 {
    dx.iter()
        .zip(x_new.iter())
        .map(|(&d, &x)| {
            let w = config.rel_tol * x + config.abs_tol;
            (d / w) * (d / w)
        })
        .sum()
}

fn within_bounds(x: &DVector<f64>, lower: &DVector<f64>, upper: &DVector<f64>) -> bool {
    x.iter()
        .zip(lower.iter().zip(upper.iter()))
        .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
}

/// Plain Newton iteration: full steps, no bounds.
///
/// Residual and Jacobian closures may fail (for example when a trial
/// temperature leaves the valid polynomial range); such errors propagate out
/// of the solve immediately.
pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    mut residual_fn: F,
    mut jacobian_fn: J,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: FnMut(&DVector<f64>) -> SolverResult<DVector<f64>>,
    J: FnMut(&DVector<f64>) -> SolverResult<DMatrix<f64>>,
{
    let mut x = x0;
    let mut jacobian_evals = 0;

    for iter in 1..=config.max_iterations {
        let jac = jacobian_fn(&x)?;
        jacobian_evals += 1;
        let dx = newton_step(&jac, &residual_fn(&x)?)?;
        let x_new = &x - &dx;
        let norm = weighted_norm(&dx, &x_new, config);
        trace!(iter, norm, "newton step");
        x = x_new;
        if norm < 1.0 {
            debug!(iter, jacobian_evals, "newton converged");
            return Ok(NewtonResult {
                x,
                norm,
                iterations: iter,
                jacobian_evals,
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!("no root after {} iterations", config.max_iterations),
    })
}

/// Relaxed Newton iteration bounded to the box `[lower, upper]`.
///
/// Each outer iteration computes a correction from the cached Jacobian and
/// then searches for a relaxation factor (starting at 1, divided by
/// `relax_ratio` per failed trial) such that the trial point stays inside the
/// box and its own correction norm does not exceed the previous one. Every
/// `recalc_every` failed trials the Jacobian is recomputed at the current
/// iterate and the factor resets. If `trial_max` is exhausted the best
/// available step is taken anyway; only the outer iteration cap fails the
/// solve.
pub fn newton_solve_bounded<F, J>(
    x0: DVector<f64>,
    mut residual_fn: F,
    mut jacobian_fn: J,
    lower: &DVector<f64>,
    upper: &DVector<f64>,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: FnMut(&DVector<f64>) -> SolverResult<DVector<f64>>,
    J: FnMut(&DVector<f64>) -> SolverResult<DMatrix<f64>>,
{
    if lower.len() != x0.len() || upper.len() != x0.len() {
        return Err(SolverError::InvalidArg {
            what: "bound vectors must match the iterate length",
        });
    }
    if !within_bounds(&x0, lower, upper) {
        return Err(SolverError::InvalidArg {
            what: "initial iterate must lie within the bounds",
        });
    }

    let mut x = x0;
    let mut jac = jacobian_fn(&x)?;
    let mut jacobian_evals = 1;

    for iter in 1..=config.max_iterations {
        let mut dx = newton_step(&jac, &residual_fn(&x)?)?;
        let mut relax = 1.0_f64;
        let mut trials = 0_usize;

        let (x_new, dx_new) = loop {
            let candidate = &x - &dx * relax;
            let in_bounds = within_bounds(&candidate, lower, upper);
            let candidate_dx = if in_bounds {
                let d = newton_step(&jac, &residual_fn(&candidate)?)?;
                if d.norm() <= dx.norm() {
                    break (candidate, d);
                }
                Some(d)
            } else {
                None
            };

            trials += 1;
            if trials >= config.trial_max {
                warn!(iter, trials, relax, "trial budget exhausted, taking relaxed step anyway");
                let d = match candidate_dx {
                    Some(d) => d,
                    None => newton_step(&jac, &residual_fn(&candidate)?)?,
                };
                break (candidate, d);
            }

            if trials % config.recalc_every == 0 {
                jac = jacobian_fn(&x)?;
                jacobian_evals += 1;
                dx = newton_step(&jac, &residual_fn(&x)?)?;
                relax = 1.0;
                trace!(iter, trials, "recomputed Jacobian at current iterate");
            } else {
                relax /= config.relax_ratio;
            }
        };

        let norm = weighted_norm(&dx_new, &x_new, config);
        trace!(iter, norm, relax, "relaxed newton step");
        x = x_new;
        if norm < 1.0 {
            debug!(iter, jacobian_evals, "relaxed newton converged");
            return Ok(NewtonResult {
                x,
                norm,
                iterations: iter,
                jacobian_evals,
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!("no root after {} iterations", config.max_iterations),
    })
}
