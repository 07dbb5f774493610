//! Bounded bisection for monotone scalar relations.

use crate::error::{SolverError, SolverResult};

/// Bisection configuration.
#[derive(Clone, Debug)]
pub struct BisectConfig {
    /// Maximum bisection steps
    pub max_iterations: usize,
    /// Relative error allowed between the target and the evaluated value
    pub rel_tol: f64,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            rel_tol: 1e-10,
        }
    }
}

/// Assumed slope sign of the relation over the search interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Monotonic {
    Increasing,
    Decreasing,
}

/// Find `x` in `[lo, hi]` such that `f(x) = target` for a monotone `f`.
///
/// Stops when `|target - f(mid)| / target` falls below the configured
/// tolerance (absolute error when the target is zero). Exhausting the
/// iteration cap is a convergence failure; the interval itself is never
/// shrunk below the caller's bounds.
pub fn bisect<F>(
    mut lo: f64,
    mut hi: f64,
    mut f: F,
    target: f64,
    shape: Monotonic,
    config: &BisectConfig,
) -> SolverResult<f64>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    if !(lo < hi) {
        return Err(SolverError::InvalidArg {
            what: "bisection interval must satisfy lo < hi",
        });
    }

    for _ in 0..config.max_iterations {
        let mid = lo + (hi - lo) / 2.0;
        let value = f(mid)?;

        let err = if target == 0.0 {
            (target - value).abs()
        } else {
            ((target - value) / target).abs()
        };
        if err < config.rel_tol {
            return Ok(mid);
        }

        let go_up = match shape {
            Monotonic::Increasing => value < target,
            Monotonic::Decreasing => value > target,
        };
        if go_up {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "bisection did not converge in {} iterations",
            config.max_iterations
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_square_root() {
        let root = bisect(
            0.0,
            10.0,
            |x| Ok(x * x),
            2.0,
            Monotonic::Increasing,
            &BisectConfig::default(),
        )
        .unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn handles_decreasing_relations() {
        let root = bisect(
            0.1,
            10.0,
            |x| Ok(1.0 / x),
            0.25,
            Monotonic::Decreasing,
            &BisectConfig::default(),
        )
        .unwrap();
        assert!((root - 4.0).abs() < 1e-8);
    }

    #[test]
    fn rejects_empty_interval() {
        let err = bisect(
            1.0,
            1.0,
            |x| Ok(x),
            0.5,
            Monotonic::Increasing,
            &BisectConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::InvalidArg { .. }));
    }

    #[test]
    fn iteration_cap_fails_the_solve() {
        let config = BisectConfig {
            max_iterations: 4,
            rel_tol: 1e-15,
        };
        let err = bisect(0.0, 10.0, |x| Ok(x * x), 2.0, Monotonic::Increasing, &config)
            .unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }

    #[test]
    fn zero_target_uses_absolute_error() {
        let root = bisect(
            -1.0,
            2.0,
            |x| Ok(x),
            0.0,
            Monotonic::Increasing,
            &BisectConfig::default(),
        )
        .unwrap();
        assert!(root.abs() < 1e-9);
    }
}
