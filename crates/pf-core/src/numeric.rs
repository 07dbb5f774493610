use crate::PfError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// Relative/absolute tolerance pair shared by the root finders
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-6,
            rel: 1e-6,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero, as required of absolute
/// temperatures and pressures.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else if v.is_finite() {
        Err(PfError::InvalidArg { what })
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}
