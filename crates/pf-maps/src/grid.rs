//! Bilinear interpolation on a rectilinear grid.
//!
//! Points beyond the grid are extrapolated linearly from the nearest edge
//! cell, matching how the characteristic tables are meant to behave slightly
//! past their surveyed envelope.

/// Index of the segment of `axis` used for (extra)polation at `x`.
///
/// Clamped to `[0, axis.len() - 2]`; callers guarantee `axis.len() >= 2`.
pub(crate) fn segment(axis: &[f64], x: f64) -> usize {
    let i = axis.partition_point(|&v| v <= x);
    i.saturating_sub(1).min(axis.len() - 2)
}

/// Bilinear interpolation of `z[i][j]` over (`xs[i]`, `ys[j]`) at (x, y).
pub fn interp2(xs: &[f64], ys: &[f64], z: &[Vec<f64>], x: f64, y: f64) -> f64 {
    let i = segment(xs, x);
    let j = segment(ys, y);

    // Fractions may fall outside [0, 1]: that is linear extrapolation
    let fx = (x - xs[i]) / (xs[i + 1] - xs[i]);
    let fy = (y - ys[j]) / (ys[j + 1] - ys[j]);

    let z00 = z[i][j];
    let z10 = z[i + 1][j];
    let z01 = z[i][j + 1];
    let z11 = z[i + 1][j + 1];

    let low = z00 + (z10 - z00) * fx;
    let high = z01 + (z11 - z01) * fx;
    low + (high - low) * fy
}
