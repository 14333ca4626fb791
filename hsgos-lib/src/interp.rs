/// Linear interpolation of a single value (equivalent to numpy.interp).
///
/// Values outside the range are clamped to the boundary values.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[xp.len() - 1] {
        return fp[fp.len() - 1];
    }

    let idx = xp.partition_point(|&v| v < x);

    // Check for exact match
    if (xp[idx] - x).abs() < f64::EPSILON * xp[idx].abs() {
        return fp[idx];
    }

    lerp(x, idx - 1, xp, fp)
}

/// Linear interpolation that extends the first and last segments beyond
/// the tabulated range. Needs at least two points.
pub fn extrapolate_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let hi = xp.partition_point(|&v| v < x).clamp(1, xp.len() - 1);
    lerp(x, hi - 1, xp, fp)
}

#[inline]
fn lerp(x: f64, lo: usize, xp: &[f64], fp: &[f64]) -> f64 {
    let t = (x - xp[lo]) / (xp[lo + 1] - xp[lo]);
    fp[lo] + t * (fp[lo + 1] - fp[lo])
}
