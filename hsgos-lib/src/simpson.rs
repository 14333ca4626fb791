//! Composite Simpson integration on irregular grids.

/// Integrate samples `y` over abscissae `x` (same length, increasing).
///
/// Pairs of intervals are integrated with the irregular-spacing Simpson
/// rule. With an even number of samples, the last interval is integrated
/// over the parabola through the last three samples. Two samples fall back
/// to the trapezoid rule; fewer give zero.
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len().min(x.len());
    match n {
        0 | 1 => 0.0,
        2 => 0.5 * (x[1] - x[0]) * (y[0] + y[1]),
        _ if n % 2 == 1 => simpson_pairs(&y[..n], &x[..n]),
        _ => simpson_pairs(&y[..n - 1], &x[..n - 1]) + last_interval(&y[n - 3..n], &x[n - 3..n]),
    }
}

fn simpson_pairs(y: &[f64], x: &[f64]) -> f64 {
    (0..y.len() - 2)
        .step_by(2)
        .map(|i| {
            let h0 = x[i + 1] - x[i];
            let h1 = x[i + 2] - x[i + 1];
            let hsum = h0 + h1;
            let ratio = h0 / h1;
            hsum / 6.0
                * (y[i] * (2.0 - 1.0 / ratio)
                    + y[i + 1] * (hsum * hsum / (h0 * h1))
                    + y[i + 2] * (2.0 - ratio))
        })
        .sum()
}

// Integral over [x1, x2] of the parabola through three points.
fn last_interval(y: &[f64], x: &[f64]) -> f64 {
    let h0 = x[1] - x[0];
    let h1 = x[2] - x[1];
    let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h0 + h1));
    let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
    let eta = h1 * h1 * h1 / (6.0 * h0 * (h0 + h1));
    alpha * y[2] + beta * y[1] - eta * y[0]
}
