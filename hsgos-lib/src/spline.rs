use crate::error::{GosError, Result};

/// Cubic spline evaluation from pre-computed second derivatives.
///
/// # Arguments
/// * `xin` - Input x values (must be strictly increasing)
/// * `yin` - Input y values
/// * `yspl` - Second derivatives of y at `xin`
/// * `x` - Point to interpolate at
pub fn spline_eval(xin: &[f64], yin: &[f64], yspl: &[f64], x: f64) -> f64 {
    let hi = match xin.partition_point(|&v| v < x) {
        i if i >= xin.len() => xin.len() - 1,
        0 => 1.min(xin.len() - 1),
        i => i,
    };
    let lo = hi - 1;

    let diff = xin[hi] - xin[lo];
    debug_assert!(diff > 0.0, "xin must be strictly increasing");

    let a = (xin[hi] - x) / diff;
    let b = (x - xin[lo]) / diff;

    a * yin[lo]
        + b * yin[hi]
        + (diff * diff / 6.0) * ((a * a - 1.0) * a * yspl[lo] + (b * b - 1.0) * b * yspl[hi])
}

/// Interpolating cubic spline with not-a-knot end conditions.
///
/// Three knots give the interpolating parabola and two give a line, the
/// limits of the not-a-knot conditions for short inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl CubicSpline {
    /// `x` must be strictly increasing and have the length of `y`.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() < 2 {
            return Err(GosError::DegenerateGrid {
                axis: "energy",
                len: x.len(),
                required: 2,
            });
        }
        debug_assert_eq!(x.len(), y.len());
        let second_derivatives = not_a_knot_second_derivatives(&x, &y);
        Ok(Self {
            x,
            y,
            second_derivatives,
        })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn range(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluate at `x`; points outside the knot range are an error.
    pub fn eval(&self, x: f64) -> Result<f64> {
        let (min, max) = self.range();
        if !(min..=max).contains(&x) {
            return Err(GosError::EnergyOutOfRange {
                energy: x,
                min,
                max,
            });
        }
        Ok(spline_eval(&self.x, &self.y, &self.second_derivatives, x))
    }

    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

fn not_a_knot_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    match n {
        2 => return vec![0.0; 2],
        3 => {
            let curvature = 2.0 * (slope[1] - slope[0]) / (x[2] - x[0]);
            return vec![curvature; 3];
        }
        _ => {}
    }

    // Interior equations for m[1..n-1], with m[0] and m[n-1] eliminated
    // through continuity of the third derivative at x[1] and x[n-2].
    let size = n - 2;
    let mut sub = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size];
    let mut rhs = vec![0.0; size];
    for k in 0..size {
        let i = k + 1;
        sub[k] = h[i - 1];
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        sup[k] = h[i];
        rhs[k] = 6.0 * (slope[i] - slope[i - 1]);
    }

    // m0 = ((h0 + h1) m1 - h0 m2) / h1
    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    sup[0] -= h0 * h0 / h1;

    // m[n-1] = ((a + b) m[n-2] - b m[n-3]) / a, a = h[n-3], b = h[n-2]
    let (a, b) = (h[n - 3], h[n - 2]);
    diag[size - 1] += b * (a + b) / a;
    sub[size - 1] -= b * b / a;

    let inner = solve_tridiagonal(&sub, &diag, &sup, &rhs);

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * inner[0] - h0 * inner[1]) / h1);
    m.extend_from_slice(&inner);
    m.push(((a + b) * inner[size - 1] - b * inner[size - 2]) / a);
    m
}

// Thomas algorithm; `sub[0]` and `sup[last]` are ignored.
fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    c[0] = sup[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / denom;
    }
    let mut out = vec![0.0; n];
    out[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = d[i] - c[i] * out[i + 1];
    }
    out
}
