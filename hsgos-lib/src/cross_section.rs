//! Energy-differential ionization cross sections from a GOS table.

use std::f64::consts::PI;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{BOHR_RADIUS_M, M2_TO_BARN, RYDBERG_EV};
use crate::error::{GosError, Result};
use crate::interp::{extrapolate_one, interp_one};
use crate::kinematics::Kinematics;
use crate::simpson::simpson;
use crate::spline::CubicSpline;
use crate::table::GosTable;

/// Minimum number of tabulated q points.
pub const MIN_Q_SAMPLES: usize = 4;

/// What to do when the kinematic q range leaves the tabulated q axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QRangePolicy {
    /// Fail with [`GosError::QOutOfRange`].
    #[default]
    Strict,
    /// Clamp the bounds into the tabulated range.
    Clamp,
    /// Extend the first and last q segments linearly.
    Extrapolate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationOptions {
    pub q_range_policy: QRangePolicy,
    /// Integrate the energy rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            q_range_policy: QRangePolicy::Strict,
            parallel: true,
        }
    }
}

/// Result of [`integrate`]: cross section at every tabulated energy and
/// the cubic interpolant through them.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    energy_shift: f64,
    spline: CubicSpline,
}

impl CrossSection {
    /// Requested onset minus the table onset (eV).
    pub fn energy_shift(&self) -> f64 {
        self.energy_shift
    }

    /// Tabulated energies moved by [`CrossSection::energy_shift`] (eV).
    pub fn shifted_energy_axis(&self) -> &[f64] {
        self.spline.x()
    }

    /// Cross section at the shifted energies (barn / eV / atom).
    pub fn qint(&self) -> &[f64] {
        self.spline.y()
    }

    pub fn energy_range(&self) -> (f64, f64) {
        self.spline.range()
    }

    /// Interpolated cross section at `energy` (eV).
    pub fn eval(&self, energy: f64) -> Result<f64> {
        self.spline.eval(energy)
    }

    pub fn eval_many(&self, energies: &[f64]) -> Result<Vec<f64>> {
        self.spline.eval_many(energies)
    }
}

/// Cross section with the default options (strict q range, parallel rows).
///
/// * `onset_energy` - onset of the edge in the spectrum (eV); the table is
///   shifted so its onset lands there
/// * `angle` - collection half-angle (rad)
/// * `beam_energy` - incident energy (keV)
pub fn integrate(
    table: &GosTable,
    onset_energy: f64,
    angle: f64,
    beam_energy: f64,
) -> Result<CrossSection> {
    integrate_with(
        table,
        &IntegrationOptions::default(),
        onset_energy,
        angle,
        beam_energy,
    )
}

pub fn integrate_with(
    table: &GosTable,
    options: &IntegrationOptions,
    onset_energy: f64,
    angle: f64,
    beam_energy: f64,
) -> Result<CrossSection> {
    let (nrow, ncol) = table.shape();
    if ncol < MIN_Q_SAMPLES {
        return Err(GosError::DegenerateGrid {
            axis: "q",
            len: ncol,
            required: MIN_Q_SAMPLES,
        });
    }
    if nrow < 2 {
        return Err(GosError::DegenerateGrid {
            axis: "energy",
            len: nrow,
            required: 2,
        });
    }

    let energy_shift = onset_energy - table.onset_energy();
    let kinematics = Kinematics::new(beam_energy);
    debug!(
        element = table.element(),
        subshell = table.subshell(),
        energy_shift,
        angle,
        beam_energy,
        ?options,
        "integrating GOS over q"
    );

    let energies: Vec<f64> = table
        .energy_axis()
        .into_iter()
        .map(|e| e + energy_shift)
        .collect();

    let row_integral = |i: usize| {
        integrate_row(table, i, energies[i], &kinematics, angle, options.q_range_policy)
    };
    let integrals: Vec<f64> = if options.parallel {
        (0..nrow).into_par_iter().map(row_integral).collect::<Result<_>>()?
    } else {
        (0..nrow).map(row_integral).collect::<Result<_>>()?
    };

    let factor = table.subshell_factor().value();
    let qint = integrals
        .iter()
        .zip(&energies)
        .map(|(integral, e)| {
            integral * 4.0 * PI * BOHR_RADIUS_M * BOHR_RADIUS_M * RYDBERG_EV * RYDBERG_EV
                / e
                / kinematics.t
                * factor
                * M2_TO_BARN
        })
        .collect();

    Ok(CrossSection {
        energy_shift,
        spline: CubicSpline::new(energies, qint)?,
    })
}

fn integrate_row(
    table: &GosTable,
    index: usize,
    energy: f64,
    kinematics: &Kinematics,
    angle: f64,
    policy: QRangePolicy,
) -> Result<f64> {
    let bounds = kinematics.q_bounds(energy, angle);
    let (qmin, qmax) = (bounds.qmin(), bounds.qmax());
    if !(qmin.is_finite() && qmax.is_finite()) {
        trace!(index, energy, qmin, qmax, "energy loss not reachable");
        return Ok(f64::NAN);
    }

    let (qaxis, gos) = q_window(table, index, qmin, qmax, policy)?;
    let log_q2: Vec<f64> = qaxis.iter().map(|q| (q * q).ln()).collect();
    Ok(simpson(&gos, &log_q2))
}

/// q samples and GOS values of row `index` between `qmin` and `qmax`
/// (inverse Bohr radius).
///
/// The tabulated points strictly inside the range are kept and the values
/// at the bounds are interpolated linearly. Negative GOS values are
/// clipped to zero.
pub fn q_window(
    table: &GosTable,
    index: usize,
    qmin: f64,
    qmax: f64,
    policy: QRangePolicy,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let axis = table.qaxis();
    let row = table.row(index);
    let (lo, hi) = (axis[0], axis[axis.len() - 1]);

    let (qmin, qmax) = match policy {
        QRangePolicy::Strict if qmin < lo || qmax > hi => {
            return Err(GosError::QOutOfRange {
                index,
                qmin,
                qmax,
                min: lo,
                max: hi,
            });
        }
        QRangePolicy::Clamp => (qmin.clamp(lo, hi), qmax.clamp(lo, hi)),
        _ => (qmin, qmax),
    };
    let value_at = |q: f64| match policy {
        QRangePolicy::Extrapolate => extrapolate_one(q, axis, row),
        _ => interp_one(q, axis, row),
    };

    let inner = axis.partition_point(|&q| q <= qmin)..axis.partition_point(|&q| q < qmax);
    let mut qs = Vec::with_capacity(inner.len() + 2);
    let mut values = Vec::with_capacity(inner.len() + 2);
    qs.push(qmin);
    values.push(value_at(qmin));
    for i in inner {
        qs.push(axis[i]);
        values.push(row[i]);
    }
    qs.push(qmax);
    values.push(value_at(qmax));

    values.iter_mut().for_each(|v| *v = v.max(0.0));
    Ok((qs, values))
}
