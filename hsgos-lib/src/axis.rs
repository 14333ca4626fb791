//! Axis parametrizations of the Hartree-Slater GOS files.

use crate::constants::{BOHR_RADIUS_M, PER_ANGSTROM_TO_PER_M};

/// Energy loss above the onset (eV): `k1 * (exp(i * k2 / k1) - 1)`.
pub fn parametrized_energy_axis(k1: f64, k2: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| k1 * ((i as f64 * k2 / k1).exp() - 1.0))
        .collect()
}

/// Momentum transfer in inverse metres: `k1 * (exp(i * k2) - 1) * 1e10`.
pub fn parametrized_qaxis_per_m(k1: f64, k2: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| k1 * ((i as f64 * k2).exp() - 1.0) * PER_ANGSTROM_TO_PER_M)
        .collect()
}

/// Momentum transfer in units of inverse Bohr radius.
pub fn parametrized_qaxis(k1: f64, k2: f64, n: usize) -> Vec<f64> {
    parametrized_qaxis_per_m(k1, k2, n)
        .into_iter()
        .map(|q| q * BOHR_RADIUS_M)
        .collect()
}

pub(crate) fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
