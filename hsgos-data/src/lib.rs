#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Positional header of a parametrized Hartree-Slater GOS file.
///
/// The two axes are not stored point by point: each one is generated from
/// two coefficients and a point count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GosHeader {
    pub q_coefficients: [f64; 2],
    pub q_count: usize,
    pub energy_coefficients: [f64; 2],
    pub energy_count: usize,
}

/// Portable form of a GOS table, without anything derived from the
/// onset-energy lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GosRecord {
    pub element: String,
    pub subshell: String,
    /// Energy loss relative to the edge onset (eV).
    pub rel_energy_axis: Vec<f64>,
    /// Momentum transfer in units of inverse Bohr radius.
    pub qaxis: Vec<f64>,
    /// Row-major `rel_energy_axis.len() x qaxis.len()` matrix.
    pub gos: Vec<f64>,
}
