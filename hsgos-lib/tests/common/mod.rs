#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::Path;

/// Parametrization close to the distributed Hartree-Slater files:
/// 64 energies up to ~88 eV above onset, 128 q points up to ~170 / a0.
pub const Q_COEFFICIENTS: [f64; 2] = [0.001, 0.1];
pub const Q_COUNT: usize = 128;
pub const ENERGY_COEFFICIENTS: [f64; 2] = [100.0, 1.0];
pub const ENERGY_COUNT: usize = 64;

/// Text of a GOS file with the value of `value(row, column)` in each cell.
pub fn gos_file_content(value: impl Fn(usize, usize) -> f64) -> String {
    let mut content = format!(
        " GOS  HS {} {} x {}\r\n {} {} {}\r\n",
        Q_COEFFICIENTS[0], Q_COEFFICIENTS[1], Q_COUNT, ENERGY_COEFFICIENTS[0],
        ENERGY_COEFFICIENTS[1], ENERGY_COUNT
    );
    for row in 0..ENERGY_COUNT {
        for column in 0..Q_COUNT {
            write!(content, " {:.8e}", value(row, column)).unwrap();
        }
        content.push_str("\r\n");
    }
    content
}

pub fn write_gos_file(dir: &Path, name: &str, value: impl Fn(usize, usize) -> f64) {
    std::fs::write(dir.join(name), gos_file_content(value)).unwrap();
}

/// Smooth, positive GOS decaying with q.
pub fn lorentzian(row: usize, column: usize) -> f64 {
    (1.0 + 0.05 * row as f64) * 5.0 / (1.0 + 0.01 * (column * column) as f64)
}
