//! Subshell naming conventions of the Hartree-Slater GOS files.
//!
//! Only one representative edge per family is tabulated (L3, M5, N7, ...).
//! The other members of the family, and the combined edges, are scaled
//! copies of it, with the factor given by the ratio of subshell occupancies.

use crate::error::{GosError, Result};

/// Rational scale factor applied to the tabulated edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubshellFactor {
    pub numerator: u32,
    pub denominator: u32,
}

impl SubshellFactor {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn value(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// Physical table and scale factor for one subshell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    /// File extension of the tabulated edge, e.g. `L3` in `Ti.L3`.
    pub table: &'static str,
    pub factor: SubshellFactor,
}

const fn entry(
    label: &'static str,
    table: &'static str,
    numerator: u32,
    denominator: u32,
) -> (&'static str, Convention) {
    (
        label,
        Convention {
            table,
            factor: SubshellFactor::new(numerator, denominator),
        },
    )
}

static CONVENTIONS: &[(&str, Convention)] = &[
    entry("K", "K1", 1, 1),
    entry("L1", "L1", 1, 1),
    entry("L2,3", "L3", 3, 2),
    entry("L2", "L3", 1, 2),
    entry("L3", "L3", 1, 1),
    entry("M1", "M1", 1, 1),
    entry("M2,3", "M3", 3, 2),
    entry("M2", "M3", 1, 2),
    entry("M3", "M3", 1, 1),
    entry("M4,5", "M5", 5, 3),
    entry("M4", "M5", 2, 3),
    entry("M5", "M5", 1, 1),
    entry("N1", "N1", 1, 1),
    entry("N2,3", "N3", 3, 2),
    entry("N2", "N3", 1, 2),
    entry("N3", "N3", 1, 1),
    entry("N4,5", "N5", 5, 3),
    entry("N4", "N5", 2, 3),
    entry("N5", "N5", 1, 1),
    entry("N6,7", "N7", 7, 4),
    entry("N6", "N7", 3, 4),
    entry("N7", "N7", 1, 1),
    entry("O1", "O1", 1, 1),
    entry("O2,3", "O3", 3, 2),
    entry("O2", "O3", 1, 2),
    entry("O3", "O3", 1, 1),
    entry("O4,5", "O5", 5, 3),
    entry("O4", "O5", 2, 3),
    entry("O5", "O5", 1, 1),
];

/// Map a subshell label (`K`, `L2,3`, `M5`, ...) to its table and factor.
pub fn resolve(subshell: &str) -> Result<Convention> {
    CONVENTIONS
        .iter()
        .find(|(label, _)| *label == subshell)
        .map(|(_, convention)| *convention)
        .ok_or_else(|| GosError::UnknownSubshell(subshell.to_string()))
}

/// All supported subshell labels, in table order.
pub fn supported_subshells() -> impl Iterator<Item = &'static str> {
    CONVENTIONS.iter().map(|(label, _)| *label)
}

/// Split a combined label such as `L2,3` into `["L2", "L3"]`.
///
/// Returns `None` for single-edge labels.
pub fn split_combined(subshell: &str) -> Option<[String; 2]> {
    let (first, last) = subshell.split_once(',')?;
    let shell = first.chars().next()?;
    Some([first.to_string(), format!("{shell}{last}")])
}
