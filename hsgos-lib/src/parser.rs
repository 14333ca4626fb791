//! Positional parser for parametrized Hartree-Slater GOS files.
//!
//! Layout of the whitespace-separated tokens:
//!
//! | index | content |
//! |-------|---------|
//! | 2, 3  | q-axis coefficients |
//! | 5     | number of q points (columns) |
//! | 6, 7  | energy-axis coefficients |
//! | 8     | number of energies (rows) |
//! | 9..   | GOS matrix, row-major |
//!
//! Tokens 0, 1 and 4 are not used.

use std::path::Path;

use hsgos_data::GosHeader;

use crate::constants::RYDBERG_EV;
use crate::error::{GosError, Result};

pub const HEADER_TOKENS: usize = 9;

/// Parse the content of a GOS file into its header and the GOS matrix.
///
/// Matrix values are divided by the Rydberg energy, the convention the
/// tables were written with.
pub fn parse_gos_table(content: &str, path: &Path) -> Result<(GosHeader, Vec<f64>)> {
    let malformed = |reason: String| GosError::MalformedTable {
        path: path.to_path_buf(),
        reason,
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() < HEADER_TOKENS {
        return Err(malformed(format!(
            "expected at least {HEADER_TOKENS} header tokens, found {}",
            tokens.len()
        )));
    }

    let float_at = |index: usize| -> Result<f64> {
        tokens[index].parse::<f64>().map_err(|_| {
            malformed(format!(
                "token {index} is not a number: '{}'",
                tokens[index]
            ))
        })
    };
    let count_at = |index: usize| -> Result<usize> {
        tokens[index].parse::<usize>().map_err(|_| {
            malformed(format!(
                "token {index} is not a point count: '{}'",
                tokens[index]
            ))
        })
    };

    let header = GosHeader {
        q_coefficients: [float_at(2)?, float_at(3)?],
        q_count: count_at(5)?,
        energy_coefficients: [float_at(6)?, float_at(7)?],
        energy_count: count_at(8)?,
    };

    let expected = header
        .energy_count
        .checked_mul(header.q_count)
        .and_then(|cells| cells.checked_add(HEADER_TOKENS))
        .ok_or_else(|| malformed("declared table size overflows".to_string()))?;
    if tokens.len() != expected {
        return Err(malformed(format!(
            "expected {expected} tokens for a {}x{} table, found {}",
            header.energy_count,
            header.q_count,
            tokens.len()
        )));
    }

    let gos = tokens[HEADER_TOKENS..]
        .iter()
        .enumerate()
        .map(|(offset, token)| {
            token
                .parse::<f64>()
                .map(|value| value / RYDBERG_EV)
                .map_err(|_| {
                    malformed(format!(
                        "token {} is not a number: '{token}'",
                        offset + HEADER_TOKENS
                    ))
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok((header, gos))
}
