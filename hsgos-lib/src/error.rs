use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GosError {
    #[error("unknown subshell: {0}")]
    UnknownSubshell(String),

    #[error("no onset energy for subshell '{subshell}' of element '{element}'")]
    UnknownEdge { element: String, subshell: String },

    #[error("invalid element_subshell identifier: '{0}' (expected e.g. 'Ti_L3')")]
    InvalidIdentifier(String),

    #[error(
        "parametrized Hartree-Slater GOS files not found in {path}; \
         set a valid data directory (EELS_GOS_FILES_PATH)"
    )]
    DataDirectoryNotFound { path: PathBuf },

    #[error("GOS table file not found: {path}")]
    TableFileNotFound { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed GOS table {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    #[error(
        "q range [{qmin}, {qmax}] at energy index {index} exceeds tabulated range [{min}, {max}]"
    )]
    QOutOfRange {
        index: usize,
        qmin: f64,
        qmax: f64,
        min: f64,
        max: f64,
    },

    #[error("{axis} axis has {len} samples, at least {required} are needed")]
    DegenerateGrid {
        axis: &'static str,
        len: usize,
        required: usize,
    },

    #[error("energy {energy} eV out of range [{min}, {max}]")]
    EnergyOutOfRange { energy: f64, min: f64, max: f64 },

    #[error("GOS record encoding failed: {0}")]
    Encoding(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, GosError>;
