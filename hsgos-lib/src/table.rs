use std::path::Path;

use hsgos_data::GosRecord;
use tracing::info;

use crate::axis::{is_strictly_increasing, parametrized_energy_axis, parametrized_qaxis};
use crate::conventions::{SubshellFactor, resolve};
use crate::error::{GosError, Result};
use crate::onsets::OnsetEnergies;
use crate::parser::parse_gos_table;

/// Hartree-Slater GOS of one element subshell.
///
/// Immutable once built; the energy axis is derived from the relative axis
/// and the onset energy on every access.
#[derive(Debug, Clone, PartialEq)]
pub struct GosTable {
    element: String,
    subshell: String,
    onset_energy: f64,
    subshell_factor: SubshellFactor,
    rel_energy_axis: Vec<f64>,
    qaxis: Vec<f64>,
    gos: Vec<f64>,
}

impl GosTable {
    /// Build a table from in-memory parts.
    ///
    /// `gos` is row-major with one row per entry of `rel_energy_axis` and
    /// one column per entry of `qaxis` (inverse Bohr radius).
    pub fn new(
        element: &str,
        subshell: &str,
        onset_energy: f64,
        rel_energy_axis: Vec<f64>,
        qaxis: Vec<f64>,
        gos: Vec<f64>,
    ) -> Result<Self> {
        let convention = resolve(subshell)?;
        let table = Self {
            element: element.to_string(),
            subshell: subshell.to_string(),
            onset_energy,
            subshell_factor: convention.factor,
            rel_energy_axis,
            qaxis,
            gos,
        };
        table.validate()?;
        Ok(table)
    }

    /// Load `{element}.{table}` from `data_dir`, where the table name comes
    /// from the subshell conventions.
    pub fn load(
        element: &str,
        subshell: &str,
        data_dir: impl AsRef<Path>,
        onsets: impl OnsetEnergies,
    ) -> Result<Self> {
        let convention = resolve(subshell)?;
        let data_dir = data_dir.as_ref();
        if !data_dir.is_dir() {
            return Err(GosError::DataDirectoryNotFound {
                path: data_dir.to_path_buf(),
            });
        }
        let path = data_dir.join(format!("{element}.{}", convention.table));
        if !path.is_file() {
            return Err(GosError::TableFileNotFound { path });
        }

        let onset_energy = onsets.onset_energy(element, subshell)?;
        info!(
            element,
            subshell,
            onset_energy,
            path = %path.display(),
            "reading Hartree-Slater GOS"
        );

        let content = std::fs::read_to_string(&path).map_err(|source| GosError::Io {
            path: path.clone(),
            source,
        })?;
        let (header, gos) = parse_gos_table(&content, &path)?;

        let [ek1, ek2] = header.energy_coefficients;
        let [qk1, qk2] = header.q_coefficients;
        Self::new(
            element,
            subshell,
            onset_energy,
            parametrized_energy_axis(ek1, ek2, header.energy_count),
            parametrized_qaxis(qk1, qk2, header.q_count),
            gos,
        )
        .map_err(|err| match err {
            GosError::MalformedTable { reason, .. } => GosError::MalformedTable { path, reason },
            other => other,
        })
    }

    /// Load from an identifier of the form `Ti_L3`.
    pub fn from_element_subshell(
        element_subshell: &str,
        data_dir: impl AsRef<Path>,
        onsets: impl OnsetEnergies,
    ) -> Result<Self> {
        let (element, subshell) = split_identifier(element_subshell)?;
        Self::load(element, subshell, data_dir, onsets)
    }

    /// Rebuild from an exported record. The onset energy is looked up again.
    pub fn from_record(record: GosRecord, onsets: impl OnsetEnergies) -> Result<Self> {
        let onset_energy = onsets.onset_energy(&record.element, &record.subshell)?;
        Self::new(
            &record.element,
            &record.subshell,
            onset_energy,
            record.rel_energy_axis,
            record.qaxis,
            record.gos,
        )
    }

    pub fn to_record(&self) -> GosRecord {
        GosRecord {
            element: self.element.clone(),
            subshell: self.subshell.clone(),
            rel_energy_axis: self.rel_energy_axis.clone(),
            qaxis: self.qaxis.clone(),
            gos: self.gos.clone(),
        }
    }

    /// Postcard encoding of [`GosTable::to_record`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(&self.to_record())?)
    }

    pub fn from_bytes(bytes: &[u8], onsets: impl OnsetEnergies) -> Result<Self> {
        let record: GosRecord = postcard::from_bytes(bytes)?;
        Self::from_record(record, onsets)
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn subshell(&self) -> &str {
        &self.subshell
    }

    pub fn onset_energy(&self) -> f64 {
        self.onset_energy
    }

    pub fn subshell_factor(&self) -> SubshellFactor {
        self.subshell_factor
    }

    /// Energy loss relative to the onset (eV).
    pub fn rel_energy_axis(&self) -> &[f64] {
        &self.rel_energy_axis
    }

    /// Absolute energy loss (eV).
    pub fn energy_axis(&self) -> Vec<f64> {
        self.rel_energy_axis
            .iter()
            .map(|e| e + self.onset_energy)
            .collect()
    }

    /// Momentum transfer (inverse Bohr radius).
    pub fn qaxis(&self) -> &[f64] {
        &self.qaxis
    }

    /// (rows, columns) = (energies, q points).
    pub fn shape(&self) -> (usize, usize) {
        (self.rel_energy_axis.len(), self.qaxis.len())
    }

    /// GOS row at energy index `ienergy`.
    pub fn row(&self, ienergy: usize) -> &[f64] {
        let ncol = self.qaxis.len();
        &self.gos[ienergy * ncol..(ienergy + 1) * ncol]
    }

    /// The same table with another onset energy.
    pub fn with_onset_energy(&self, onset_energy: f64) -> Self {
        Self {
            onset_energy,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<()> {
        let malformed = |reason: String| GosError::MalformedTable {
            path: format!("{}.{}", self.element, self.subshell).into(),
            reason,
        };
        let (nrow, ncol) = self.shape();
        if self.gos.len() != nrow * ncol {
            return Err(malformed(format!(
                "{} GOS values for a {nrow}x{ncol} grid",
                self.gos.len()
            )));
        }
        if !is_strictly_increasing(&self.rel_energy_axis) {
            return Err(malformed("energy axis is not strictly increasing".into()));
        }
        if !is_strictly_increasing(&self.qaxis) {
            return Err(malformed("q axis is not strictly increasing".into()));
        }
        if let Some(index) = self.gos.iter().position(|v| !v.is_finite()) {
            return Err(malformed(format!(
                "non-finite GOS value {} at row {}, column {}",
                self.gos[index],
                index / ncol,
                index % ncol
            )));
        }
        if !self.onset_energy.is_finite() {
            return Err(malformed(format!("onset energy {}", self.onset_energy)));
        }
        Ok(())
    }
}

fn split_identifier(element_subshell: &str) -> Result<(&str, &str)> {
    match element_subshell.split_once('_') {
        Some((element, subshell))
            if !element.is_empty() && !subshell.is_empty() && !subshell.contains('_') =>
        {
            Ok((element, subshell))
        }
        _ => Err(GosError::InvalidIdentifier(element_subshell.to_string())),
    }
}
