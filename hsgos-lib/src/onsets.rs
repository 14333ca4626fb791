use std::collections::HashMap;

use crate::conventions::split_combined;
use crate::error::{GosError, Result};

/// Source of edge onset energies, keyed by element symbol and subshell.
pub trait OnsetEnergies {
    /// Onset energy in eV.
    fn onset_energy(&self, element: &str, subshell: &str) -> Result<f64>;
}

impl<T: OnsetEnergies + ?Sized> OnsetEnergies for &T {
    fn onset_energy(&self, element: &str, subshell: &str) -> Result<f64> {
        (**self).onset_energy(element, subshell)
    }
}

/// Map-backed onset energies.
///
/// Combined labels (`L2,3`, `M4,5`, ...) without an entry of their own fall
/// back to the lowest onset among their members.
#[derive(Debug, Clone, Default)]
pub struct EdgeOnsets {
    energies: HashMap<(String, String), f64>,
}

// Onset energies (eV) of commonly quantified EELS edges.
const BUILTIN: &[(&str, &str, f64)] = &[
    ("B", "K", 188.0),
    ("C", "K", 284.0),
    ("N", "K", 401.0),
    ("O", "K", 532.0),
    ("F", "K", 685.0),
    ("Na", "K", 1072.0),
    ("Mg", "K", 1305.0),
    ("Al", "K", 1560.0),
    ("Si", "K", 1839.0),
    ("Al", "L3", 73.0),
    ("Si", "L3", 99.0),
    ("Ti", "L3", 456.0),
    ("Ti", "L2", 462.0),
    ("V", "L3", 513.0),
    ("V", "L2", 521.0),
    ("Cr", "L3", 575.0),
    ("Cr", "L2", 584.0),
    ("Mn", "L3", 640.0),
    ("Mn", "L2", 651.0),
    ("Fe", "L3", 708.0),
    ("Fe", "L2", 721.0),
    ("Co", "L3", 779.0),
    ("Co", "L2", 794.0),
    ("Ni", "L3", 855.0),
    ("Ni", "L2", 872.0),
    ("Cu", "L3", 931.0),
    ("Cu", "L2", 951.0),
];

impl EdgeOnsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of common K and L edges.
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .map(|&(element, subshell, energy)| ((element, subshell), energy))
            .collect()
    }

    pub fn insert(&mut self, element: &str, subshell: &str, energy: f64) -> Option<f64> {
        self.energies
            .insert((element.to_string(), subshell.to_string()), energy)
    }

    pub fn with(mut self, element: &str, subshell: &str, energy: f64) -> Self {
        self.insert(element, subshell, energy);
        self
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    fn get(&self, element: &str, subshell: &str) -> Option<f64> {
        self.energies
            .get(&(element.to_string(), subshell.to_string()))
            .copied()
    }
}

impl<'a> FromIterator<((&'a str, &'a str), f64)> for EdgeOnsets {
    fn from_iter<I: IntoIterator<Item = ((&'a str, &'a str), f64)>>(iter: I) -> Self {
        let mut onsets = Self::new();
        for ((element, subshell), energy) in iter {
            onsets.insert(element, subshell, energy);
        }
        onsets
    }
}

impl OnsetEnergies for EdgeOnsets {
    fn onset_energy(&self, element: &str, subshell: &str) -> Result<f64> {
        if let Some(energy) = self.get(element, subshell) {
            return Ok(energy);
        }
        split_combined(subshell)
            .into_iter()
            .flatten()
            .filter_map(|member| self.get(element, &member))
            .reduce(f64::min)
            .ok_or_else(|| GosError::UnknownEdge {
                element: element.to_string(),
                subshell: subshell.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_light_element_k_edges() {
        let onsets = EdgeOnsets::builtin();
        assert_eq!(onsets.onset_energy("C", "K").unwrap(), 284.0);
        assert_eq!(onsets.onset_energy("O", "K").unwrap(), 532.0);
    }

    #[test]
    fn combined_label_uses_lowest_member() {
        let onsets = EdgeOnsets::builtin();
        assert_eq!(onsets.onset_energy("Fe", "L2,3").unwrap(), 708.0);
    }

    #[test]
    fn explicit_combined_entry_wins() {
        let onsets = EdgeOnsets::new()
            .with("Ti", "L3", 456.0)
            .with("Ti", "L2,3", 455.0);
        assert_eq!(onsets.onset_energy("Ti", "L2,3").unwrap(), 455.0);
    }

    #[test]
    fn missing_edge_is_an_error() {
        let onsets = EdgeOnsets::builtin();
        assert!(matches!(
            onsets.onset_energy("Au", "M5"),
            Err(GosError::UnknownEdge { .. })
        ));
        assert!(onsets.onset_energy("Fe", "M4,5").is_err());
    }
}
