use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cross_section::{IntegrationOptions, QRangePolicy};
use crate::error::{GosError, Result};
use crate::onsets::OnsetEnergies;
use crate::table::GosTable;

/// Environment variable holding the GOS data directory.
pub const DATA_DIR_ENV: &str = "EELS_GOS_FILES_PATH";

/// Where GOS files live and how cross sections are integrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GosConfig {
    pub data_dir: PathBuf,
    #[serde(default)]
    pub q_range_policy: QRangePolicy,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl GosConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            q_range_policy: QRangePolicy::default(),
            parallel: default_parallel(),
        }
    }

    /// Data directory from `EELS_GOS_FILES_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        match lookup(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Err(GosError::DataDirectoryNotFound {
                path: PathBuf::from(format!("${DATA_DIR_ENV}")),
            }),
        }
    }

    pub fn with_q_range_policy(mut self, policy: QRangePolicy) -> Self {
        self.q_range_policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn integration_options(&self) -> IntegrationOptions {
        IntegrationOptions {
            q_range_policy: self.q_range_policy,
            parallel: self.parallel,
        }
    }

    pub fn load_table(
        &self,
        element: &str,
        subshell: &str,
        onsets: impl OnsetEnergies,
    ) -> Result<GosTable> {
        GosTable::load(element, subshell, &self.data_dir, onsets)
    }
}
