//! Dataset configuration module.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Dataset generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Total number of generated keys, split between train and test
    pub total_keys: usize,

    /// Reproduce the reference key counts: a blank leading key outside both
    /// partitions, `total_keys / 2` train keys and one test key fewer
    pub reference_layout: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            total_keys: 20_000,
            reference_layout: false,
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.total_keys < 2 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dataset.total_keys".to_string(),
                message: "must be at least 2 to fill both partitions".to_string(),
            });
        }
        Ok(())
    }
}
