//! Sweep configuration module.
//!
//! This module defines which filter sizes the experiment measures and how many
//! worker threads run the trials.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Size sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First filter size of the range
    pub start: usize,

    /// Distance between consecutive sizes
    pub step: usize,

    /// Inclusive upper bound of the range
    pub end: usize,

    /// Explicit list of sizes, overriding the range when set
    pub sizes: Option<Vec<usize>>,

    /// Maximum number of trials running at once, also the runtime's worker
    /// and blocking thread count
    pub worker_threads: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 1_000,
            step: 10_000,
            end: 100_000,
            sizes: None,
            worker_threads: num_cpus::get(),
        }
    }
}

impl SweepConfig {
    /// Filter sizes to measure, in ascending trial order.
    ///
    /// An explicit list is sorted and duplicate sizes collapse to one trial.
    pub fn sizes(&self) -> Vec<usize> {
        match &self.sizes {
            Some(sizes) => {
                let mut sizes = sizes.clone();
                sizes.sort_unstable();
                sizes.dedup();
                sizes
            }
            None => (self.start..=self.end).step_by(self.step.max(1)).collect(),
        }
    }
}

impl Validate for SweepConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if let Some(sizes) = &self.sizes {
            if sizes.is_empty() {
                return Err(ConfigError::ValidationError(
                    "sizes must not be empty when set".to_string(),
                ));
            }
            if sizes.contains(&0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: "sweep.sizes".to_string(),
                    message: "every size must be greater than 0".to_string(),
                });
            }
            return Ok(());
        }

        if self.start == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "sweep.start".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.step == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "sweep.step".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.end < self.start {
            return Err(ConfigError::ValueOutOfRange {
                key: "sweep.end".to_string(),
                message: format!("must be at least start ({})", self.start),
            });
        }

        Ok(())
    }
}
