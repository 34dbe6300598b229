//! Filter configuration module.
//!
//! Hash bank settings shared by every filter in the sweep. The bit array size
//! comes from the sweep, one filter per size.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::bloom_filter::{
    BloomFilterConfig, Murmur3HashBank, DEFAULT_HASH_FUNCTIONS, DEFAULT_SEEDS,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Hash bank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected number of hash functions; must match the seed count
    pub hash_functions: usize,

    /// One seed per hash function, pairwise distinct
    pub seeds: Vec<u64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            hash_functions: DEFAULT_HASH_FUNCTIONS,
            seeds: DEFAULT_SEEDS.to_vec(),
        }
    }
}

impl FilterConfig {
    /// Build the configuration of one filter of `size` bits.
    pub fn bloom_config(&self, size: usize) -> BloomFilterConfig {
        BloomFilterConfig::new()
            .with_size(size)
            .with_seeds(self.seeds.clone())
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.hash_functions == 0 {
            return Err(ConfigError::ValidationError(
                "hash_functions must be greater than 0".to_string(),
            ));
        }

        if self.seeds.len() != self.hash_functions {
            return Err(ConfigError::ValueOutOfRange {
                key: "filter.seeds".to_string(),
                message: format!(
                    "expected {} seeds, got {}",
                    self.hash_functions,
                    self.seeds.len()
                ),
            });
        }

        Murmur3HashBank::new(&self.seeds)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bloom_config(1_000).get_hash_functions(), 8);
    }

    #[test]
    fn test_seed_count_mismatch() {
        let config = FilterConfig {
            hash_functions: 8,
            seeds: vec![1, 2, 3],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unsupported_seed() {
        let config = FilterConfig {
            hash_functions: 2,
            seeds: vec![1, u64::MAX],
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Unsupported hash seed"));
    }

    #[test]
    fn test_duplicate_seed() {
        let config = FilterConfig {
            hash_functions: 2,
            seeds: vec![7, 7],
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate hash seed 7"));
    }
}
