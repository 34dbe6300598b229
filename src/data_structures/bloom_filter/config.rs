// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Bloom filter.

use crate::data_structures::bloom_filter::error::{BloomFilterError, Result};

/// Number of hash functions in the reference configuration.
pub const DEFAULT_HASH_FUNCTIONS: usize = 8;

/// Seeds of the reference hash bank, one per hash function.
pub const DEFAULT_SEEDS: [u64; DEFAULT_HASH_FUNCTIONS] =
    [11, 31, 131, 989, 1919, 2007, 31313, 9_281_917];

/// Configuration for a single Bloom filter instance.
///
/// A filter is one fixed (size, K) pair: the bit array length and the seeds of
/// its K hash functions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilterConfig {
    /// Length of the bit array, also the modulus for every index
    size: usize,

    /// One seed per hash function
    seeds: Vec<u64>,
}

impl BloomFilterConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - size: 100,000 bits
    /// - seeds: the eight reference seeds
    pub fn new() -> Self {
        Self {
            size: 100_000,
            seeds: DEFAULT_SEEDS.to_vec(),
        }
    }

    /// Set the bit array length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Replace the hash bank seeds. The number of seeds sets K.
    pub fn with_seeds(mut self, seeds: impl Into<Vec<u64>>) -> Self {
        self.seeds = seeds.into();
        self
    }

    /// Get the bit array length
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Get the hash bank seeds
    pub fn get_seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Get the number of hash functions
    pub fn get_hash_functions(&self) -> usize {
        self.seeds.len()
    }

    /// Check the size. Seeds are checked when the hash bank is built.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BloomFilterError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// Expected false positive probability after `inserted` distinct keys.
    ///
    /// This uses the formula: p = (1 - e^(-k*n/m))^k where:
    /// - m = bit array size
    /// - n = number of inserted keys
    /// - k = number of hash functions
    pub fn expected_false_positive_rate(size: usize, hash_functions: usize, inserted: usize) -> f64 {
        if size == 0 {
            return 1.0;
        }
        let m = size as f64;
        let n = inserted as f64;
        let k = hash_functions as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }

    /// Hash function count minimizing false positives for `size` bits and `inserted` keys.
    ///
    /// This uses the formula: k = (m/n)*ln(2), clamped to at least one.
    pub fn optimal_hash_functions(size: usize, inserted: usize) -> usize {
        if inserted == 0 {
            return 1;
        }
        let k = (size as f64 / inserted as f64) * std::f64::consts::LN_2;
        k.round().max(1.0) as usize
    }
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BloomFilterConfig::default();
        assert_eq!(config.get_size(), 100_000);
        assert_eq!(config.get_hash_functions(), DEFAULT_HASH_FUNCTIONS);
        assert_eq!(config.get_seeds(), &DEFAULT_SEEDS);
    }

    #[test]
    fn test_config_builder() {
        let config = BloomFilterConfig::new()
            .with_size(4096)
            .with_seeds(vec![1, 2, 3]);

        assert_eq!(config.get_size(), 4096);
        assert_eq!(config.get_hash_functions(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = BloomFilterConfig::new().with_size(0);
        assert_eq!(config.validate(), Err(BloomFilterError::InvalidSize(0)));
    }

    #[test]
    fn test_expected_false_positive_rate() {
        // Nothing inserted: nothing can collide
        assert_eq!(BloomFilterConfig::expected_false_positive_rate(1000, 8, 0), 0.0);

        let expected = (1.0 - (-8.0f64 * 10_000.0 / 100_000.0).exp()).powf(8.0);
        let actual = BloomFilterConfig::expected_false_positive_rate(100_000, 8, 10_000);
        assert!((actual - expected).abs() < 1e-12);

        // Larger arrays lower the rate for the same load
        let small = BloomFilterConfig::expected_false_positive_rate(1_000, 8, 10_000);
        assert!(actual < small);
    }

    #[test]
    fn test_optimal_hash_functions() {
        // k = (m/n) ln 2 = 10 * 0.693 = 6.93
        assert_eq!(BloomFilterConfig::optimal_hash_functions(100_000, 10_000), 7);
        assert_eq!(BloomFilterConfig::optimal_hash_functions(91_000, 10_000), 6);
        assert_eq!(BloomFilterConfig::optimal_hash_functions(100, 10_000), 1);
        assert_eq!(BloomFilterConfig::optimal_hash_functions(100, 0), 1);
    }
}
