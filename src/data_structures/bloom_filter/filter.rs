// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Bloom filter.

use serde::{Deserialize, Serialize};

use crate::data_structures::bloom_filter::bit_array::BitArray;
use crate::data_structures::bloom_filter::config::BloomFilterConfig;
use crate::data_structures::bloom_filter::error::{BloomFilterError, Result};
use crate::data_structures::bloom_filter::hash::{Murmur3HashBank, MultiHasher};

/// Read-only descriptor of a filter's configuration, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomInfo {
    /// Bit array length
    pub size: usize,
    /// Number of hash functions (K)
    pub total_hash_funcs: usize,
}

/// A static, insert-only Bloom filter.
///
/// Every key is mapped to K bit positions, one per hash function, by reducing
/// each digest modulo the bit array length. `add` sets those bits and `exists`
/// reports whether all of them are set. Bits are never cleared, so a key that
/// was added is always reported as present; keys that were never added may be
/// reported present too (a false positive).
///
/// # Type Parameters
///
/// * `H` - The hash bank. Defaults to seeded MurmurHash3.
///
/// # Examples
///
/// ```
/// use bloom_sweep_lib::data_structures::bloom_filter::{BloomFilter, BloomFilterConfig};
///
/// let mut filter = BloomFilter::new(1_000).unwrap();
/// filter.add("hello_world");
///
/// assert!(filter.exists("hello_world"));
/// assert_eq!(filter.info().total_hash_funcs, 8);
///
/// let config = BloomFilterConfig::new()
///     .with_size(50_000)
///     .with_seeds(vec![7, 42, 1337]);
/// let custom_filter = BloomFilter::with_config(config).unwrap();
/// assert_eq!(custom_filter.info().total_hash_funcs, 3);
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Murmur3HashBank> {
    /// Membership bits
    bits: BitArray,

    /// Hash bank computing the K digests of a key
    hasher: H,
}

impl BloomFilter {
    /// Create a filter of `size` bits with the reference hash bank.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(BloomFilterConfig::new().with_size(size))
    }

    /// Create a filter from the given configuration.
    pub fn with_config(config: BloomFilterConfig) -> Result<Self> {
        config.validate()?;
        let hasher = Murmur3HashBank::new(config.get_seeds())?;
        Self::with_hasher(config.get_size(), hasher)
    }
}

impl<H: MultiHasher> BloomFilter<H> {
    /// Create a filter of `size` bits on top of a custom hash bank.
    pub fn with_hasher(size: usize, hasher: H) -> Result<Self> {
        if size == 0 {
            return Err(BloomFilterError::InvalidSize(size));
        }
        if hasher.hash_count() == 0 {
            return Err(BloomFilterError::EmptyHashBank);
        }
        Ok(Self {
            bits: BitArray::new(size),
            hasher,
        })
    }

    /// Insert a key into the filter.
    ///
    /// # Returns
    ///
    /// `true` if the insertion changed the filter, `false` if all of the key's
    /// bits were already set.
    pub fn add<K: AsRef<[u8]>>(&mut self, key: K) -> bool {
        let key = key.as_ref();
        let mut changed = false;
        for i in 0..self.hasher.hash_count() {
            let index = self.index_of(key, i);
            changed |= self.bits.set(index);
        }
        changed
    }

    /// Returns true if the filter might contain the key.
    ///
    /// False positives are possible, but false negatives are not.
    pub fn exists<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.first_unset_index(key).is_none()
    }

    /// Returns the first bit position that proves the key was never added.
    ///
    /// Positions are probed in hash function order and the probe stops at the
    /// first clear bit. `None` means every position is set and the key may be
    /// present.
    pub fn first_unset_index<K: AsRef<[u8]>>(&self, key: K) -> Option<usize> {
        let key = key.as_ref();
        (0..self.hasher.hash_count())
            .map(|i| self.index_of(key, i))
            .find(|&index| !self.bits.test(index))
    }

    /// Describe this filter's configuration.
    pub fn info(&self) -> BloomInfo {
        BloomInfo {
            size: self.bits.len(),
            total_hash_funcs: self.hasher.hash_count(),
        }
    }

    /// Get the fraction of bits currently set, between 0.0 and 1.0.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Number of bits currently set.
    pub fn set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Theoretical false positive probability once `inserted` distinct keys were added.
    pub fn estimated_false_positive_rate(&self, inserted: usize) -> f64 {
        BloomFilterConfig::expected_false_positive_rate(
            self.bits.len(),
            self.hasher.hash_count(),
            inserted,
        )
    }

    fn index_of(&self, key: &[u8], hash_fn: usize) -> usize {
        (self.hasher.digest(key, hash_fn) % self.bits.len() as u64) as usize
    }
}
