// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing utilities for the Bloom filter.
//!
//! A hash bank maps one key to K independent 64-bit digests. The default bank
//! runs seeded MurmurHash3 (x64, 128-bit) once per seed and keeps the low half
//! of the result. Every digest is a one-shot call, so no hasher state survives
//! between keys.

use fnv::FnvHashSet;

use crate::data_structures::bloom_filter::error::{BloomFilterError, Result};

/// A trait for computing multiple independent digests from a single key.
pub trait MultiHasher {
    /// Number of hash functions in the bank (K).
    fn hash_count(&self) -> usize;

    /// Compute the digest of `key` under hash function `index`.
    ///
    /// # Arguments
    ///
    /// * `key` - Raw key bytes, possibly empty
    /// * `index` - Hash function index, `0 <= index < hash_count()`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn digest(&self, key: &[u8], index: usize) -> u64;
}

/// A bank of seeded MurmurHash3 x64/128 functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Murmur3HashBank {
    seeds: Vec<u32>,
}

impl Murmur3HashBank {
    /// Build a bank with one hash function per seed.
    ///
    /// Seeds must be non-empty, pairwise distinct, and fit in 32 bits.
    pub fn new(seeds: &[u64]) -> Result<Self> {
        if seeds.is_empty() {
            return Err(BloomFilterError::EmptyHashBank);
        }

        let mut seen = FnvHashSet::default();
        let mut narrowed = Vec::with_capacity(seeds.len());
        for &seed in seeds {
            let seed32 = u32::try_from(seed).map_err(|_| BloomFilterError::UnsupportedSeed(seed))?;
            if !seen.insert(seed32) {
                return Err(BloomFilterError::DuplicateSeed(seed));
            }
            narrowed.push(seed32);
        }

        Ok(Self { seeds: narrowed })
    }
}

impl MultiHasher for Murmur3HashBank {
    fn hash_count(&self) -> usize {
        self.seeds.len()
    }

    fn digest(&self, key: &[u8], index: usize) -> u64 {
        let mut source = key;
        // Reading from a byte slice cannot fail, so the default is unreachable
        let wide = murmur3::murmur3_x64_128(&mut source, self.seeds[index]).unwrap_or_default();
        wide as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SEEDS: [u64; 8] = [11, 31, 131, 989, 1919, 2007, 31313, 9_281_917];

    #[test]
    fn test_multi_hasher() {
        let bank = Murmur3HashBank::new(&SEEDS).unwrap();
        assert_eq!(bank.hash_count(), 8);

        let digests = (0..bank.hash_count())
            .map(|i| bank.digest(b"test_string", i))
            .collect::<HashSet<_>>();

        // Independent seeds should not collide on a 64-bit digest
        assert_eq!(digests.len(), 8);
    }

    #[test]
    fn test_hash_stability() {
        let bank = Murmur3HashBank::new(&SEEDS).unwrap();
        let other = Murmur3HashBank::new(&SEEDS).unwrap();

        for i in 0..bank.hash_count() {
            let first_run = bank.digest(b"stable_hash_test", i);
            let second_run = bank.digest(b"stable_hash_test", i);
            assert_eq!(first_run, second_run);
            assert_eq!(first_run, other.digest(b"stable_hash_test", i));
        }
    }

    #[test]
    fn test_different_inputs_produce_different_hashes() {
        let bank = Murmur3HashBank::new(&SEEDS).unwrap();
        let hashes1 = (0..8).map(|i| bank.digest(b"input1", i)).collect::<Vec<_>>();
        let hashes2 = (0..8).map(|i| bank.digest(b"input2", i)).collect::<Vec<_>>();

        assert_ne!(hashes1, hashes2);
    }

    #[test]
    fn test_digest_is_low_half_of_murmur3() {
        let bank = Murmur3HashBank::new(&SEEDS).unwrap();
        for (i, &seed) in SEEDS.iter().enumerate() {
            let wide = murmur3::murmur3_x64_128(&mut &b"low-half"[..], seed as u32).unwrap();
            assert_eq!(bank.digest(b"low-half", i), wide as u64);
            assert_ne!(bank.digest(b"low-half", i), 0);
        }
    }

    #[test]
    fn test_empty_key_with_zero_seed() {
        // MurmurHash3 of the empty input under seed 0 finalizes to zero
        let bank = Murmur3HashBank::new(&[0]).unwrap();
        assert_eq!(bank.digest(b"", 0), 0);
    }

    #[test]
    fn test_invalid_seeds() {
        assert_eq!(
            Murmur3HashBank::new(&[]),
            Err(BloomFilterError::EmptyHashBank)
        );
        assert_eq!(
            Murmur3HashBank::new(&[11, 31, 11]),
            Err(BloomFilterError::DuplicateSeed(11))
        );
        assert_eq!(
            Murmur3HashBank::new(&[u64::from(u32::MAX) + 1]),
            Err(BloomFilterError::UnsupportedSeed(u64::from(u32::MAX) + 1))
        );
    }

    #[test]
    #[should_panic]
    fn test_digest_index_out_of_range() {
        let bank = Murmur3HashBank::new(&[1, 2]).unwrap();
        bank.digest(b"key", 2);
    }
}
