// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Static Bloom filter.
//!
//! A space-efficient probabilistic set-membership structure: a fixed bit array
//! plus a bank of K independent seeded hash functions. The filter never
//! produces false negatives; its false positive rate depends on the bit array
//! size (m), the number of inserted keys (n) and the number of hash functions
//! (k), following `(1 - e^(-kn/m))^k`.
//!
//! # Features
//!
//! - Seeded MurmurHash3 hash bank, eight functions in the reference configuration.
//! - Insert-only: bits are set, never cleared. No removal, no resizing.
//! - Pluggable hash bank through [`MultiHasher`] for deterministic tests.
//!
//! # Example
//!
//! ```
//! use bloom_sweep_lib::data_structures::bloom_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(10_000).unwrap();
//!
//! filter.add("hello");
//!
//! assert!(filter.exists("hello"));
//! assert!(!filter.exists("world"));
//! ```

// Module declarations
mod bit_array;
mod config;
mod error;
mod filter;
mod hash;

// Re-exports
pub use bit_array::BitArray;
pub use config::{BloomFilterConfig, DEFAULT_HASH_FUNCTIONS, DEFAULT_SEEDS};
pub use error::{BloomFilterError, Result};
pub use filter::{BloomFilter, BloomInfo};
pub use hash::{Murmur3HashBank, MultiHasher};
