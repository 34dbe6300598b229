//! Data structures for the Bloom sweep experiment.
//!
//! This module contains the probabilistic membership structure measured by the
//! experiment harness. Implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-owner mutation, no interior locking
//! - Deterministic behaviour for a fixed configuration

pub mod bloom_filter;

// Re-export common data structures
pub use bloom_filter::{BloomFilter, BloomFilterConfig, BloomFilterError, BloomInfo};
