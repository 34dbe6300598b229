//! Test modules for the Bloom sweep experiment.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Bloom filter properties (no false negatives, monotonicity, determinism)
//! - Shared fixtures and proptest strategies

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, keys_strategy, TestFixture};
