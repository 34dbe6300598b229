//! Bloom Sweep Library
//!
//! This library contains a static Bloom filter and the experiment harness that
//! measures it: dataset generation, concurrent per-size trials, and selection
//! of the size with the lowest false positive percentage. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures::bloom_filter` - bit array, seeded hash bank and filter
//! - `experiment` - dataset, trial, report and the fan-out/fan-in sweep
//! - `config` - layered file/environment configuration with validation
//! - `error` - crate-wide error type and error reporting

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod experiment;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Bloom sweep experiment.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
