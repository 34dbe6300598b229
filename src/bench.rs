//! Benchmarking helpers for the Bloom sweep experiment.
//!
//! Shared fixtures for the Criterion benchmarks, so every benchmark measures
//! the same key shapes as a real sweep.

use crate::experiment::Dataset;

/// Build a deterministic dataset of `n` UUID-shaped keys, split in half.
///
/// # Panics
///
/// Panics if two generated keys collide, which would leave the benchmarks
/// measuring a dataset that is not the one requested.
pub fn uuid_like_dataset(n: usize) -> Dataset {
    let key = |i: usize| format!("{:08x}-0000-4000-8000-{:012x}", i, i.wrapping_mul(2_654_435_761));
    let half = n / 2;
    Dataset::from_partitions((0..half).map(key), (half..n).map(key), std::iter::empty::<String>())
        .expect("bench keys are unique across partitions")
}
