//! A single filter-size trial.

use tracing::debug;

use crate::config::filter::FilterConfig;
use crate::data_structures::bloom_filter::{BloomFilter, BloomFilterConfig};
use crate::error::SweepResult;
use crate::experiment::dataset::{Dataset, Membership};
use crate::experiment::report::TrialResult;

/// Measure one filter of `size` bits against `dataset`.
///
/// Builds a fresh filter, inserts every train key, then queries the whole
/// universe and classifies each positive answer by partition.
pub fn run_trial(size: usize, filter_config: &FilterConfig, dataset: &Dataset) -> SweepResult<TrialResult> {
    let mut filter = BloomFilter::with_config(filter_config.bloom_config(size))?;

    for key in dataset.train() {
        filter.add(key);
    }

    let mut true_positives = 0;
    let mut false_positives = 0;
    for key in dataset.keys() {
        if !filter.exists(key) {
            continue;
        }
        match dataset.membership(key) {
            Membership::Train => true_positives += 1,
            Membership::Test => false_positives += 1,
            Membership::Unlabeled => {}
        }
    }

    let result = TrialResult::new(filter.info(), true_positives, false_positives, dataset.len());

    debug!(
        size,
        true_positives,
        false_positives,
        percentage = result.percentage_false_positives,
        fill_ratio = filter.fill_ratio(),
        expected_rate = filter.estimated_false_positive_rate(dataset.train().len()),
        optimal_hash_functions = BloomFilterConfig::optimal_hash_functions(size, dataset.train().len()),
        "Trial finished"
    );

    Ok(result)
}
