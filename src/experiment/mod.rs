//! Experiment harness.
//!
//! Generates a labeled dataset, measures one Bloom filter per swept size and
//! reports the size with the lowest false positive percentage.

pub mod dataset;
pub mod report;
pub mod runner;
pub mod trial;

use std::sync::Arc;

use tracing::info;

use crate::config::ExperimentConfig;
use crate::error::SweepResult;

pub use dataset::{Dataset, Membership};
pub use report::{select_best, SweepReport, TrialResult, BEST_BANNER};
pub use runner::{build_runtime, run_sweep};
pub use trial::run_trial;

/// Generate the configured dataset and sweep it.
pub async fn run(config: &ExperimentConfig) -> SweepResult<SweepReport> {
    let dataset = Dataset::generate(&config.dataset);
    info!("total dataset size: {}", dataset.len());
    info!("total train.dataset size: {}", dataset.train().len());
    info!("total test.dataset size: {}", dataset.test().len());

    run_sweep(config, Arc::new(dataset)).await
}
