//! Concurrent size sweep.
//!
//! One blocking task per filter size, each owning its filter and returning its
//! record. The tasks share only the read-only dataset; `join_all` is the
//! barrier before aggregation. At most `sweep.worker_threads` trials run at
//! once.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::info;

use crate::config::sweep::SweepConfig;
use crate::config::ExperimentConfig;
use crate::error::{SweepError, SweepResult};
use crate::experiment::dataset::Dataset;
use crate::experiment::report::{select_best, SweepReport, TrialResult};
use crate::experiment::trial::run_trial;

/// Build the multi-threaded runtime sized by the sweep configuration.
///
/// Trials run on the blocking pool, so it is capped at the same count as the
/// worker threads.
pub fn build_runtime(sweep: &SweepConfig) -> SweepResult<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(sweep.worker_threads)
        .max_blocking_threads(sweep.worker_threads)
        .thread_name("bloom-sweep-worker")
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Run one trial per configured size and select the best record.
///
/// Records come back in size order regardless of completion order.
pub async fn run_sweep(config: &ExperimentConfig, dataset: Arc<Dataset>) -> SweepResult<SweepReport> {
    let sizes = config.sweep.sizes();
    info!(
        trials = sizes.len(),
        concurrency = config.sweep.worker_threads,
        "Invoking trials"
    );
    let started = Instant::now();

    let jobs = sizes
        .into_iter()
        .map(|size| {
            let dataset = Arc::clone(&dataset);
            let filter_config = config.filter.clone();
            move || run_trial(size, &filter_config, &dataset)
        })
        .collect::<Vec<_>>();

    let mut results: Vec<TrialResult> = Vec::with_capacity(jobs.len());
    for outcome in join_bounded(jobs, config.sweep.worker_threads).await? {
        results.push(outcome??);
    }

    let best = select_best(&results)
        .cloned()
        .ok_or_else(|| SweepError::Custom("sweep produced no trials".to_string()))?;

    info!(
        trials = results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        best_size = best.bloom_info.size,
        best_percentage = best.percentage_false_positives,
        "Sweep finished"
    );

    Ok(SweepReport { results, best })
}

/// Run every job on the blocking pool, at most `limit` at a time.
///
/// Outcomes keep the order of `jobs`. A job's permit is released when it
/// returns or panics.
pub(crate) async fn join_bounded<F, T>(
    jobs: Vec<F>,
    limit: usize,
) -> SweepResult<Vec<Result<T, JoinError>>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let permits = Arc::new(Semaphore::new(limit.max(1)));
    let mut handles = Vec::with_capacity(jobs.len());

    for job in jobs {
        let permit = Arc::clone(&permits)
            .acquire_owned()
            .await
            .map_err(|e| SweepError::Custom(format!("trial scheduler closed: {e}")))?;
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        }));
    }

    Ok(futures::future::join_all(handles).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_join_bounded_limits_concurrency() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let jobs = (0..8)
            .map(|i| {
                let running = Arc::clone(&running);
                let peak = Arc::clone(&peak);
                move || {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(20));
                    running.fetch_sub(1, Ordering::SeqCst);
                    i
                }
            })
            .collect::<Vec<_>>();

        let outcomes = join_bounded(jobs, 2).await.unwrap();
        let values = outcomes.into_iter().map(|o| o.unwrap()).collect::<Vec<_>>();

        assert_eq!(values, (0..8).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_join_bounded_survives_panicking_job() {
        let jobs: Vec<Box<dyn FnOnce() -> usize + Send>> = vec![
            Box::new(|| panic!("trial exploded")),
            Box::new(|| 7),
        ];

        // With one permit the second job only runs if the first released it
        let outcomes = join_bounded(jobs, 1).await.unwrap();
        assert!(outcomes[0].is_err());
        assert_eq!(*outcomes[1].as_ref().unwrap(), 7);
    }

    #[test]
    fn test_build_runtime_single_thread_sweep() {
        let sweep = SweepConfig {
            sizes: Some(vec![64, 1]),
            worker_threads: 1,
            ..Default::default()
        };
        let mut config = ExperimentConfig::default();
        config.sweep = sweep;

        let dataset = Dataset::from_partitions(
            (0..50).map(|i| format!("in-{i}")),
            (0..50).map(|i| format!("out-{i}")),
            std::iter::empty::<String>(),
        )
        .unwrap();

        let runtime = build_runtime(&config.sweep).unwrap();
        let report = runtime
            .block_on(run_sweep(&config, Arc::new(dataset)))
            .unwrap();

        let sizes = report
            .results
            .iter()
            .map(|r| r.bloom_info.size)
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![1, 64]);
    }
}
