//! Trial records and the best-configuration report.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::data_structures::bloom_filter::BloomInfo;
use crate::error::SweepResult;

/// Banner framing the best record in the printed report.
pub const BEST_BANNER: &str = "========= BEST BLOOM FILTER =========";

/// Outcome of one filter size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialResult {
    /// Configuration of the measured filter
    pub bloom_info: BloomInfo,

    /// Withheld keys the filter reported as present
    pub false_positives: usize,

    /// `100 * false_positives / queried`
    pub percentage_false_positives: f64,

    /// Inserted keys the filter reported as present
    #[serde(skip)]
    pub true_positives: usize,

    /// Number of keys queried
    #[serde(skip)]
    pub queried: usize,
}

impl TrialResult {
    /// Build a record from raw counts.
    pub fn new(bloom_info: BloomInfo, true_positives: usize, false_positives: usize, queried: usize) -> Self {
        let percentage_false_positives = if queried == 0 {
            0.0
        } else {
            100.0 * false_positives as f64 / queried as f64
        };
        Self {
            bloom_info,
            false_positives,
            percentage_false_positives,
            true_positives,
            queried,
        }
    }
}

/// All trial records of a sweep plus the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// One record per size, in size order
    pub results: Vec<TrialResult>,

    /// Record with the lowest false positive percentage
    pub best: TrialResult,
}

impl SweepReport {
    /// Write one JSON line per record, then the best record between banners.
    pub fn write_to<W: Write>(&self, mut out: W) -> SweepResult<()> {
        for result in &self.results {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
        }
        writeln!(out, "{BEST_BANNER}")?;
        writeln!(out, "{}", serde_json::to_string(&self.best)?)?;
        writeln!(out, "{BEST_BANNER}")?;
        Ok(())
    }
}

/// Pick the record with the minimum false positive percentage.
///
/// Ties keep the earliest record.
pub fn select_best(results: &[TrialResult]) -> Option<&TrialResult> {
    results.iter().fold(None, |best, candidate| match best {
        Some(current) if current.percentage_false_positives <= candidate.percentage_false_positives => {
            Some(current)
        }
        _ => Some(candidate),
    })
}
