//! Labeled key datasets.
//!
//! A dataset is the universe of queried keys plus two disjoint partitions:
//! `train` keys are inserted into every filter, `test` keys never are. The
//! universe may also hold keys that belong to neither partition; positives
//! on those are counted as neither true nor false.

use fnv::FnvHashSet;
use uuid::Uuid;

use crate::config::dataset::DatasetConfig;
use crate::error::{SweepError, SweepResult};

/// Partition a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Inserted into the filter
    Train,
    /// Withheld from the filter
    Test,
    /// Queried but in neither partition
    Unlabeled,
}

/// The keys of one experiment, shared read-only by every trial.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    keys: Vec<String>,
    train: FnvHashSet<String>,
    test: FnvHashSet<String>,
}

impl Dataset {
    /// Generate random unique identifiers according to `config`.
    ///
    /// The first half of the keys goes to `train`, the rest to `test`. With
    /// `reference_layout` the universe starts with one blank key outside both
    /// partitions and the test partition is one key shorter, so the universe
    /// still holds exactly `total_keys` entries.
    pub fn generate(config: &DatasetConfig) -> Self {
        let n = config.total_keys;
        let train_len = n / 2;
        let test_len = if config.reference_layout {
            n.saturating_sub(train_len + 1)
        } else {
            n - train_len
        };

        let mut dataset = Self::default();
        dataset.keys.reserve(n);
        if config.reference_layout {
            dataset.keys.push(String::new());
        }

        for _ in 0..train_len {
            let id = Uuid::new_v4().to_string();
            dataset.train.insert(id.clone());
            dataset.keys.push(id);
        }
        for _ in 0..test_len {
            let id = Uuid::new_v4().to_string();
            dataset.test.insert(id.clone());
            dataset.keys.push(id);
        }

        dataset
    }

    /// Build a dataset from explicit partitions.
    ///
    /// The universe is the train keys followed by the test keys followed by
    /// `unlabeled`. Duplicates within a partition collapse to one entry.
    ///
    /// # Errors
    ///
    /// Fails if a key appears in more than one partition.
    pub fn from_partitions<I, J, U>(train: I, test: J, unlabeled: U) -> SweepResult<Self>
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
        U: IntoIterator<Item = String>,
    {
        let mut dataset = Self::default();

        for key in train {
            if dataset.train.insert(key.clone()) {
                dataset.keys.push(key);
            }
        }
        for key in test {
            if dataset.train.contains(&key) {
                return Err(SweepError::Custom(format!(
                    "key {key:?} appears in both train and test partitions"
                )));
            }
            if dataset.test.insert(key.clone()) {
                dataset.keys.push(key);
            }
        }
        let mut seen = FnvHashSet::default();
        for key in unlabeled {
            if dataset.train.contains(&key) || dataset.test.contains(&key) {
                return Err(SweepError::Custom(format!(
                    "unlabeled key {key:?} is already partitioned"
                )));
            }
            if seen.insert(key.clone()) {
                dataset.keys.push(key);
            }
        }

        Ok(dataset)
    }

    /// Every queried key, in generation order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Keys inserted into the filter.
    pub fn train(&self) -> &FnvHashSet<String> {
        &self.train
    }

    /// Keys withheld from the filter.
    pub fn test(&self) -> &FnvHashSet<String> {
        &self.test
    }

    /// Size of the universe.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Which partition `key` belongs to.
    pub fn membership(&self, key: &str) -> Membership {
        if self.train.contains(key) {
            Membership::Train
        } else if self.test.contains(key) {
            Membership::Test
        } else {
            Membership::Unlabeled
        }
    }
}
