//! Trial data model
//!
//! A [`Trial`] is one independent training run: a step series, the overall
//! accuracy recorded at each step, and one accuracy series per condition.
//! A [`TrialSet`] maps original trial indices to trials. Trials can only be
//! removed from a set once it has been built, and removal never renumbers
//! the trials that remain.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Name of the overall accuracy series
pub const TOTAL_ACCURACY: &str = "total_accuracy";

/// One training run's recorded accuracy curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    steps: Vec<u64>,
    total_accuracy: Vec<f64>,
    conditions: BTreeMap<String, Vec<f64>>,
}

impl Trial {
    /// Create a trial from its step series and overall accuracy series
    ///
    /// Lengths are not checked here; see [`Trial::validate`].
    pub fn new(steps: Vec<u64>, total_accuracy: Vec<f64>) -> Self {
        Self {
            steps,
            total_accuracy,
            conditions: BTreeMap::new(),
        }
    }

    /// Add (or replace) the accuracy series of one condition
    pub fn with_condition(mut self, name: impl Into<String>, accuracy: Vec<f64>) -> Self {
        self.insert_condition(name, accuracy);
        self
    }

    /// Add (or replace) the accuracy series of one condition in place
    pub fn insert_condition(&mut self, name: impl Into<String>, accuracy: Vec<f64>) {
        self.conditions.insert(name.into(), accuracy);
    }

    /// Steps at which the samples were recorded
    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    /// Overall accuracy series
    pub fn total_accuracy(&self) -> &[f64] {
        &self.total_accuracy
    }

    /// Accuracy series for a single condition
    pub fn condition(&self, name: &str) -> Option<&[f64]> {
        self.conditions.get(name).map(Vec::as_slice)
    }

    /// Names of the conditions recorded in this trial, in sorted order
    pub fn condition_names(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trial recorded no samples
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check that every series is aligned with the step series
    ///
    /// `index` is only used to make the error message point at the trial.
    pub fn validate(&self, index: usize) -> Result<()> {
        let expected = self.steps.len();
        if self.total_accuracy.len() != expected {
            return Err(Error::size_mismatch(
                expected,
                self.total_accuracy.len(),
                &format!("trial {index} {TOTAL_ACCURACY}"),
            ));
        }
        for (name, series) in &self.conditions {
            if series.len() != expected {
                return Err(Error::size_mismatch(
                    expected,
                    series.len(),
                    &format!("trial {index} {name}"),
                ));
            }
        }
        Ok(())
    }

    /// Translate a sample index into the step it was recorded at
    pub fn step_at(&self, index: usize) -> Option<u64> {
        self.steps.get(index).copied()
    }
}

/// Trials keyed by their original index
///
/// Iteration is in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSet {
    trials: BTreeMap<usize, Trial>,
}

impl TrialSet {
    /// Create an empty trial set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trial under its original index, returning any trial it replaced
    pub fn insert(&mut self, index: usize, trial: Trial) -> Option<Trial> {
        self.trials.insert(index, trial)
    }

    /// Look up a trial by its original index
    pub fn get(&self, index: usize) -> Option<&Trial> {
        self.trials.get(&index)
    }

    /// Remove a single trial
    pub fn remove(&mut self, index: usize) -> Option<Trial> {
        self.trials.remove(&index)
    }

    /// Remove every trial whose index is in `indices`, returning how many were removed
    pub fn remove_all(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.trials.len();
        self.trials.retain(|index, _| !indices.contains(index));
        before - self.trials.len()
    }

    /// Number of trials
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether the set holds no trials
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Remaining original indices, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.trials.keys().copied().collect()
    }

    /// Iterate over `(index, trial)` pairs in ascending index order
    pub fn iter(&self) -> btree_map::Iter<'_, usize, Trial> {
        self.trials.iter()
    }

    /// Validate every trial, failing on the first misaligned one
    pub fn validate(&self) -> Result<()> {
        self.trials
            .iter()
            .try_for_each(|(&index, trial)| trial.validate(index))
    }
}

impl FromIterator<(usize, Trial)> for TrialSet {
    fn from_iter<I: IntoIterator<Item = (usize, Trial)>>(iter: I) -> Self {
        Self {
            trials: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrialSet {
    type Item = (&'a usize, &'a Trial);
    type IntoIter = btree_map::Iter<'a, usize, Trial>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.iter()
    }
}

impl fmt::Display for TrialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trial set ({} trials):", self.len())?;
        for (index, trial) in &self.trials {
            writeln!(
                f,
                "  trial {index}: {} samples, conditions [{}]",
                trial.len(),
                trial.condition_names().collect::<Vec<_>>().join(", ")
            )?;
        }
        Ok(())
    }
}
