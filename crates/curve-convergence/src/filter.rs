//! Removal of trials whose overall accuracy never converged
//!
//! A trial is bad when the detector finds no convergence point on its
//! `total_accuracy` series, i.e. the learner never got reliably good at the
//! task as a whole. Bad trials are collected in a read-only pass and removed
//! in a second pass; the remaining trials keep their original indices.

use crate::forward_mean::ForwardMeanDetector;
use crate::traits::ConvergenceCriterion;
use curve_core::{Result, TrialSet};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Drops bad trials from a trial set
#[derive(Debug, Clone, Default)]
pub struct TrialFilter<C = ForwardMeanDetector> {
    criterion: C,
}

impl<C: ConvergenceCriterion> TrialFilter<C> {
    pub fn new(criterion: C) -> Self {
        Self { criterion }
    }

    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    /// Indices of the trials whose overall accuracy never converged
    ///
    /// Trials with no samples at all count as bad. Fails with
    /// `LengthMismatch` if any trial's series are misaligned.
    pub fn bad_trials(&self, trials: &TrialSet) -> Result<BTreeSet<usize>> {
        trials.validate()?;

        let mut bad = BTreeSet::new();
        for (&index, trial) in trials {
            if trial.is_empty() {
                debug!(trial = index, "Trial has no samples");
                bad.insert(index);
                continue;
            }
            if self
                .criterion
                .convergence_index(trial.total_accuracy())?
                .is_none()
            {
                debug!(
                    trial = index,
                    algorithm = self.criterion.algorithm_name(),
                    "Overall accuracy never converged"
                );
                bad.insert(index);
            }
        }
        Ok(bad)
    }

    /// Remove every bad trial from `trials`, returning how many were removed
    ///
    /// Nothing is removed if validation fails. Running the filter again on
    /// its own output removes nothing.
    #[instrument(skip_all, fields(trials = trials.len()))]
    pub fn remove_bad_trials(&self, trials: &mut TrialSet) -> Result<usize> {
        let bad = self.bad_trials(trials)?;
        let removed = trials.remove_all(&bad);
        info!("Number of bad trials: {}", removed);
        Ok(removed)
    }
}

/// Remove bad trials using the forward-mean detector with the default threshold
pub fn remove_bad_trials(trials: &mut TrialSet) -> Result<usize> {
    TrialFilter::new(ForwardMeanDetector::default()).remove_bad_trials(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::{Error, Trial};

    fn trial(total: Vec<f64>) -> Trial {
        let steps = (0..total.len() as u64).map(|s| s * 10).collect();
        Trial::new(steps, total)
    }

    fn three_trials() -> TrialSet {
        [
            (0, trial(vec![0.5, 1.0, 1.0])),
            (1, trial(vec![0.7, 0.99, 1.0])),
            (2, trial(vec![0.5, 0.6, 0.7])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_removes_non_converging_trial() {
        let mut trials = three_trials();
        let removed = remove_bad_trials(&mut trials).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(trials.indices(), vec![0, 1]);
    }

    #[test]
    fn test_surviving_indices_are_not_renumbered() {
        let mut trials: TrialSet = [
            (0, trial(vec![0.1, 0.2])),
            (1, trial(vec![1.0, 1.0])),
            (2, trial(vec![0.3, 0.3])),
            (3, trial(vec![0.99, 1.0])),
        ]
        .into_iter()
        .collect();
        assert_eq!(remove_bad_trials(&mut trials).unwrap(), 2);
        assert_eq!(trials.indices(), vec![1, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut trials = three_trials();
        remove_bad_trials(&mut trials).unwrap();
        let once = trials.clone();
        assert_eq!(remove_bad_trials(&mut trials).unwrap(), 0);
        assert_eq!(trials, once);
    }

    #[test]
    fn test_empty_trial_is_bad() {
        let mut trials: TrialSet = [(0, trial(vec![])), (1, trial(vec![1.0]))]
            .into_iter()
            .collect();
        assert_eq!(remove_bad_trials(&mut trials).unwrap(), 1);
        assert_eq!(trials.indices(), vec![1]);
    }

    #[test]
    fn test_misaligned_trial_fails_before_removal() {
        let mut trials = three_trials();
        trials.insert(3, Trial::new(vec![0, 10], vec![0.1]));
        let err = remove_bad_trials(&mut trials).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
        assert_eq!(trials.len(), 4);
    }

    #[test]
    fn test_custom_threshold() {
        let mut trials = three_trials();
        let filter = TrialFilter::new(ForwardMeanDetector::with_threshold(0.6).unwrap());
        assert_eq!(filter.remove_bad_trials(&mut trials).unwrap(), 0);
    }
}
