//! Per-condition convergence points across trials
//!
//! For each requested condition and each trial, the detector runs on that
//! condition's accuracy series and the resulting index is translated into a
//! step number through the trial's own step series. Any (trial, condition)
//! pair that cannot produce a step fails the whole call: there is no
//! placeholder value that would not distort the statistics computed on top.

use crate::forward_mean::ForwardMeanDetector;
use crate::traits::ConvergenceCriterion;
use crate::types::{ConditionPoints, ConvergenceSummary};
use curve_core::{Error, Result, TrialSet};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Collects convergence steps per condition
#[derive(Debug, Clone, Default)]
pub struct ConvergenceAggregator<C = ForwardMeanDetector> {
    criterion: C,
}

impl<C: ConvergenceCriterion> ConvergenceAggregator<C> {
    pub fn new(criterion: C) -> Self {
        Self { criterion }
    }

    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    /// Convergence step of every trial for every condition
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if there are no trials or no conditions
    /// - `InvalidInput` if a condition is requested twice
    /// - `LengthMismatch` if a trial's series are misaligned
    /// - `MissingSeries` if a trial lacks a requested condition
    /// - `NeverConverged` if a condition's series never converged in some trial
    #[instrument(skip_all, fields(trials = trials.len(), conditions = conditions.len()))]
    pub fn aggregate<S: AsRef<str>>(
        &self,
        trials: &TrialSet,
        conditions: &[S],
    ) -> Result<ConvergenceSummary> {
        if conditions.is_empty() {
            return Err(Error::EmptyInput("no conditions requested".to_string()));
        }
        if trials.is_empty() {
            return Err(Error::EmptyInput("no trials to aggregate".to_string()));
        }
        let mut requested = HashSet::with_capacity(conditions.len());
        for condition in conditions {
            if !requested.insert(condition.as_ref()) {
                return Err(Error::InvalidInput(format!(
                    "Condition '{}' listed more than once",
                    condition.as_ref()
                )));
            }
        }
        trials.validate()?;

        let entries = conditions
            .iter()
            .map(|condition| -> Result<ConditionPoints> {
                let condition = condition.as_ref();
                let steps = trials
                    .iter()
                    .map(|(&index, trial)| -> Result<u64> {
                        let series = trial.condition(condition).ok_or_else(|| {
                            Error::MissingSeries {
                                trial: index,
                                series: condition.to_string(),
                            }
                        })?;
                        let position = self
                            .criterion
                            .convergence_index(series)?
                            .ok_or_else(|| Error::never_converged(index, condition))?;
                        trial.step_at(position).ok_or_else(|| {
                            Error::size_mismatch(
                                position + 1,
                                trial.steps().len(),
                                &format!("trial {index} steps for '{condition}'"),
                            )
                        })
                    })
                    .collect::<Result<Vec<u64>>>()?;
                debug!(condition, ?steps, "Collected convergence points");
                Ok(ConditionPoints {
                    condition: condition.to_string(),
                    steps,
                })
            })
            .collect::<Result<Vec<ConditionPoints>>>()?;

        ConvergenceSummary::new(trials.indices(), entries)
    }
}

/// Aggregate with the forward-mean detector at the default threshold
pub fn get_convergence_points<S: AsRef<str>>(
    trials: &TrialSet,
    conditions: &[S],
) -> Result<ConvergenceSummary> {
    ConvergenceAggregator::new(ForwardMeanDetector::default()).aggregate(trials, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::Trial;

    fn trial(a: Vec<f64>, b: Vec<f64>) -> Trial {
        let steps = (0..a.len() as u64).map(|s| s * 10).collect();
        Trial::new(steps, vec![1.0; a.len()])
            .with_condition("a", a)
            .with_condition("b", b)
    }

    fn two_trials() -> TrialSet {
        [
            (0, trial(vec![0.5, 1.0, 1.0], vec![0.2, 0.5, 1.0])),
            (3, trial(vec![1.0, 1.0, 1.0], vec![0.5, 1.0, 1.0])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_summary_shape_and_order() {
        let summary = get_convergence_points(&two_trials(), &["a", "b"]).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.conditions().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(summary.trials(), &[0, 3]);
        assert_eq!(summary.get("a"), Some(&[10, 0][..]));
        assert_eq!(summary.get("b"), Some(&[20, 10][..]));
    }

    #[test]
    fn test_index_is_translated_to_step() {
        let t = Trial::new(vec![100, 250, 400], vec![1.0; 3]).with_condition("a", vec![0.1, 0.2, 1.0]);
        let trials: TrialSet = [(0, t)].into_iter().collect();
        let summary = get_convergence_points(&trials, &["a"]).unwrap();
        assert_eq!(summary.get("a"), Some(&[400][..]));
    }

    #[test]
    fn test_non_converging_condition_fails() {
        let mut trials = two_trials();
        trials.insert(5, trial(vec![1.0, 1.0, 1.0], vec![0.1, 0.1, 0.1]));
        let err = get_convergence_points(&trials, &["a", "b"]).unwrap_err();
        match err {
            Error::NeverConverged { trial, series } => {
                assert_eq!(trial, 5);
                assert_eq!(series, "b");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_missing_condition_fails() {
        let err = get_convergence_points(&two_trials(), &["a", "c"]).unwrap_err();
        assert!(matches!(err, Error::MissingSeries { trial: 0, .. }));
    }

    #[test]
    fn test_misaligned_trial_fails() {
        let mut trials = two_trials();
        trials.insert(
            1,
            Trial::new(vec![0, 10], vec![1.0, 1.0])
                .with_condition("a", vec![1.0, 1.0, 1.0])
                .with_condition("b", vec![1.0, 1.0]),
        );
        let err = get_convergence_points(&trials, &["a"]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn test_empty_inputs_fail() {
        let no_conditions: [&str; 0] = [];
        assert!(matches!(
            get_convergence_points(&two_trials(), &no_conditions),
            Err(Error::EmptyInput(_))
        ));
        assert!(matches!(
            get_convergence_points(&TrialSet::new(), &["a"]),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_duplicate_condition_fails() {
        assert!(matches!(
            get_convergence_points(&two_trials(), &["a", "a"]),
            Err(Error::InvalidInput(_))
        ));
    }
}
