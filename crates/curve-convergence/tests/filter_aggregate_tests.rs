//! End-to-end tests for filtering and aggregating noisy trials

mod common;

use common::{rng, steps, trial, STEP_INTERVAL};
use curve_convergence::{
    get_convergence_points, remove_bad_trials, ConvergenceAggregator, ConvergenceCriterion,
    ForwardMeanDetector, TrialFilter,
};
use curve_core::{Error, Result, Trial, TrialSet};

#[test]
fn test_three_trial_scenario() {
    let mut trials: TrialSet = [
        (0, Trial::new(steps(3), vec![0.5, 1.0, 1.0])),
        (1, Trial::new(steps(3), vec![0.9, 0.99, 1.0])),
        (2, Trial::new(steps(3), vec![0.9, 0.95, 0.97])),
    ]
    .into_iter()
    .collect();

    assert_eq!(remove_bad_trials(&mut trials).unwrap(), 1);
    assert_eq!(trials.indices(), vec![0, 1]);
}

#[test]
fn test_noisy_trials_keep_learners_and_drop_plateaus() {
    let mut rng = rng(7);
    let conditions = [("at_least_4", 1.0, 15.0), ("at_most_4", 1.0, 40.0)];
    let mut trials = TrialSet::new();
    for index in 0..10 {
        if index % 4 == 3 {
            // Stuck learner: overall accuracy plateaus well below the threshold
            let stuck = [("at_least_4", 0.85, 15.0), ("at_most_4", 0.85, 40.0)];
            trials.insert(index, trial(&mut rng, 300, &stuck));
        } else {
            trials.insert(index, trial(&mut rng, 300, &conditions));
        }
    }

    let removed = remove_bad_trials(&mut trials).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(trials.indices(), vec![0, 1, 2, 4, 5, 6, 8, 9]);

    let summary = get_convergence_points(&trials, &["at_least_4", "at_most_4"]).unwrap();
    let fast = summary.get("at_least_4").unwrap();
    let slow = summary.get("at_most_4").unwrap();
    assert_eq!(fast.len(), 8);
    assert_eq!(slow.len(), 8);
    for (f, s) in fast.iter().zip(slow) {
        assert_eq!(f % STEP_INTERVAL, 0);
        assert!(f < s, "faster condition converged at {f}, slower at {s}");
    }
}

#[test]
fn test_two_condition_summary_shape() {
    let mut rng = rng(11);
    let trials: TrialSet = (0..2)
        .map(|i| (i, trial(&mut rng, 200, &[("a", 1.0, 10.0), ("b", 1.0, 20.0)])))
        .collect();
    let summary = get_convergence_points(&trials, &["a", "b"]).unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.get("a").map(<[u64]>::len), Some(2));
    assert_eq!(summary.get("b").map(<[u64]>::len), Some(2));
    assert_eq!(summary.trials(), &[0, 1]);
}

#[test]
fn test_secondary_condition_that_never_converges_is_reported() {
    let mut rng = rng(3);
    let mut trials: TrialSet = (0..3)
        .map(|i| (i, trial(&mut rng, 200, &[("easy", 1.0, 10.0)])))
        .collect();
    // Overall accuracy converges, but a condition outside the filter criterion does not
    let patched = trials
        .remove(1)
        .unwrap()
        .with_condition("hard", vec![0.6; 200]);
    trials.insert(1, patched);
    for index in [0, 2] {
        let patched = trials
            .remove(index)
            .unwrap()
            .with_condition("hard", vec![1.0; 200]);
        trials.insert(index, patched);
    }

    assert_eq!(remove_bad_trials(&mut trials).unwrap(), 0);
    match get_convergence_points(&trials, &["easy", "hard"]) {
        Err(Error::NeverConverged { trial, series }) => {
            assert_eq!(trial, 1);
            assert_eq!(series, "hard");
        }
        other => panic!("expected NeverConverged, got {other:?}"),
    }
}

/// Converges at the first sample above a fixed level, ignoring what comes after
struct FirstHit(f64);

impl ConvergenceCriterion for FirstHit {
    fn algorithm_name(&self) -> &'static str {
        "first-hit"
    }

    fn convergence_index(&self, series: &[f64]) -> Result<Option<usize>> {
        Ok(series.iter().position(|&v| v > self.0))
    }
}

#[test]
fn test_filter_and_aggregator_accept_other_criteria() {
    let t = Trial::new(vec![0, 5, 9], vec![0.2, 0.99, 0.1]).with_condition("a", vec![0.2, 0.99, 0.1]);
    let mut trials: TrialSet = [(4, t)].into_iter().collect();

    // Forward means of the overall curve never clear 0.98
    let strict = TrialFilter::new(ForwardMeanDetector::default());
    assert_eq!(strict.bad_trials(&trials).unwrap().len(), 1);

    let lenient = TrialFilter::new(FirstHit(0.98));
    assert_eq!(lenient.remove_bad_trials(&mut trials).unwrap(), 0);

    let summary = ConvergenceAggregator::new(&FirstHit(0.98))
        .aggregate(&trials, &["a"])
        .unwrap();
    assert_eq!(summary.get("a"), Some(&[5][..]));
}
