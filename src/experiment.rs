//! Experiment definitions
//!
//! An experiment fixes which trials to load, which conditions to compare and
//! how the figures are scaled. The three presets correspond to the quantifier
//! learning experiments whose trial data this crate was written to analyse.

use crate::error::{Error, Result};
use curve_convergence::ConvergenceParameters;
use curve_io::TrialReader;
use curve_summary::DEFAULT_CONFIDENCE_LEVEL;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Two conditions whose convergence points are compared trial by trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: String,
    pub second: String,
}

impl Comparison {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Everything needed to analyse one experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub name: String,
    /// Directory holding `trial_<i>.csv` files
    pub data_path: PathBuf,
    /// Trials `0..trials` are loaded
    pub trials: usize,
    pub conditions: Vec<String>,
    pub comparisons: Vec<Comparison>,
    /// y-axis range of the accuracy line plot
    pub y_range: (f64, f64),
    pub convergence: ConvergenceParameters,
    pub confidence_level: f64,
    /// Build plots and hand them to the sink
    pub plots: bool,
}

impl ExperimentConfig {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        data_path: impl Into<PathBuf>,
        trials: usize,
        conditions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            data_path: data_path.into(),
            trials,
            conditions: conditions.into_iter().map(Into::into).collect(),
            comparisons: Vec::new(),
            y_range: (0.0, 1.0),
            convergence: ConvergenceParameters::default(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            plots: true,
        }
    }

    pub fn with_comparison(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.comparisons.push(Comparison::new(first, second));
        self
    }

    pub fn with_y_range(mut self, lower: f64, upper: f64) -> Self {
        self.y_range = (lower, upper);
        self
    }

    pub fn with_plots(mut self, plots: bool) -> Self {
        self.plots = plots;
        self
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Thirty trials over `at_least_4`, `at_most_4` and `exactly_4`
    pub fn experiment_one() -> Self {
        Self::new("experiment_one", "data/exp1", 30, ["at_least_4", "at_most_4", "exactly_4"])
            .with_y_range(0.5, 1.0)
            .with_comparison("at_least_4", "exactly_4")
            .with_comparison("at_least_4", "at_most_4")
            .with_comparison("at_most_4", "exactly_4")
    }

    /// Thirty trials over `at_least_3` and `first_3`
    pub fn experiment_two() -> Self {
        Self::new("experiment_two", "data/exp2", 30, ["at_least_3", "first_3"])
            .with_y_range(0.5, 1.0)
            .with_comparison("at_least_3", "first_3")
    }

    /// Thirty trials over `not_all` and `not_only`
    pub fn experiment_three() -> Self {
        Self::new("experiment_three", "data/exp3", 30, ["not_all", "not_only"])
            .with_y_range(0.8, 1.0)
            .with_comparison("not_only", "not_all")
    }

    /// Reader for this experiment's trial files
    pub fn reader(&self) -> TrialReader {
        TrialReader::new(&self.data_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig(format!("{}: no trials to load", self.name)));
        }
        if self.conditions.is_empty() {
            return Err(Error::InvalidConfig(format!("{}: no conditions", self.name)));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.conditions.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(Error::InvalidConfig(format!(
                "{}: condition '{duplicate}' listed twice",
                self.name
            )));
        }
        for comparison in &self.comparisons {
            for side in [&comparison.first, &comparison.second] {
                if !seen.contains(side.as_str()) {
                    return Err(Error::InvalidConfig(format!(
                        "{}: comparison uses unknown condition '{side}'",
                        self.name
                    )));
                }
            }
        }
        let (lower, upper) = self.y_range;
        if !(lower < upper) {
            return Err(Error::InvalidConfig(format!(
                "{}: y range ({lower}, {upper}) must be increasing",
                self.name
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "{}: confidence level {} must be in (0, 1)",
                self.name, self.confidence_level
            )));
        }
        self.convergence.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            ExperimentConfig::experiment_one(),
            ExperimentConfig::experiment_two(),
            ExperimentConfig::experiment_three(),
        ] {
            config.validate().unwrap();
            assert_eq!(config.trials, 30);
            assert_eq!(config.convergence.threshold, 0.98);
        }
    }

    #[test]
    fn test_preset_contents() {
        let one = ExperimentConfig::experiment_one();
        assert_eq!(one.conditions, vec!["at_least_4", "at_most_4", "exactly_4"]);
        assert_eq!(one.comparisons.len(), 3);
        assert_eq!(one.comparisons[0], Comparison::new("at_least_4", "exactly_4"));

        let three = ExperimentConfig::experiment_three();
        assert_eq!(three.y_range, (0.8, 1.0));
        assert_eq!(three.comparisons, vec![Comparison::new("not_only", "not_all")]);
        assert_eq!(three.reader().path_for(4), PathBuf::from("data/exp3/trial_4.csv"));
    }

    #[test]
    fn test_validation_failures() {
        let duplicate = ExperimentConfig::new("x", "d", 3, ["a", "a"]);
        assert!(matches!(duplicate.validate(), Err(Error::InvalidConfig(_))));

        let unknown = ExperimentConfig::new("x", "d", 3, ["a"]).with_comparison("a", "b");
        assert!(unknown.validate().is_err());

        let flipped = ExperimentConfig::new("x", "d", 3, ["a"]).with_y_range(1.0, 0.5);
        assert!(flipped.validate().is_err());

        let mut threshold = ExperimentConfig::new("x", "d", 3, ["a"]);
        threshold.convergence.threshold = 1.5;
        assert!(matches!(threshold.validate(), Err(Error::Core(_))));

        assert!(ExperimentConfig::new("x", "d", 0, ["a"]).validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ExperimentConfig::experiment_two().with_plots(false);
        let json = serde_json::to_string(&config).unwrap();
        let restored: ExperimentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
