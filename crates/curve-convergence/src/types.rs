//! Types used for convergence detection

use curve_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Parameters for forward-mean convergence detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceParameters {
    /// A forward mean must be strictly above this value, in (0, 1)
    pub threshold: f64,
}

impl Default for ConvergenceParameters {
    fn default() -> Self {
        Self { threshold: 0.98 }
    }
}

impl ConvergenceParameters {
    /// Create validated parameters
    pub fn new(threshold: f64) -> Result<Self> {
        let params = Self { threshold };
        params.validate()?;
        Ok(params)
    }

    /// Check that the threshold lies in (0, 1)
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(Error::invalid_threshold(self.threshold));
        }
        Ok(())
    }
}

/// Outcome of running the detector over one series
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceResult {
    /// First index whose forward mean is above the threshold
    index: Option<usize>,
    /// Threshold the series was tested against
    threshold: f64,
    /// Forward mean at every index
    forward_means: Vec<f64>,
}

impl ConvergenceResult {
    pub fn new(index: Option<usize>, threshold: f64, forward_means: Vec<f64>) -> Self {
        Self {
            index,
            threshold,
            forward_means,
        }
    }

    /// Index of convergence, `None` if the series never converged
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the series converged
    pub fn converged(&self) -> bool {
        self.index.is_some()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn forward_means(&self) -> &[f64] {
        &self.forward_means
    }

    /// Largest forward mean reached anywhere in the series
    pub fn peak_forward_mean(&self) -> f64 {
        self.forward_means
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for ConvergenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "converged at index {} of {} (threshold {:.3})",
                index,
                self.forward_means.len(),
                self.threshold
            ),
            None => write!(
                f,
                "never converged over {} samples (threshold {:.3}, peak forward mean {:.4})",
                self.forward_means.len(),
                self.threshold,
                self.peak_forward_mean()
            ),
        }
    }
}

/// Convergence steps of one condition, one per trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionPoints {
    pub condition: String,
    pub steps: Vec<u64>,
}

/// Convergence steps per condition across the surviving trials
///
/// Conditions keep the order they were requested in; every step list follows
/// the order of [`ConvergenceSummary::trials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSummary {
    trials: Vec<usize>,
    entries: Vec<ConditionPoints>,
}

impl ConvergenceSummary {
    /// Build a summary from per-condition step lists
    ///
    /// Every list must have one entry per trial and condition names must be unique.
    pub fn new(trials: Vec<usize>, entries: Vec<ConditionPoints>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.steps.len() != trials.len() {
                return Err(Error::size_mismatch(
                    trials.len(),
                    entry.steps.len(),
                    &format!("convergence points of '{}'", entry.condition),
                ));
            }
            if !seen.insert(entry.condition.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "Condition '{}' listed more than once",
                    entry.condition
                )));
            }
        }
        Ok(Self { trials, entries })
    }

    /// Original indices of the trials the step lists refer to
    pub fn trials(&self) -> &[usize] {
        &self.trials
    }

    /// Convergence steps of one condition
    pub fn get(&self, condition: &str) -> Option<&[u64]> {
        self.entries
            .iter()
            .find(|e| e.condition == condition)
            .map(|e| e.steps.as_slice())
    }

    /// Convergence steps of one condition as floats, for statistics
    pub fn get_f64(&self, condition: &str) -> Option<Vec<f64>> {
        self.get(condition)
            .map(|steps| steps.iter().map(|&s| s as f64).collect())
    }

    /// Condition names in request order
    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.condition.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionPoints> {
        self.entries.iter()
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ConvergenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Convergence points over trials {:?}:", self.trials)?;
        for entry in &self.entries {
            writeln!(f, "  {}: {:?}", entry.condition, entry.steps)?;
        }
        Ok(())
    }
}
