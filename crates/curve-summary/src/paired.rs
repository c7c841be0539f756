//! Paired differences between two conditions
//!
//! Convergence points of two conditions come from the same trials, so a
//! related-samples comparison works on their pointwise differences. Running
//! the actual test is left to the caller's statistics package.

use curve_convergence::ConvergenceSummary;
use curve_core::utils::mean;
use curve_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pointwise difference `a - b`
pub fn paired_differences(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(Error::size_mismatch(a.len(), b.len(), "paired samples"));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Per-trial differences between the convergence points of two conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedComparison {
    pub first: String,
    pub second: String,
    /// `first - second` for each trial, in trial order
    pub differences: Vec<f64>,
}

impl PairedComparison {
    /// Pair up two conditions of a convergence summary
    pub fn from_summary(summary: &ConvergenceSummary, first: &str, second: &str) -> Result<Self> {
        let lookup = |name: &str| {
            summary.get_f64(name).ok_or_else(|| {
                Error::InvalidInput(format!("Condition '{name}' is not in the summary"))
            })
        };
        let differences = paired_differences(&lookup(first)?, &lookup(second)?)?;
        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
            differences,
        })
    }

    /// Mean of the differences; negative means `first` converged earlier
    pub fn mean_difference(&self) -> f64 {
        mean(&self.differences)
    }
}
