//! Per-condition means with normal confidence intervals
//!
//! The interval treats the mean of the convergence points as normally
//! distributed with standard error `std / sqrt(n)`, where `std` is the
//! population standard deviation of the points.

use curve_convergence::ConvergenceSummary;
use curve_core::utils::{mean, population_std_dev};
use curve_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;
use tracing::debug;

/// A confidence interval around a point estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Distance from the estimate down to the lower bound
    pub fn lower_error(&self) -> f64 {
        self.estimate - self.lower
    }

    /// Distance from the estimate up to the upper bound
    pub fn upper_error(&self) -> f64 {
        self.upper - self.estimate
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.2}, {:.2}], estimate: {:.2}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Normal-approximation interval for the mean of `sample`
///
/// A sample without spread yields the degenerate interval `[mean, mean]`.
pub fn normal_mean_interval(sample: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    if sample.is_empty() {
        return Err(Error::empty_input("confidence interval"));
    }
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "Confidence level {confidence_level} must be in (0, 1)"
        )));
    }

    let estimate = mean(sample);
    let std_error = population_std_dev(sample) / (sample.len() as f64).sqrt();

    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::InvalidParameter(format!("Failed to create normal distribution: {e}"))
    })?;
    let alpha = 1.0 - confidence_level;
    let critical_value = normal.inverse_cdf(1.0 - alpha / 2.0);
    let margin = critical_value * std_error;

    Ok(ConfidenceInterval::new(
        estimate - margin,
        estimate + margin,
        estimate,
        confidence_level,
    ))
}

/// Descriptive statistics of one condition's convergence points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub condition: String,
    /// Number of trials contributing
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub interval: ConfidenceInterval,
}

impl ConditionSummary {
    /// Summarise a list of convergence points
    pub fn from_points(
        condition: impl Into<String>,
        points: &[f64],
        confidence_level: f64,
    ) -> Result<Self> {
        let condition = condition.into();
        if points.is_empty() {
            return Err(Error::EmptyInput(format!(
                "no convergence points for '{condition}'"
            )));
        }
        let interval = normal_mean_interval(points, confidence_level)?;
        Ok(Self {
            count: points.len(),
            mean: interval.estimate,
            std_dev: population_std_dev(points),
            interval,
            condition,
        })
    }
}

impl fmt::Display for ConditionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: n={}, mean={:.2}, std={:.2}, {}",
            self.condition, self.count, self.mean, self.std_dev, self.interval
        )
    }
}

/// Summarise every requested condition of a convergence summary, in request order
pub fn summarize_conditions<S: AsRef<str>>(
    summary: &ConvergenceSummary,
    conditions: &[S],
    confidence_level: f64,
) -> Result<Vec<ConditionSummary>> {
    conditions
        .iter()
        .map(|condition| -> Result<ConditionSummary> {
            let condition = condition.as_ref();
            let points = summary.get_f64(condition).ok_or_else(|| {
                Error::InvalidInput(format!("Condition '{condition}' is not in the summary"))
            })?;
            let stats = ConditionSummary::from_points(condition, &points, confidence_level)?;
            debug!("{}", stats);
            Ok(stats)
        })
        .collect()
}
