//! Forward-mean convergence detection
//!
//! The forward mean at index `i` is the mean of every sample from `i` to the
//! end of the series (a suffix mean, not a fixed-size window). A series is
//! said to converge at the first index whose forward mean is strictly above
//! the threshold: from that point on, accuracy stays high on average.

use crate::traits::ConvergenceCriterion;
use crate::types::{ConvergenceParameters, ConvergenceResult};
use curve_core::{Error, Result};

/// Forward mean at every index of `arr`
///
/// Each suffix is summed left to right on its own, so the values match the
/// plain definition bit for bit. Quadratic in the series length.
///
/// # Examples
///
/// ```rust
/// use curve_convergence::forward_means;
///
/// let means = forward_means(&[0.5, 1.0, 1.0]).unwrap();
/// assert_eq!(means, vec![2.5 / 3.0, 1.0, 1.0]);
/// ```
pub fn forward_means(arr: &[f64]) -> Result<Vec<f64>> {
    if arr.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }

    let n = arr.len();
    Ok((0..n)
        .map(|i| arr[i..].iter().sum::<f64>() / (n - i) as f64)
        .collect())
}

/// First index whose value is strictly above `threshold`
pub fn first_above_threshold(values: &[f64], threshold: f64) -> Option<usize> {
    values.iter().position(|&v| v > threshold)
}

/// Index at which the forward mean of `series` first exceeds `threshold`
pub fn convergence_point(series: &[f64], threshold: f64) -> Result<Option<usize>> {
    ForwardMeanDetector::new(ConvergenceParameters::new(threshold)?).convergence_index(series)
}

/// Convergence detector based on forward means
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForwardMeanDetector {
    params: ConvergenceParameters,
}

impl ForwardMeanDetector {
    /// Create a detector from already validated parameters
    pub fn new(params: ConvergenceParameters) -> Self {
        Self { params }
    }

    /// Create a detector for the given threshold, rejecting values outside (0, 1)
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Ok(Self::new(ConvergenceParameters::new(threshold)?))
    }

    pub fn parameters(&self) -> &ConvergenceParameters {
        &self.params
    }

    /// Run the detector and keep the forward means for inspection
    pub fn analyze(&self, series: &[f64]) -> Result<ConvergenceResult> {
        let means = forward_means(series)?;
        let index = first_above_threshold(&means, self.params.threshold);
        Ok(ConvergenceResult::new(index, self.params.threshold, means))
    }
}

impl ConvergenceCriterion for ForwardMeanDetector {
    fn algorithm_name(&self) -> &'static str {
        "forward-mean"
    }

    fn convergence_index(&self, series: &[f64]) -> Result<Option<usize>> {
        let means = forward_means(series)?;
        Ok(first_above_threshold(&means, self.params.threshold))
    }
}
