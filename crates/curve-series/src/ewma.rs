//! EWMA (Exponentially Weighted Moving Average) smoothing
//!
//! Causal, one-sided smoothing used to make noisy accuracy curves readable.
//! The first output equals the first input; afterwards each output blends
//! the previous output with the current sample:
//!
//! `out[i] = out[i - 1] * weight + in[i] * (1 - weight)`
//!
//! A weight of 0 leaves the data untouched; weights close to 1 give a nearly
//! flat line. Smoothing is for display only and never feeds convergence
//! decisions.

use curve_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for EWMA smoothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParameters {
    /// Weight of the previous output, in [0, 1)
    pub weight: f64,
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self { weight: 0.9 }
    }
}

impl SmoothingParameters {
    /// Create validated smoothing parameters
    pub fn new(weight: f64) -> Result<Self> {
        let params = Self { weight };
        params.validate()?;
        Ok(params)
    }

    /// Check that the weight lies in [0, 1)
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.weight) {
            return Err(Error::InvalidParameter(format!(
                "Smoothing weight {} must be in [0, 1)",
                self.weight
            )));
        }
        Ok(())
    }
}

/// Reusable EWMA smoother
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EwmaSmoother {
    params: SmoothingParameters,
}

impl Default for EwmaSmoother {
    fn default() -> Self {
        Self {
            params: SmoothingParameters::default(),
        }
    }
}

impl EwmaSmoother {
    /// Create a smoother, rejecting weights outside [0, 1)
    pub fn new(params: SmoothingParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters this smoother was built with
    pub fn parameters(&self) -> &SmoothingParameters {
        &self.params
    }

    /// Smooth one series
    pub fn smooth(&self, data: &[f64]) -> Vec<f64> {
        let Some(&first) = data.first() else {
            return vec![];
        };

        let weight = self.params.weight;
        let one_minus_weight = 1.0 - weight;

        let mut smoothed = Vec::with_capacity(data.len());
        smoothed.push(first);
        let mut previous = first;
        for &value in &data[1..] {
            previous = previous * weight + value * one_minus_weight;
            smoothed.push(previous);
        }
        smoothed
    }
}

/// Smooth `data` with the given weight
///
/// # Examples
///
/// ```rust
/// use curve_series::smooth;
///
/// let smoothed = smooth(&[0.0, 1.0, 1.0], 0.5).unwrap();
/// assert_eq!(smoothed, vec![0.0, 0.5, 0.75]);
/// ```
pub fn smooth(data: &[f64], weight: f64) -> Result<Vec<f64>> {
    Ok(EwmaSmoother::new(SmoothingParameters::new(weight)?)?.smooth(data))
}
