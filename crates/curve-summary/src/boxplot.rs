//! Five-number summaries for box plots of convergence points
//!
//! Quartiles use linear interpolation between order statistics. Whiskers
//! reach the most extreme points within 1.5 IQR of the box; anything beyond
//! is listed as an outlier.

use curve_core::utils::{median_sorted, quantile_sorted, sorted};
use curve_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Whisker reach as a multiple of the interquartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Box-plot statistics of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub label: String,
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarise a sample for a box plot
    pub fn from_sample(label: impl Into<String>, sample: &[f64]) -> Result<Self> {
        let label = label.into();
        if sample.is_empty() {
            return Err(Error::EmptyInput(format!("no values to summarise for '{label}'")));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "'{label}' contains NaN or infinite values"
            )));
        }

        let data = sorted(sample);
        let lower_quartile = quantile_sorted(&data, 0.25);
        let upper_quartile = quantile_sorted(&data, 0.75);
        let reach = WHISKER_IQR_FACTOR * (upper_quartile - lower_quartile);
        let low_fence = lower_quartile - reach;
        let high_fence = upper_quartile + reach;

        let inside = data.iter().copied().filter(|&v| v >= low_fence && v <= high_fence);
        let lower_whisker = inside.clone().fold(f64::INFINITY, f64::min);
        let upper_whisker = inside.fold(f64::NEG_INFINITY, f64::max);
        let outliers = data
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Ok(Self {
            min: data[0],
            lower_quartile,
            median: median_sorted(&data),
            upper_quartile,
            max: data[data.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
            label,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.upper_quartile - self.lower_quartile
    }
}
