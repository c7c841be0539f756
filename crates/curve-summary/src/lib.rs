//! Summary statistics for convergence points
//!
//! Turns a [`ConvergenceSummary`](curve_convergence::ConvergenceSummary) into
//! the numbers the reporting and plotting side needs:
//!
//! - **Descriptive**: mean, population standard deviation and a normal
//!   confidence interval per condition
//! - **Box plots**: quartiles, whiskers and outliers
//! - **Paired differences**: per-trial differences between two conditions,
//!   the input of a related-samples test
//!
//! Hypothesis tests themselves are not part of this crate.

pub mod boxplot;
pub mod descriptive;
pub mod paired;

pub use boxplot::{BoxSummary, WHISKER_IQR_FACTOR};
pub use descriptive::{normal_mean_interval, summarize_conditions, ConditionSummary, ConfidenceInterval};
pub use paired::{paired_differences, PairedComparison};

/// Confidence level used when none is configured
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
