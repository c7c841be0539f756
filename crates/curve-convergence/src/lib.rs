//! Convergence detection for learning curves
//!
//! This crate decides when a noisy accuracy curve has stabilised and builds
//! the per-condition convergence summaries the rest of the analysis works on.
//!
//! # Components
//!
//! - **Forward-mean detector**: the first index whose suffix mean is strictly
//!   above a threshold (default 0.98)
//! - **Trial filter**: drops trials whose overall accuracy never converged
//! - **Aggregator**: convergence step per condition per surviving trial
//!
//! ## Usage
//!
//! ```rust
//! use curve_convergence::{get_convergence_points, remove_bad_trials};
//! use curve_core::{Trial, TrialSet};
//!
//! let mut trials: TrialSet = [
//!     (0, Trial::new(vec![0, 10, 20], vec![0.5, 1.0, 1.0]).with_condition("a", vec![0.5, 1.0, 1.0])),
//!     (1, Trial::new(vec![0, 10, 20], vec![0.5, 0.5, 0.5]).with_condition("a", vec![0.5, 0.5, 0.5])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(remove_bad_trials(&mut trials).unwrap(), 1);
//! let summary = get_convergence_points(&trials, &["a"]).unwrap();
//! assert_eq!(summary.get("a"), Some(&[10][..]));
//! ```

pub mod aggregate;
pub mod filter;
pub mod forward_mean;
pub mod traits;
pub mod types;

pub use aggregate::{get_convergence_points, ConvergenceAggregator};
pub use filter::{remove_bad_trials, TrialFilter};
pub use forward_mean::{convergence_point, first_above_threshold, forward_means, ForwardMeanDetector};
pub use traits::ConvergenceCriterion;
pub use types::{ConditionPoints, ConvergenceParameters, ConvergenceResult, ConvergenceSummary};
