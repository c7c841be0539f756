//! # curve-stats
//!
//! Convergence analysis of learning curves recorded over repeated training
//! trials. A trial is a table of accuracy values per recorded step: one
//! overall curve and one curve per condition. The analysis
//!
//! 1. drops trials whose overall accuracy never converged,
//! 2. finds, per condition and surviving trial, the first step from which the
//!    mean of all remaining accuracy values stays above a threshold,
//! 3. summarises those convergence steps and compares conditions pairwise,
//! 4. describes the accuracy curves and summaries as plots.
//!
//! ## Crates
//!
//! - [`curve_core`]: trials, errors and slice utilities
//! - [`curve_series`]: EWMA smoothing and unequal-length medians
//! - [`curve_convergence`]: forward-mean detector, trial filter and aggregator
//! - [`curve_summary`]: confidence intervals, box-plot statistics, paired differences
//! - [`curve_plot`]: plot descriptions and sinks
//! - [`curve_io`]: CSV ingestion
//!
//! ## Example
//!
//! ```rust
//! use curve_stats::prelude::*;
//!
//! let mut trials: TrialSet = [
//!     (0, Trial::new(vec![0, 10, 20], vec![0.5, 1.0, 1.0])
//!         .with_condition("a", vec![0.5, 1.0, 1.0])
//!         .with_condition("b", vec![0.2, 0.5, 1.0])),
//!     (1, Trial::new(vec![0, 10, 20], vec![0.5, 0.5, 0.5])
//!         .with_condition("a", vec![0.5, 0.5, 0.5])
//!         .with_condition("b", vec![0.5, 0.5, 0.5])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = ExperimentConfig::new("demo", "data/demo", 2, ["a", "b"]).with_comparison("a", "b");
//! let report = analyze(&config, &mut trials, NullPlotSink).unwrap();
//! assert_eq!(report.removed_trials, 1);
//! assert_eq!(report.convergence.get("b"), Some(&[20][..]));
//! ```

pub mod error;
pub mod experiment;
pub mod pipeline;

pub use curve_convergence;
pub use curve_core;
pub use curve_io;
pub use curve_plot;
pub use curve_series;
pub use curve_summary;

pub use error::{Error, Result};
pub use experiment::{Comparison, ExperimentConfig};
pub use pipeline::{analyze, run_experiment, ExperimentReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::experiment::{Comparison, ExperimentConfig};
    pub use crate::pipeline::{analyze, run_experiment, ExperimentReport};
    pub use curve_convergence::{
        get_convergence_points, remove_bad_trials, ConvergenceAggregator, ConvergenceSummary,
        ForwardMeanDetector, TrialFilter,
    };
    pub use curve_core::{Trial, TrialSet};
    pub use curve_io::TrialReader;
    pub use curve_plot::{NullPlotSink, PlotSink, RecordingPlotSink};
    pub use curve_series::{median_unequal_lengths, smooth};
}
