//! Core types and errors for learning-curve convergence analysis
//!
//! This crate holds the pieces every other curve-stats crate shares:
//!
//! - **Error handling**: a single [`Error`] enum and [`Result`] alias
//! - **Data model**: [`Trial`] and [`TrialSet`]
//! - **Slice utilities**: mean, standard deviation, sorted medians and quantiles
//!
//! # Example
//!
//! ```rust
//! use curve_core::{Trial, TrialSet};
//!
//! let trial = Trial::new(vec![0, 10, 20], vec![0.5, 0.9, 1.0])
//!     .with_condition("at_least_4", vec![0.4, 0.95, 1.0]);
//!
//! let mut trials = TrialSet::new();
//! trials.insert(0, trial);
//! trials.validate().unwrap();
//! assert_eq!(trials.len(), 1);
//! ```

pub mod error;
pub mod types;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use types::{Trial, TrialSet, TOTAL_ACCURACY};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Result, Trial, TrialSet};
}
