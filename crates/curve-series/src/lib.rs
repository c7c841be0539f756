//! Series transforms for plotting learning curves
//!
//! - **EWMA smoothing**: causal exponential moving average over one curve
//! - **Unequal-length median**: point-wise median across trials that ran for
//!   different numbers of recorded steps
//!
//! Neither transform takes part in convergence detection; both exist so the
//! plotting path can draw readable per-trial and median curves.
//!
//! ```rust
//! use curve_series::{median_unequal_lengths, smooth};
//!
//! let trials = vec![vec![0.5, 0.8, 0.9], vec![0.6, 0.9]];
//! let median = median_unequal_lengths(&trials).unwrap();
//! let line = smooth(&median, 0.9).unwrap();
//! assert_eq!(line.len(), 3);
//! ```

pub mod ewma;
pub mod median;

pub use ewma::{smooth, EwmaSmoother, SmoothingParameters};
pub use median::median_unequal_lengths;
