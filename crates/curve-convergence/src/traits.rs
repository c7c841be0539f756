//! Core traits for convergence detection
//!
//! The trial filter and the aggregator only need to ask one question of a
//! series: at which index (if any) did it converge? Any detector answering
//! that question can drive both.

use curve_core::Result;

/// A rule deciding where an accuracy series has converged
pub trait ConvergenceCriterion {
    /// Get the name of the detection rule
    fn algorithm_name(&self) -> &'static str;

    /// Index at which `series` converged, `None` if it never did
    ///
    /// Errors are reserved for series the rule cannot be applied to at all,
    /// such as an empty series.
    fn convergence_index(&self, series: &[f64]) -> Result<Option<usize>>;
}

impl<C: ConvergenceCriterion + ?Sized> ConvergenceCriterion for &C {
    fn algorithm_name(&self) -> &'static str {
        (**self).algorithm_name()
    }

    fn convergence_index(&self, series: &[f64]) -> Result<Option<usize>> {
        (**self).convergence_index(series)
    }
}
