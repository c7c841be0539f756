//! Point-wise median across series of unequal length
//!
//! Trials run for different numbers of recorded steps. The reducer lines the
//! series up by position and takes the median at each position over the
//! series that reach it. A shorter series contributes to its own prefix only;
//! it is absent from later positions rather than counted as zero. NaN values
//! are treated the same way as missing positions.

use curve_core::utils::{median_sorted, sort_nan_last};
use curve_core::{Error, Result};
use tracing::debug;

/// Median at each position over every series long enough to reach it
///
/// The output is as long as the longest input. A position where every
/// contributing value is NaN yields NaN.
///
/// # Examples
///
/// ```rust
/// use curve_series::median_unequal_lengths;
///
/// let medians = median_unequal_lengths(&[vec![3.0], vec![1.0, 2.0, 3.0]]).unwrap();
/// assert_eq!(medians, vec![2.0, 2.0, 3.0]);
/// ```
pub fn median_unequal_lengths<S: AsRef<[f64]>>(series: &[S]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(Error::empty_input("median reduction"));
    }

    let longest = series
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0);
    debug!(
        "Reducing {} series to a median curve of length {}",
        series.len(),
        longest
    );

    let mut column = Vec::with_capacity(series.len());
    let medians = (0..longest)
        .map(|position| {
            column.clear();
            column.extend(
                series
                    .iter()
                    .filter_map(|s| s.as_ref().get(position).copied())
                    .filter(|value| !value.is_nan()),
            );
            sort_nan_last(&mut column);
            median_sorted(&column)
        })
        .collect();

    Ok(medians)
}
