//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use curve_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_nan_last(&mut sorted);
    sorted
}

/// Sort a slice in place, NaN values last
pub fn sort_nan_last(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use curve_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the population standard deviation (divisor `n`)
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use curve_core::utils::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;
    variance.sqrt()
}

/// Median of already sorted data
///
/// Even counts average the two middle values. Returns NaN for empty input.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Quantile of already sorted data by linear interpolation between order statistics
///
/// Position is `p * (n - 1)`. Returns NaN for empty input.
///
/// # Examples
///
/// ```rust
/// use curve_core::utils::quantile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&data, 0.5), 2.5);
/// assert_eq!(quantile_sorted(&data, 0.25), 1.75);
/// ```
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let position = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);
        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_median_sorted() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 10.0]), 2.5);
        assert_eq!(median_sorted(&[4.0]), 4.0);
        assert!(median_sorted(&[]).is_nan());
    }

    #[test]
    fn test_quantile_sorted_endpoints() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(quantile_sorted(&data, 0.0), 10.0);
        assert_eq!(quantile_sorted(&data, 1.0), 50.0);
        assert_eq!(quantile_sorted(&data, 0.5), 30.0);
        assert_relative_eq!(quantile_sorted(&data, 0.75), 40.0);
    }

    #[test]
    fn test_population_std_dev_single_value() {
        assert_eq!(population_std_dev(&[3.0]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn prop_median_matches_half_quantile(
            data in prop::collection::vec(-1000.0..1000.0f64, 1..64)
        ) {
            let s = sorted(&data);
            prop_assert!((median_sorted(&s) - quantile_sorted(&s, 0.5)).abs() < 1e-9);
        }
    }
}
