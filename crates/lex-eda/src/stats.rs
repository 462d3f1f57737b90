//! Descriptive statistics over numerically coerced columns.

use crate::coercion::coerce_column;
use crate::error::Result;
use crate::types::ColumnSummary;
use polars::prelude::*;
use tracing::debug;

/// Count, mean, median and sample standard deviation of a column.
///
/// The column is coerced to numbers first; unparseable entries count as
/// missing. Fails with `ColumnNotFound` if the column does not exist.
pub fn summarize_column(df: &DataFrame, column: &str) -> Result<ColumnSummary> {
    let numeric = coerce_column(df, column)?;
    let sorted = numeric.sorted_present();

    let summary = ColumnSummary {
        count: sorted.len(),
        mean: mean(&sorted),
        median: median(&sorted),
        std: sample_std(&sorted),
    };

    debug!(
        "Summarized '{}': count={}, mean={:.4}, median={:.4}, std={:.4}",
        column, summary.count, summary.mean, summary.median, summary.std
    );

    Ok(summary)
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of values sorted ascending; NaN for an empty slice.
pub fn median(sorted: &[f64]) -> f64 {
    quantile(sorted, 0.5)
}

/// Sample standard deviation (divisor n - 1); 0.0 when fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    variance.sqrt()
}

/// Quantile of values sorted ascending, linearly interpolated between the
/// order statistics around position `q * (n - 1)`. NaN for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdaError;

    fn sample_df() -> DataFrame {
        df![
            "A" => [Some(1.0), Some(2.0), None, Some(4.0)],
            "B" => [10.0, 10.0, 20.0, 1000.0],
        ]
        .unwrap()
    }

    // ==================== summarize_column tests ====================

    #[test]
    fn test_summarize_column_skips_missing() {
        let stats = summarize_column(&sample_df(), "A").unwrap();

        assert_eq!(stats.count, 3);
        assert!((stats.mean - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.median, 2.0);
        // sqrt(((1 - 7/3)^2 + (2 - 7/3)^2 + (4 - 7/3)^2) / 2) = sqrt(7/3)
        assert!((stats.std - (7.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert!((stats.std - 1.528).abs() < 1e-3);
    }

    #[test]
    fn test_summarize_column_single_value_has_zero_std() {
        let df = df!["x" => [None, Some(5.0), None]].unwrap();
        let stats = summarize_column(&df, "x").unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_summarize_column_all_missing_is_nan() {
        let df = df!["x" => [Option::<f64>::None, None]].unwrap();
        let stats = summarize_column(&df, "x").unwrap();

        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.median.is_nan());
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_summarize_column_coerces_text() {
        let df = df!["price" => ["2.0", "ERROR", "4.0", "x"]].unwrap();
        let stats = summarize_column(&df, "price").unwrap();

        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 3.0);
    }

    #[test]
    fn test_summarize_column_not_found() {
        let err = summarize_column(&sample_df(), "C").unwrap_err();
        assert!(matches!(err, EdaError::ColumnNotFound(ref c) if c == "C"));
    }

    // ==================== helper tests ====================

    #[test]
    fn test_sample_std_basic() {
        // Mean = 3, Variance = 10/4 = 2.5
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[1.0, 2.0, 4.0]), 2.0);
        assert_eq!(median(&[1.0, 2.0, 4.0, 8.0]), 3.0);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [10.0, 10.0, 20.0, 1000.0];
        assert_eq!(quantile(&sorted, 0.25), 10.0);
        assert_eq!(quantile(&sorted, 0.75), 265.0);
        assert_eq!(quantile(&sorted, 0.0), 10.0);
        assert_eq!(quantile(&sorted, 1.0), 1000.0);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_quantile_on_order_statistic_with_infinity() {
        let sorted = [1.0, 2.0, f64::INFINITY];
        assert_eq!(quantile(&sorted, 0.5), 2.0);
        assert_eq!(quantile(&sorted, 1.0), f64::INFINITY);
    }
}
