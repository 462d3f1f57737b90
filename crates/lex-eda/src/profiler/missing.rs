//! Per-column missing-value counts.

use crate::error::Result;
use crate::types::{MissingSummary, MissingSummaryRow};
use crate::utils::{missing_count, round_to};
use polars::prelude::*;

/// Count missing entries in every column and express them as a percentage
/// of the row count (rounded to 2 decimals, 0.0 for an empty DataFrame).
pub(crate) fn summarize_missing(df: &DataFrame) -> Result<MissingSummary> {
    let total_rows = df.height();
    let mut rows = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let series = col.as_materialized_series();
        let count = missing_count(series)?;
        let percent = if total_rows > 0 {
            round_to(count as f64 / total_rows as f64 * 100.0, 2)
        } else {
            0.0
        };

        rows.push(MissingSummaryRow {
            column: col.name().to_string(),
            missing_count: count,
            missing_percent: percent,
        });
    }

    Ok(MissingSummary { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_counts_and_percent() {
        let df = df![
            "A" => [Some(1.0), Some(2.0), None, Some(4.0)],
            "B" => [10.0, 10.0, 20.0, 1000.0],
        ]
        .unwrap();

        let summary = summarize_missing(&df).unwrap();
        let a = summary.get("A").unwrap();
        let b = summary.get("B").unwrap();

        assert_eq!(a.missing_count, 1);
        assert_eq!(a.missing_percent, 25.0);
        assert_eq!(b.missing_count, 0);
        assert_eq!(b.missing_percent, 0.0);
    }

    #[test]
    fn test_percent_is_rounded() {
        let df = df!["x" => [Some("a"), None, Some("c")]].unwrap();
        let summary = summarize_missing(&df).unwrap();
        assert_eq!(summary.rows[0].missing_percent, 33.33);
    }

    #[test]
    fn test_zero_rows_gives_zero_percent() {
        let df = df!["x" => Vec::<f64>::new()].unwrap();
        let summary = summarize_missing(&df).unwrap();
        assert_eq!(summary.rows[0].missing_count, 0);
        assert_eq!(summary.rows[0].missing_percent, 0.0);
    }
}
