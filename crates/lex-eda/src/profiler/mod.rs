//! Data profiling module for dataset analysis.
//!
//! This module builds the two profile tables of a dataset:
//! - a missing-value summary (count and percentage per column)
//! - a column overview (dtype, distinct values, first non-missing value)
//!
//! Both tables contain one row per column, in DataFrame column order.

mod missing;
mod overview;

use crate::error::Result;
use crate::types::{ColumnOverview, DataProfile, MissingSummary};
use polars::prelude::*;
use tracing::debug;

/// Data profiler for analyzing dataset structure.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile an entire dataset.
    ///
    /// A DataFrame without columns yields two empty tables.
    pub fn profile_dataset(df: &DataFrame) -> Result<DataProfile> {
        let missing = missing::summarize_missing(df)?;
        let columns = overview::overview_columns(df)?;

        debug!(
            "Profiled dataset: {} rows, {} columns, {} with missing values",
            df.height(),
            df.width(),
            missing.rows.iter().filter(|r| r.missing_count > 0).count()
        );

        Ok(DataProfile { missing, columns })
    }
}

/// Missing count and percentage for every column.
pub fn missing_summary(df: &DataFrame) -> Result<MissingSummary> {
    missing::summarize_missing(df)
}

/// Dtype, distinct count and sample value for every column.
pub fn column_overview(df: &DataFrame) -> Result<ColumnOverview> {
    overview::overview_columns(df)
}

/// Both profile tables of `df`.
pub fn data_profile(df: &DataFrame) -> Result<DataProfile> {
    DataProfiler::profile_dataset(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tables_share_column_set() {
        let df = df![
            "A" => [Some(1.0), Some(2.0), None, Some(4.0)],
            "B" => [10.0, 10.0, 20.0, 1000.0],
            "C" => [Some("x"), None, None, Some("y")],
        ]
        .unwrap();

        let profile = data_profile(&df).unwrap();
        let expected = vec!["A", "B", "C"];
        assert_eq!(profile.missing.column_names(), expected);
        assert_eq!(profile.columns.column_names(), expected);
        assert_eq!(profile.missing.get("C").unwrap().missing_percent, 50.0);
    }

    #[test]
    fn test_profile_empty_dataframe() {
        let df = DataFrame::empty();
        let profile = data_profile(&df).unwrap();
        assert!(profile.missing.is_empty());
        assert!(profile.columns.is_empty());
    }

    #[test]
    fn test_profile_does_not_modify_input() {
        let df = df!["A" => [Some(1.0), None]].unwrap();
        let before = df.clone();
        let _ = data_profile(&df).unwrap();
        assert!(df.equals_missing(&before));
    }

    #[test]
    fn test_free_functions_match_profile() {
        let df = df!["A" => [Some(1.0), None]].unwrap();
        let profile = data_profile(&df).unwrap();
        assert_eq!(missing_summary(&df).unwrap(), profile.missing);
        assert_eq!(column_overview(&df).unwrap(), profile.columns);
    }
}
