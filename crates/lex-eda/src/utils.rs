//! Shared utilities for the EDA toolkit.
//!
//! Column lookup, dtype classification and missing-value filtering used
//! across the profiler, statistics and outlier modules.

use crate::error::{EdaError, Result};
use polars::prelude::*;

// =============================================================================
// Column Lookup
// =============================================================================

/// Look up a column by name, failing with [`EdaError::ColumnNotFound`].
///
/// Every column-level operation calls this before doing any work, so an
/// unknown name never leads to a partially processed DataFrame.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| EdaError::ColumnNotFound(name.to_string()))
}

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Category of a data type for display and coercion purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtypeCategory {
    /// Integer or floating point numbers
    Numeric,
    /// Date or datetime types
    Datetime,
    /// Boolean type
    Boolean,
    /// String/text type
    String,
    /// Other/unknown types
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

/// Get the category of a DataType.
pub fn get_dtype_category(dtype: &DataType) -> DtypeCategory {
    if is_numeric_dtype(dtype) {
        DtypeCategory::Numeric
    } else if is_datetime_dtype(dtype) {
        DtypeCategory::Datetime
    } else if matches!(dtype, DataType::Boolean) {
        DtypeCategory::Boolean
    } else if matches!(dtype, DataType::String) || dtype.is_categorical() || dtype.is_enum() {
        DtypeCategory::String
    } else {
        DtypeCategory::Other
    }
}

/// Label used for a column's element type in the column overview.
pub fn dtype_label(dtype: &DataType) -> String {
    format!("{:?}", dtype)
}

// =============================================================================
// Missing Values
// =============================================================================

/// Non-missing values of a Series, in row order.
///
/// Nulls are always missing. In float columns NaN is missing too, since that
/// is what a fill over an all-missing column writes.
pub fn present_values(series: &Series) -> PolarsResult<Series> {
    let non_null = series.drop_nulls();
    if non_null.dtype().is_float() {
        let mask = non_null.is_not_nan()?;
        non_null.filter(&mask)
    } else {
        Ok(non_null)
    }
}

/// Number of missing entries in a Series.
pub fn missing_count(series: &Series) -> PolarsResult<usize> {
    Ok(series.len() - present_values(series)?.len())
}

/// Round to a fixed number of decimal places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_column() {
        let df = df!["a" => [1, 2, 3]].unwrap();
        assert_eq!(require_column(&df, "a").unwrap().len(), 3);

        let err = require_column(&df, "b").unwrap_err();
        assert!(matches!(err, EdaError::ColumnNotFound(ref name) if name == "b"));
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_dtype_category() {
        assert_eq!(get_dtype_category(&DataType::Int64), DtypeCategory::Numeric);
        assert_eq!(get_dtype_category(&DataType::Date), DtypeCategory::Datetime);
        assert_eq!(
            get_dtype_category(&DataType::Boolean),
            DtypeCategory::Boolean
        );
        assert_eq!(get_dtype_category(&DataType::String), DtypeCategory::String);
    }

    #[test]
    fn test_dtype_label() {
        assert_eq!(dtype_label(&DataType::Float64), "Float64");
        assert_eq!(dtype_label(&DataType::String), "String");
    }

    #[test]
    fn test_present_values_drops_nulls_and_nan() {
        let series = Series::new("x".into(), &[Some(1.0), None, Some(f64::NAN), Some(4.0)]);
        let present = present_values(&series).unwrap();
        assert_eq!(present.len(), 2);
        assert_eq!(missing_count(&series).unwrap(), 2);
    }

    #[test]
    fn test_present_values_strings() {
        let series = Series::new("s".into(), &[Some("a"), None, Some("NaN")]);
        // NaN text is a value once loaded; only nulls are missing here
        assert_eq!(present_values(&series).unwrap().len(), 2);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.3333, 2), 33.33);
        assert_eq!(round_to(66.666, 2), 66.67);
        assert_eq!(round_to(25.0, 2), 25.0);
    }
}
