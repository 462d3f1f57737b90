use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Column Statistics
// ============================================================================

/// Descriptive statistics for one numerically coerced column.
///
/// `mean` and `median` are NaN when `count == 0`; `std` is the sample
/// standard deviation and is exactly 0.0 when `count <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Missing-value counts for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummaryRow {
    pub column: String,
    pub missing_count: usize,
    /// Percentage of rows, in [0, 100], rounded to 2 decimals.
    pub missing_percent: f64,
}

/// One [`MissingSummaryRow`] per column, in DataFrame column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingSummary {
    pub rows: Vec<MissingSummaryRow>,
}

impl MissingSummary {
    pub fn get(&self, column: &str) -> Option<&MissingSummaryRow> {
        self.rows.iter().find(|row| row.column == column)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.column.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// First non-missing value of a column, kept with its scalar type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SampleValue {
    /// Convert a Polars scalar; `Null` has no sample value.
    pub fn from_any_value(value: &AnyValue<'_>) -> Option<Self> {
        let sample = match value {
            AnyValue::Null => return None,
            AnyValue::Boolean(b) => SampleValue::Bool(*b),
            AnyValue::String(s) => SampleValue::Text(s.to_string()),
            AnyValue::StringOwned(s) => SampleValue::Text(s.to_string()),
            AnyValue::Int8(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::Int16(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::Int32(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::Int64(v) => SampleValue::Int(*v),
            AnyValue::UInt8(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::UInt16(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::UInt32(v) => SampleValue::Int(i64::from(*v)),
            AnyValue::UInt64(v) => match i64::try_from(*v) {
                Ok(i) => SampleValue::Int(i),
                Err(_) => SampleValue::Float(*v as f64),
            },
            AnyValue::Float32(v) => SampleValue::Float(f64::from(*v)),
            AnyValue::Float64(v) => SampleValue::Float(*v),
            other => SampleValue::Text(other.to_string()),
        };
        Some(sample)
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Bool(b) => write!(f, "{}", b),
            SampleValue::Int(i) => write!(f, "{}", i),
            SampleValue::Float(v) => write!(f, "{}", v),
            SampleValue::Text(s) => f.write_str(s),
        }
    }
}

/// Type, cardinality and an example value for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOverviewRow {
    pub column: String,
    pub dtype: String,
    /// Distinct non-missing values.
    pub unique: usize,
    /// First non-missing value in row order; `None` if the column is entirely missing.
    pub sample_value: Option<SampleValue>,
}

/// One [`ColumnOverviewRow`] per column, in DataFrame column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOverview {
    pub rows: Vec<ColumnOverviewRow>,
}

impl ColumnOverview {
    pub fn get(&self, column: &str) -> Option<&ColumnOverviewRow> {
        self.rows.iter().find(|row| row.column == column)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.column.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The two profile tables of a dataset, keyed by the same column names.
///
/// Serializes as `{"missing": [...], "columns": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataProfile {
    pub missing: MissingSummary,
    pub columns: ColumnOverview,
}

static_assertions::assert_impl_all!(DataProfile: Send, Sync);
static_assertions::assert_impl_all!(ColumnSummary: Send, Sync);
