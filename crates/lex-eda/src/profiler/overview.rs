//! Per-column type, cardinality and sample value.

use crate::error::Result;
use crate::types::{ColumnOverview, ColumnOverviewRow, SampleValue};
use crate::utils::{dtype_label, present_values};
use polars::prelude::*;

/// Build one overview row per column.
///
/// `unique` counts distinct non-missing values; `sample_value` is the first
/// non-missing value in row order.
pub(crate) fn overview_columns(df: &DataFrame) -> Result<ColumnOverview> {
    let mut rows = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let series = col.as_materialized_series();
        let present = present_values(series)?;

        let unique = if present.is_empty() {
            0
        } else {
            present.n_unique()?
        };

        let sample_value = if present.is_empty() {
            None
        } else {
            SampleValue::from_any_value(&present.get(0)?)
        };

        rows.push(ColumnOverviewRow {
            column: col.name().to_string(),
            dtype: dtype_label(series.dtype()),
            unique,
            sample_value,
        });
    }

    Ok(ColumnOverview { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overview_numeric_and_text() {
        let df = df![
            "item" => [None, Some("Coffee"), Some("Tea"), Some("Coffee")],
            "qty" => [Some(2i64), Some(2), None, Some(5)],
        ]
        .unwrap();

        let overview = overview_columns(&df).unwrap();
        assert_eq!(overview.column_names(), vec!["item", "qty"]);

        let item = overview.get("item").unwrap();
        assert_eq!(item.dtype, "String");
        assert_eq!(item.unique, 2);
        assert_eq!(item.sample_value, Some(SampleValue::Text("Coffee".to_string())));

        let qty = overview.get("qty").unwrap();
        assert_eq!(qty.dtype, "Int64");
        assert_eq!(qty.unique, 2);
        assert_eq!(qty.sample_value, Some(SampleValue::Int(2)));
    }

    #[test]
    fn test_overview_all_missing_column() {
        let df = df!["empty" => [Option::<f64>::None, None]].unwrap();
        let overview = overview_columns(&df).unwrap();

        let row = &overview.rows[0];
        assert_eq!(row.unique, 0);
        assert_eq!(row.sample_value, None);
    }

    #[test]
    fn test_overview_ignores_nan() {
        let df = df!["x" => [f64::NAN, 1.5, 1.5]].unwrap();
        let row = overview_columns(&df).unwrap().rows.remove(0);
        assert_eq!(row.unique, 1);
        assert_eq!(row.sample_value, Some(SampleValue::Float(1.5)));
    }
}
