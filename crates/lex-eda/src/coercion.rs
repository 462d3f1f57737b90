//! Best-effort numeric coercion.
//!
//! Each element of a column becomes either [`Coerced::Value`] or
//! [`Coerced::Missing`]. Nulls, NaN, and text that does not parse as a
//! number all map to `Missing`, so downstream code filters on the tag
//! instead of relying on null propagation.

use crate::error::Result;
use crate::utils::{DtypeCategory, get_dtype_category, require_column};
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Result of coercing a single element to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Coerced {
    Value(f64),
    Missing,
}

impl Coerced {
    /// Wrap an optional float; `None` and NaN are missing.
    #[inline]
    pub fn from_f64(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Coerced::Value(v),
            _ => Coerced::Missing,
        }
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Coerced::Value(v) => Some(v),
            Coerced::Missing => None,
        }
    }

    #[inline]
    pub fn is_missing(self) -> bool {
        matches!(self, Coerced::Missing)
    }
}

/// Parse text as a number, trimming surrounding whitespace.
pub fn parse_numeric(text: &str) -> Coerced {
    match text.trim().parse::<f64>() {
        Ok(v) => Coerced::from_f64(Some(v)),
        Err(_) => Coerced::Missing,
    }
}

/// Coerce every element of a Series.
///
/// Numbers pass through, booleans become 1/0, text is parsed. Any other
/// dtype (dates, durations, decimals) goes through a non-strict cast to
/// `Float64`; a dtype that cannot be cast comes back all-missing.
pub fn coerce_series(series: &Series) -> PolarsResult<Vec<Coerced>> {
    let dtype = series.dtype();

    match get_dtype_category(dtype) {
        DtypeCategory::Numeric => Ok(series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(Coerced::from_f64)
            .collect()),
        DtypeCategory::Boolean => Ok(series
            .bool()?
            .into_iter()
            .map(|v| Coerced::from_f64(v.map(|b| if b { 1.0 } else { 0.0 })))
            .collect()),
        DtypeCategory::String => {
            let text = series.cast(&DataType::String)?;
            Ok(text
                .str()?
                .into_iter()
                .map(|v| v.map_or(Coerced::Missing, parse_numeric))
                .collect())
        }
        DtypeCategory::Datetime | DtypeCategory::Other => match series.cast(&DataType::Float64) {
            Ok(cast) => Ok(cast.f64()?.into_iter().map(Coerced::from_f64).collect()),
            Err(e) => {
                debug!(
                    "Column '{}' ({:?}) has no numeric interpretation: {}",
                    series.name(),
                    dtype,
                    e
                );
                Ok(vec![Coerced::Missing; series.len()])
            }
        },
    }
}

/// A column after numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    name: String,
    values: Vec<Coerced>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<Coerced>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All coerced elements in row order.
    pub fn values(&self) -> &[Coerced] {
        &self.values
    }

    /// Number of rows, missing included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Non-missing values in row order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|c| c.value())
    }

    /// Number of non-missing values.
    pub fn count(&self) -> usize {
        self.present().count()
    }

    /// Non-missing values, sorted ascending.
    pub fn sorted_present(&self) -> Vec<f64> {
        let mut sorted: Vec<f64> = self.present().collect();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Float64 Series with nulls where values are missing.
    pub fn to_series(&self) -> Series {
        let values: Vec<Option<f64>> = self.values.iter().map(|c| c.value()).collect();
        Series::new(self.name.as_str().into(), values)
    }

    /// Float64 Series with every missing entry replaced by `fill`.
    pub fn to_filled_series(&self, fill: f64) -> Series {
        let values: Vec<f64> = self
            .values
            .iter()
            .map(|c| c.value().unwrap_or(fill))
            .collect();
        Series::new(self.name.as_str().into(), values)
    }
}

/// Look up a column and coerce it to numbers.
pub fn coerce_column(df: &DataFrame, column: &str) -> Result<NumericColumn> {
    let series = require_column(df, column)?;
    let values = coerce_series(series)?;
    Ok(NumericColumn::new(column, values))
}
