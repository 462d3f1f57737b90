//! Outlier detection with the inter-quartile-range rule.
//!
//! A value is an outlier when it lies strictly outside
//! `[Q1 - k * IQR, Q3 + k * IQR]`, with `k = 1.5` by default. Quartiles are
//! linearly interpolated between order statistics. Missing values are never
//! flagged.
//!
//! With fewer than two non-missing values Q1 equals Q3, so IQR is 0 and both
//! fences sit on Q1. That is the rule applied as-is, not a special case.

use crate::coercion::{NumericColumn, coerce_column};
use crate::config::OutlierConfig;
use crate::error::Result;
use crate::stats::quantile;
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Quartiles and fences of the IQR rule for one column.
///
/// All fields are NaN when the column has no numeric values, in which case
/// nothing is an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Compute bounds from values sorted ascending.
    pub fn from_sorted(sorted: &[f64], multiplier: f64) -> Self {
        let q1 = quantile(sorted, 0.25);
        let q3 = quantile(sorted, 0.75);
        let iqr = q3 - q1;

        Self {
            q1,
            q3,
            iqr,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        }
    }

    /// Strictly below the lower fence or strictly above the upper one.
    #[inline]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Boolean flags aligned 1:1 with a column's rows; `true` marks an outlier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierMask {
    column: String,
    flags: Vec<bool>,
}

impl OutlierMask {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_flagged(&self, row: usize) -> bool {
        self.flags.get(row).copied().unwrap_or(false)
    }

    /// Number of rows flagged as outliers.
    pub fn flagged_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Indices of flagged rows.
    pub fn flagged_rows(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }

    /// The mask as a boolean Series named after the column.
    pub fn to_series(&self) -> Series {
        Series::new(self.column.as_str().into(), self.flags.as_slice())
    }

    /// Inverse of the mask, suitable for `DataFrame::filter`.
    fn keep_mask(&self) -> BooleanChunked {
        self.flags.iter().map(|&f| !f).collect()
    }
}

/// IQR bounds of a column with the default 1.5 multiplier.
pub fn iqr_bounds(df: &DataFrame, column: &str) -> Result<IqrBounds> {
    iqr_bounds_with(df, column, &OutlierConfig::default())
}

/// IQR bounds of a column with a custom multiplier.
pub fn iqr_bounds_with(df: &DataFrame, column: &str, config: &OutlierConfig) -> Result<IqrBounds> {
    config.validate()?;
    let numeric = coerce_column(df, column)?;
    Ok(bounds_for(&numeric, config))
}

/// Flag outliers in a column with the default 1.5 multiplier.
pub fn flag_outliers(df: &DataFrame, column: &str) -> Result<OutlierMask> {
    flag_outliers_with(df, column, &OutlierConfig::default())
}

/// Flag outliers in a column with a custom multiplier.
pub fn flag_outliers_with(
    df: &DataFrame,
    column: &str,
    config: &OutlierConfig,
) -> Result<OutlierMask> {
    config.validate()?;
    let numeric = coerce_column(df, column)?;
    let bounds = bounds_for(&numeric, config);

    let flags: Vec<bool> = numeric
        .values()
        .iter()
        .map(|c| c.value().is_some_and(|v| bounds.is_outlier(v)))
        .collect();

    let mask = OutlierMask {
        column: column.to_string(),
        flags,
    };

    debug!(
        "Flagged {} of {} rows in '{}' (bounds [{:.4}, {:.4}])",
        mask.flagged_count(),
        mask.len(),
        column,
        bounds.lower,
        bounds.upper
    );

    Ok(mask)
}

/// Copy of `df` without the rows flagged in `column`, order preserved.
pub fn trim_outliers(df: &DataFrame, column: &str) -> Result<DataFrame> {
    trim_outliers_with(df, column, &OutlierConfig::default())
}

/// Copy of `df` without the rows flagged in `column`, using a custom multiplier.
pub fn trim_outliers_with(
    df: &DataFrame,
    column: &str,
    config: &OutlierConfig,
) -> Result<DataFrame> {
    let mask = flag_outliers_with(df, column, config)?;
    if mask.flagged_count() == 0 {
        return Ok(df.clone());
    }

    let trimmed = df.filter(&mask.keep_mask())?;
    debug!(
        "Trimmed '{}': {} -> {} rows",
        column,
        df.height(),
        trimmed.height()
    );
    Ok(trimmed)
}

fn bounds_for(numeric: &NumericColumn, config: &OutlierConfig) -> IqrBounds {
    IqrBounds::from_sorted(&numeric.sorted_present(), config.iqr_multiplier)
}
