//! Statistical imputation methods.
//!
//! Provides mean and median fill for numeric columns. The target column is
//! replaced by its Float64 coercion, so text that does not parse as a number
//! is filled too.

use crate::coercion::coerce_column;
use crate::error::Result;
use crate::stats::{mean, median};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Statistic used to fill missing numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillStrategy {
    /// Use the mean of non-missing values
    #[default]
    Mean,
    /// Use the median of non-missing values
    Median,
}

impl FillStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
        }
    }
}

/// Statistical imputation for filling missing values.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Compute the fill value for a column without touching the DataFrame.
    ///
    /// NaN when the column has no numeric values.
    pub fn fill_value(df: &DataFrame, column: &str, strategy: FillStrategy) -> Result<f64> {
        let numeric = coerce_column(df, column)?;
        Ok(Self::statistic(&numeric.sorted_present(), strategy))
    }

    /// Return a copy of `df` with missing entries of `column` filled.
    pub fn apply(df: &DataFrame, column: &str, strategy: FillStrategy) -> Result<DataFrame> {
        let numeric = coerce_column(df, column)?;
        let fill_value = Self::statistic(&numeric.sorted_present(), strategy);
        let missing = numeric.len() - numeric.count();

        // nothing to fill: leave the column (and its dtype) untouched
        if missing == 0 {
            return Ok(df.clone());
        }

        if fill_value.is_nan() {
            warn!(
                "Column '{}' has no numeric values; filling {} entries with NaN",
                column, missing
            );
        }

        let mut result = df.clone();
        result.replace(column, numeric.to_filled_series(fill_value))?;

        debug!(
            "Filled {} missing entries in '{}' with {}: {:.4}",
            missing,
            column,
            strategy.as_str(),
            fill_value
        );

        Ok(result)
    }

    fn statistic(sorted: &[f64], strategy: FillStrategy) -> f64 {
        match strategy {
            FillStrategy::Mean => mean(sorted),
            FillStrategy::Median => median(sorted),
        }
    }
}

/// Return a copy of `df` with missing entries of `column` filled using `strategy`.
pub fn fill_missing(df: &DataFrame, column: &str, strategy: FillStrategy) -> Result<DataFrame> {
    StatisticalImputer::apply(df, column, strategy)
}

/// Return a copy of `df` with missing entries of `column` replaced by the column mean.
pub fn replace_with_mean(df: &DataFrame, column: &str) -> Result<DataFrame> {
    fill_missing(df, column, FillStrategy::Mean)
}

/// Return a copy of `df` with missing entries of `column` replaced by the column median.
pub fn replace_with_median(df: &DataFrame, column: &str) -> Result<DataFrame> {
    fill_missing(df, column, FillStrategy::Median)
}
