//! Exploratory Data Analysis Library
//!
//! A small exploratory data analysis toolkit built on Polars.
//!
//! # Overview
//!
//! This library covers the first look at a tabular dataset:
//!
//! - **Loading**: CSV input with dirty markers (`ERROR`, `UNKNOWN`, empty) read as missing
//! - **Profiling**: Missing-value summary and column overview tables
//! - **Statistics**: Count, mean, median and sample standard deviation of a column
//! - **Outliers**: IQR-rule flagging and trimming
//! - **Imputation**: Mean or median fill for a single column
//! - **Reporting**: Plain-text and JSON summaries of a profile
//! - **Plots**: Text histograms and box plots
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_eda::{LoadOptions, data_profile, load_csv, summarize_profile};
//!
//! let df = load_csv("dirty_cafe_sales.csv", &LoadOptions::default())?;
//!
//! let profile = data_profile(&df)?;
//! println!("{}", summarize_profile(&profile));
//!
//! let summary = lex_eda::summarize_column(&df, "Total Spent")?;
//! println!("mean = {:.2}, median = {:.2}", summary.mean, summary.median);
//!
//! let trimmed = lex_eda::trim_outliers(&df, "Total Spent")?;
//! let filled = lex_eda::replace_with_median(&trimmed, "Quantity")?;
//! lex_eda::export_csv(&filled, "outputs/cleaned.csv", &Default::default())?;
//! ```
//!
//! # Numeric Coercion
//!
//! Statistics, outliers, imputation and plots work on the *numeric coercion*
//! of a column: each cell becomes a number or a missing marker. Text that
//! does not parse as a number, nulls and NaN are all missing, so a column of
//! text yields an all-missing coercion rather than an error.
//!
//! # Errors
//!
//! All fallible operations return [`error::Result`]. Referencing a column
//! that does not exist yields [`EdaError::ColumnNotFound`] before any work
//! is done; input DataFrames are never modified in place.

pub mod coercion;
pub mod config;
pub mod error;
pub mod imputers;
pub mod io;
pub mod outliers;
pub mod profiler;
pub mod reporting;
pub mod stats;
pub mod types;
pub mod utils;
pub mod viz;

// Re-exports for convenient access
pub use coercion::{Coerced, NumericColumn, coerce_column, coerce_series};
pub use config::{
    ConfigValidationError, LoadOptions, LoadOptionsBuilder, OutlierConfig, PlotOptions,
    WriteOptions,
};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use imputers::{
    FillStrategy, StatisticalImputer, fill_missing, replace_with_mean, replace_with_median,
};
pub use io::{export_csv, load_csv};
pub use outliers::{
    IqrBounds, OutlierMask, flag_outliers, flag_outliers_with, iqr_bounds, iqr_bounds_with,
    trim_outliers, trim_outliers_with,
};
pub use profiler::{DataProfiler, column_overview, data_profile, missing_summary};
pub use reporting::{ProfileReport, ReportGenerator, summarize_profile, summarize_tables};
pub use stats::summarize_column;
pub use types::{
    ColumnOverview, ColumnOverviewRow, ColumnSummary, DataProfile, MissingSummary,
    MissingSummaryRow, SampleValue,
};
pub use viz::{BoxPlotStats, Histogram, box_plot_stats, histogram, plot_box, show_histogram};
