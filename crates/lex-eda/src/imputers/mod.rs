//! Imputation module for handling missing values.
//!
//! Mean and median fill for a single numeric column.

mod statistical;

pub use statistical::{
    FillStrategy, StatisticalImputer, fill_missing, replace_with_mean, replace_with_median,
};
