//! Plain-text rendering of a data profile.

use crate::types::{ColumnOverview, DataProfile, MissingSummary};

/// Message used when either profile table is unavailable.
pub const NO_PROFILE_MESSAGE: &str = "No profile information available.";

/// Render a profile as a short, human-readable summary.
///
/// ```text
/// Dataset with approximately 2 rows and 2 columns.
/// Columns:
/// - A (Float64), unique=3, missing=25.0%
/// - B (Float64), unique=3, missing=0.0%
/// ```
pub fn summarize_profile(profile: &DataProfile) -> String {
    summarize_tables(Some(&profile.missing), Some(&profile.columns))
}

/// Render the summary from individually supplied tables.
///
/// Returns [`NO_PROFILE_MESSAGE`] if either table is `None`.
pub fn summarize_tables(
    missing: Option<&MissingSummary>,
    columns: Option<&ColumnOverview>,
) -> String {
    let (Some(missing), Some(columns)) = (missing, columns) else {
        return NO_PROFILE_MESSAGE.to_string();
    };

    let mut lines = Vec::with_capacity(columns.len() + 2);
    lines.push(format!(
        "Dataset with approximately {} rows and {} columns.",
        estimate_row_count(missing),
        columns.len()
    ));
    lines.push("Columns:".to_string());

    for row in &columns.rows {
        let missing_pct = missing
            .get(&row.column)
            .map_or(0.0, |m| m.missing_percent);
        lines.push(format!(
            "- {} ({}), unique={}, missing={:.1}%",
            row.column, row.dtype, row.unique, missing_pct
        ));
    }

    lines.join("\n")
}

/// Reconstruct the row count from missing counts alone.
///
/// Takes the largest missing count and adds one when some column has no
/// missing values. This is an approximation: the profile does not carry the
/// row count, and the estimate is only exact when the most-missing column is
/// missing everything but one row.
pub fn estimate_row_count(missing: &MissingSummary) -> usize {
    let counts = missing.rows.iter().map(|row| row.missing_count);
    let (Some(max), Some(min)) = (counts.clone().max(), counts.min()) else {
        return 0;
    };
    max + usize::from(min == 0)
}
