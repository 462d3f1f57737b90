use crate::error::Result;
use crate::profiler::data_profile;
use crate::reporting::summary::summarize_profile;
use crate::types::DataProfile;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// Profile Report
// ============================================================================

/// Profile of a dataset together with its rendered text summary.
///
/// Used for JSON output (`--json`) and for reports written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Path of the profiled file, if it came from disk
    pub input_file: Option<String>,
    /// Actual row count (the text summary only estimates it)
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Missing-value summary and column overview
    pub profile: DataProfile,
    /// Text rendering of `profile`
    pub summary: String,
}

/// Builds and writes profile reports.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Profile `df` and render its summary.
    pub fn build_report(df: &DataFrame, input_file: Option<&Path>) -> Result<ProfileReport> {
        let profile = data_profile(df)?;
        let summary = summarize_profile(&profile);

        Ok(ProfileReport {
            input_file: input_file.map(|p| p.display().to_string()),
            rows: df.height(),
            columns: df.width(),
            profile,
            summary,
        })
    }

    /// Write a report as pretty JSON to `<output_dir>/<base_name>_report.json`.
    pub fn write_report_to_file(&self, report: &ProfileReport, base_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self.output_dir.join(format!("{}_report.json", base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let df = df![
            "A" => [Some(1.0), Some(2.0), None, Some(4.0)],
            "B" => [10.0, 10.0, 20.0, 1000.0],
        ]
        .unwrap();

        let report = ReportGenerator::build_report(&df, Some(Path::new("data/sample.csv"))).unwrap();
        assert_eq!(report.rows, 4);
        assert_eq!(report.columns, 2);
        assert_eq!(report.input_file.as_deref(), Some("data/sample.csv"));
        // max missing count 1, plus one for the complete column B
        assert!(report.summary.starts_with("Dataset with approximately 2 rows and 2 columns."));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["profile"]["missing"][0]["missing_percent"], 25.0);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = std::env::temp_dir().join(format!("lex_eda_report_{}", std::process::id()));
        let df = df!["x" => [1, 2, 3]].unwrap();
        let report = ReportGenerator::build_report(&df, None).unwrap();

        let path = ReportGenerator::new(&dir)
            .write_report_to_file(&report, "numbers")
            .unwrap();

        assert!(path.ends_with("numbers_report.json"));
        let written: ProfileReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.rows, 3);

        let _ = fs::remove_dir_all(&dir);
    }
}
