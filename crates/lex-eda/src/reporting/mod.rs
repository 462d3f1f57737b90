//! Report generation module.
//!
//! Turns a [`DataProfile`](crate::types::DataProfile) into text or JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use lex_eda::reporting::{ReportGenerator, summarize_profile};
//!
//! let profile = lex_eda::data_profile(&df)?;
//! println!("{}", summarize_profile(&profile));
//!
//! // Or write a JSON report next to the data
//! let report = ReportGenerator::build_report(&df, Some(path))?;
//! ReportGenerator::new("output").write_report_to_file(&report, "sales")?;
//! ```

mod generator;
mod summary;

pub use generator::{ProfileReport, ReportGenerator};
pub use summary::{NO_PROFILE_MESSAGE, estimate_row_count, summarize_profile, summarize_tables};
