//! Reading and writing CSV files.
//!
//! Loading applies an explicit missing-token set (see [`LoadOptions`]) so
//! dirty markers such as `ERROR` or `UNKNOWN` come back as nulls and numeric
//! columns are inferred as numbers.

use crate::config::{LoadOptions, WriteOptions};
use crate::error::{EdaError, Result, ResultExt};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

/// Read a CSV file into a DataFrame.
///
/// Fails with [`EdaError::FileNotFound`] if `path` does not exist.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    options.validate()?;

    // Check up front for a clearer error than Polars' I/O error
    if !path.exists() {
        return Err(EdaError::FileNotFound(path.to_path_buf()));
    }

    let tokens: Vec<PlSmallStr> = options
        .missing_tokens()
        .into_iter()
        .map(PlSmallStr::from)
        .collect();
    debug!("Missing tokens for '{}': {:?}", path.display(), tokens);

    let parse_options = CsvParseOptions::default()
        .with_separator(options.separator)
        .with_quote_char(Some(b'"'))
        .with_missing_is_null(true)
        .with_null_values(Some(NullValues::AllColumns(tokens)));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Failed to open '{}'", path.display()))?
        .finish()
        .context(format!("Failed to parse '{}'", path.display()))?;

    info!(
        "Loaded '{}': {} rows x {} columns",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(df)
}

/// Write a DataFrame as CSV, creating parent directories as needed.
///
/// Output has a header row, standard double-quote quoting and empty fields
/// for missing values.
pub fn export_csv(df: &DataFrame, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut out = if options.include_index {
        df.with_row_index(options.index_label.as_str().into(), None)?
    } else {
        df.clone()
    };

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(options.separator)
        .with_quote_char(b'"')
        .finish(&mut out)
        .context(format!("Failed to write '{}'", path.display()))?;

    info!(
        "Dataset saved: {} ({} rows)",
        path.display(),
        out.height()
    );

    Ok(())
}
