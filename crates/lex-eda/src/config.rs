//! Configuration types for loading, writing, plotting and outlier detection.
//!
//! Options are plain values passed into each call; nothing here is
//! process-wide state. [`LoadOptions`] uses the builder pattern for the
//! missing-token set, which is the part callers most often customize.

use serde::{Deserialize, Serialize};

/// Conventional missing-value tokens recognised by most CSV tooling.
pub const DEFAULT_MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Dirty markers that are always treated as missing, even when the
/// conventional set is replaced.
pub const DIRTY_MARKERS: [&str; 3] = ["", "ERROR", "UNKNOWN"];

/// Default multiplier applied to the inter-quartile range.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Options for reading a CSV file into a DataFrame.
///
/// Use [`LoadOptions::builder()`] to customize.
///
/// # Example
///
/// ```rust,ignore
/// use lex_eda::config::LoadOptions;
///
/// let options = LoadOptions::builder()
///     .extra_missing_token("-")
///     .extra_missing_token("?")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Whether the conventional tokens in [`DEFAULT_MISSING_TOKENS`] count as missing.
    /// When false, only `extra_missing_tokens` and [`DIRTY_MARKERS`] do.
    /// Default: true
    pub keep_default_missing_tokens: bool,

    /// Additional tokens to treat as missing.
    /// Default: empty
    pub extra_missing_tokens: Vec<String>,

    /// Field separator.
    /// Default: b','
    pub separator: u8,

    /// Number of rows sampled for schema inference (`None` = scan everything).
    /// Default: Some(1000)
    pub infer_schema_length: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            keep_default_missing_tokens: true,
            extra_missing_tokens: Vec::new(),
            separator: b',',
            infer_schema_length: Some(1000),
        }
    }
}

impl LoadOptions {
    /// Create a new options builder.
    pub fn builder() -> LoadOptionsBuilder {
        LoadOptionsBuilder::default()
    }

    /// The effective missing-token set, deduplicated and in a stable order.
    pub fn missing_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        let defaults: &[&str] = if self.keep_default_missing_tokens {
            &DEFAULT_MISSING_TOKENS
        } else {
            &[]
        };

        let candidates = defaults
            .iter()
            .chain(DIRTY_MARKERS.iter())
            .map(|s| s.to_string())
            .chain(self.extra_missing_tokens.iter().cloned());

        for token in candidates {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Validate the options and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidSchemaLength);
        }
        if self.separator == b'"' || self.separator == b'\n' {
            return Err(ConfigValidationError::InvalidSeparator(self.separator as char));
        }
        Ok(())
    }
}

/// Builder for [`LoadOptions`] with fluent API.
#[derive(Debug, Default)]
pub struct LoadOptionsBuilder {
    keep_default_missing_tokens: Option<bool>,
    extra_missing_tokens: Vec<String>,
    separator: Option<u8>,
    infer_schema_length: Option<Option<usize>>,
}

impl LoadOptionsBuilder {
    /// Keep or drop the conventional missing-token set.
    ///
    /// Dropping it *replaces* the set with the extra tokens (plus the dirty
    /// markers `""`, `ERROR` and `UNKNOWN`, which always apply).
    pub fn keep_default_missing_tokens(mut self, keep: bool) -> Self {
        self.keep_default_missing_tokens = Some(keep);
        self
    }

    /// Add a single token to treat as missing.
    pub fn extra_missing_token(mut self, token: impl Into<String>) -> Self {
        self.extra_missing_tokens.push(token.into());
        self
    }

    /// Add several tokens to treat as missing.
    pub fn extra_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_missing_tokens
            .extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Set the field separator.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set how many rows are sampled for schema inference.
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Build the options.
    ///
    /// Returns validated `LoadOptions` or an error if validation fails.
    pub fn build(self) -> Result<LoadOptions, ConfigValidationError> {
        let options = LoadOptions {
            keep_default_missing_tokens: self.keep_default_missing_tokens.unwrap_or(true),
            extra_missing_tokens: self.extra_missing_tokens,
            separator: self.separator.unwrap_or(b','),
            infer_schema_length: self.infer_schema_length.unwrap_or(Some(1000)),
        };

        options.validate()?;
        Ok(options)
    }
}

/// Options for writing a DataFrame as CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Prepend a 0-based row-index column.
    /// Default: false
    pub include_index: bool,

    /// Header label of the row-index column.
    /// Default: "index"
    pub index_label: String,

    /// Field separator.
    /// Default: b','
    pub separator: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            include_index: false,
            index_label: "index".to_string(),
            separator: b',',
        }
    }
}

impl WriteOptions {
    /// Shorthand for enabling the row-index column.
    pub fn with_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }
}

/// Display options for the text visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Number of histogram bins.
    /// Default: 10
    pub bins: usize,

    /// Plot title. Defaults to "Histogram of {column}" / "Box plot of {column}".
    pub title: Option<String>,

    /// Width of the drawing area in characters.
    /// Default: 50
    pub width: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            title: None,
            width: 50,
        }
    }
}

impl PlotOptions {
    /// Set the number of bins.
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate the options and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.bins == 0 {
            return Err(ConfigValidationError::InvalidBins(self.bins));
        }
        if self.width == 0 {
            return Err(ConfigValidationError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

/// Parameters of the IQR outlier rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Fences sit this many IQRs beyond Q1 and Q3.
    /// Default: 1.5
    pub iqr_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }
}

impl OutlierConfig {
    /// Create a config with a custom multiplier.
    pub fn new(iqr_multiplier: f64) -> Result<Self, ConfigValidationError> {
        let config = Self { iqr_multiplier };
        config.validate()?;
        Ok(config)
    }

    /// Validate the config and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(ConfigValidationError::InvalidMultiplier(self.iqr_multiplier));
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid schema inference length: 0 (use None to scan all rows)")]
    InvalidSchemaLength,

    #[error("Invalid separator: {0:?}")]
    InvalidSeparator(char),

    #[error("Invalid bin count: {0} (must be at least 1)")]
    InvalidBins(usize),

    #[error("Invalid plot width: {0} (must be at least 1)")]
    InvalidWidth(usize),

    #[error("Invalid IQR multiplier: {0} (must be finite and non-negative)")]
    InvalidMultiplier(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_include_dirty_markers() {
        let tokens = LoadOptions::default().missing_tokens();
        assert!(tokens.contains(&"ERROR".to_string()));
        assert!(tokens.contains(&"UNKNOWN".to_string()));
        assert!(tokens.contains(&"".to_string()));
        assert!(tokens.contains(&"NA".to_string()));
        // "" appears in both sets but only once in the result
        assert_eq!(tokens.iter().filter(|t| t.is_empty()).count(), 1);
    }

    #[test]
    fn test_extra_tokens_extend_the_set() {
        let options = LoadOptions::builder()
            .extra_missing_token("-")
            .extra_missing_tokens(["?", "missing"])
            .build()
            .unwrap();

        let tokens = options.missing_tokens();
        assert!(tokens.contains(&"-".to_string()));
        assert!(tokens.contains(&"?".to_string()));
        assert!(tokens.contains(&"missing".to_string()));
        assert!(tokens.contains(&"NULL".to_string()));
    }

    #[test]
    fn test_replacing_defaults_keeps_dirty_markers() {
        let options = LoadOptions::builder()
            .keep_default_missing_tokens(false)
            .extra_missing_token("-")
            .build()
            .unwrap();

        let tokens = options.missing_tokens();
        assert_eq!(tokens, vec!["", "ERROR", "UNKNOWN", "-"]);
    }

    #[test]
    fn test_builder_defaults() {
        let options = LoadOptions::builder().build().unwrap();
        assert_eq!(options, LoadOptions::default());
        assert_eq!(options.infer_schema_length, Some(1000));
    }

    #[test]
    fn test_validation_zero_schema_length() {
        let result = LoadOptions::builder().infer_schema_length(Some(0)).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidSchemaLength
        ));
    }

    #[test]
    fn test_validation_quote_separator() {
        let result = LoadOptions::builder().separator(b'"').build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidSeparator('"')
        ));
    }

    #[test]
    fn test_plot_options_validation() {
        assert!(PlotOptions::default().validate().is_ok());
        assert!(matches!(
            PlotOptions::default().bins(0).validate().unwrap_err(),
            ConfigValidationError::InvalidBins(0)
        ));
    }

    #[test]
    fn test_outlier_config_validation() {
        assert_eq!(OutlierConfig::default().iqr_multiplier, 1.5);
        assert!(OutlierConfig::new(3.0).is_ok());
        assert!(OutlierConfig::new(-1.0).is_err());
        assert!(OutlierConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_load_options_from_json() {
        let json = r#"{
            "keep_default_missing_tokens": false,
            "extra_missing_tokens": ["-"],
            "separator": 59,
            "infer_schema_length": null
        }"#;

        let options: LoadOptions = serde_json::from_str(json).unwrap();
        assert!(!options.keep_default_missing_tokens);
        assert_eq!(options.separator, b';');
        assert_eq!(options.infer_schema_length, None);
    }
}
