//! CLI entry point for the exploratory data analysis toolkit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lex_eda::{
    FillStrategy, LoadOptions, OutlierConfig, PlotOptions, ReportGenerator, WriteOptions,
    export_csv, fill_missing, flag_outliers_with, iqr_bounds_with, load_csv, plot_box,
    show_histogram, summarize_column, trim_outliers_with,
};
use polars::prelude::DataFrame;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// CLI-compatible fill strategy enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFillStrategy {
    /// Replace missing values with the column mean
    Mean,
    /// Replace missing values with the column median
    Median,
}

impl From<CliFillStrategy> for FillStrategy {
    fn from(cli: CliFillStrategy) -> Self {
        match cli {
            CliFillStrategy::Mean => FillStrategy::Mean,
            CliFillStrategy::Median => FillStrategy::Median,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Exploratory data analysis for CSV files",
    long_about = "Profile a CSV file, summarize columns, find IQR outliers and fill gaps.\n\n\
                  Cells equal to ERROR, UNKNOWN, an empty string or a conventional NA\n\
                  token are read as missing.\n\n\
                  EXAMPLES:\n  \
                  # Missing values and column overview\n  \
                  lex-eda profile -i dirty_cafe_sales.csv\n\n  \
                  # Drop outlier rows and save the result\n  \
                  lex-eda outliers -i sales.csv -c \"Total Spent\" --trim -o trimmed.csv\n\n  \
                  # Fill gaps with the median\n  \
                  lex-eda fill -i sales.csv -c Quantity --strategy median -o filled.csv"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show errors and results)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Additional token to read as missing (repeatable)
    #[arg(long = "na-value", global = true)]
    na_values: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the missing-value summary and column overview
    Profile {
        /// Path to the CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output the profile as JSON instead of text
        ///
        /// Disables all logs so stdout can be piped: `... --json | jq .summary`
        #[arg(long)]
        json: bool,

        /// Also write <input_name>_report.json to this directory
        #[arg(short = 'r', long)]
        report_dir: Option<PathBuf>,
    },

    /// Count, mean, median and standard deviation of a column
    Stats {
        #[arg(short, long)]
        input: PathBuf,

        /// Column to summarize
        #[arg(short, long)]
        column: String,
    },

    /// Flag (or trim) IQR outliers in a column
    Outliers {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        column: String,

        /// Remove flagged rows and write the result to --output
        #[arg(long, requires = "output")]
        trim: bool,

        /// Destination CSV for --trim
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// IQR multiplier for the fences
        #[arg(long, default_value = "1.5")]
        multiplier: f64,
    },

    /// Replace missing values in a column with its mean or median
    Fill {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        column: String,

        #[arg(long, value_enum, default_value = "mean")]
        strategy: CliFillStrategy,

        /// Destination CSV
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Draw a text histogram of a column
    Hist {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        column: String,

        /// Number of equal-width bins
        #[arg(long, default_value = "10")]
        bins: usize,

        /// Plot title
        #[arg(long)]
        title: Option<String>,
    },

    /// Draw a text box plot of a column
    Boxplot {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        column: String,

        #[arg(long)]
        title: Option<String>,
    },
}

impl Command {
    fn json_output(&self) -> bool {
        matches!(self, Command::Profile { json: true, .. })
    }
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.command.json_output());

    let load_options = LoadOptions::builder()
        .extra_missing_tokens(args.na_values.iter().cloned())
        .build()?;

    match args.command {
        Command::Profile {
            input,
            json,
            report_dir,
        } => {
            let data = load(&input, &load_options)?;
            run_profile(&input, &data, json, report_dir.as_deref())
        }
        Command::Stats { input, column } => {
            let data = load(&input, &load_options)?;
            let summary = summarize_column(&data, &column)?;

            println!("Column: {}", column);
            println!("  count:  {}", summary.count);
            println!("  mean:   {:.4}", summary.mean);
            println!("  median: {:.4}", summary.median);
            println!("  std:    {:.4}", summary.std);
            Ok(())
        }
        Command::Outliers {
            input,
            column,
            trim,
            output,
            multiplier,
        } => {
            let data = load(&input, &load_options)?;
            let config = OutlierConfig::new(multiplier)?;
            run_outliers(&data, &column, &config, trim, output.as_deref())
        }
        Command::Fill {
            input,
            column,
            strategy,
            output,
        } => {
            let data = load(&input, &load_options)?;
            let filled = fill_missing(&data, &column, strategy.into())?;
            export_csv(&filled, &output, &WriteOptions::default())?;
            println!("Filled '{}' ({:?}) -> {}", column, strategy, output.display());
            Ok(())
        }
        Command::Hist {
            input,
            column,
            bins,
            title,
        } => {
            let data = load(&input, &load_options)?;
            let mut options = PlotOptions::default().bins(bins);
            if let Some(title) = title {
                options = options.title(title);
            }
            show_histogram(&data, &column, &options, &mut io::stdout().lock())?;
            Ok(())
        }
        Command::Boxplot {
            input,
            column,
            title,
        } => {
            let data = load(&input, &load_options)?;
            let mut options = PlotOptions::default();
            if let Some(title) = title {
                options = options.title(title);
            }
            plot_box(&data, &column, &options, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn load(input: &Path, options: &LoadOptions) -> Result<DataFrame> {
    info!("Loading dataset from: {}", input.display());
    let data = load_csv(input, options)
        .with_context(|| format!("Could not load {}", input.display()))?;
    info!("Dataset loaded successfully: {:?}", data.shape());
    Ok(data)
}

/// Print the profile summary, or the full report as JSON.
///
/// Uses `println!` intentionally: this is the command's output, not logging.
fn run_profile(
    input: &Path,
    data: &DataFrame,
    json: bool,
    report_dir: Option<&Path>,
) -> Result<()> {
    let report = ReportGenerator::build_report(data, Some(input))?;

    if let Some(dir) = report_dir {
        let path = ReportGenerator::new(dir)
            .write_report_to_file(&report, &extract_file_stem(input))?;
        info!("Report written to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary);
    }
    Ok(())
}

fn run_outliers(
    data: &DataFrame,
    column: &str,
    config: &OutlierConfig,
    trim: bool,
    output: Option<&Path>,
) -> Result<()> {
    let bounds = iqr_bounds_with(data, column, config)?;
    let mask = flag_outliers_with(data, column, config)?;

    println!("Column: {}", column);
    println!(
        "  Q1 {:.4}, Q3 {:.4}, IQR {:.4}, fences [{:.4}, {:.4}]",
        bounds.q1, bounds.q3, bounds.iqr, bounds.lower, bounds.upper
    );
    println!("  {} of {} rows flagged", mask.flagged_count(), mask.len());

    let rows = mask.flagged_rows();
    if !rows.is_empty() {
        let shown: Vec<String> = rows.iter().take(20).map(|r| r.to_string()).collect();
        let more = if rows.len() > 20 { ", ..." } else { "" };
        println!("  rows: {}{}", shown.join(", "), more);
    }

    if trim && let Some(output) = output {
        let trimmed = trim_outliers_with(data, column, config)?;
        export_csv(&trimmed, output, &WriteOptions::default())?;
        println!(
            "Trimmed {} -> {} rows -> {}",
            data.height(),
            trimmed.height(),
            output.display()
        );
    }
    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
