//! Quick text plots for exploratory analysis.
//!
//! Histograms and box plots of a column's numeric coercion, drawn with
//! plain characters to any [`Write`] sink (usually stdout).

use crate::coercion::coerce_column;
use crate::config::{DEFAULT_IQR_MULTIPLIER, PlotOptions};
use crate::error::{EdaError, Result};
use crate::outliers::IqrBounds;
use crate::stats::median;
use polars::prelude::*;
use serde::Serialize;
use std::io::Write;

// ============================================================================
// Histogram
// ============================================================================

/// Equal-width bin counts of a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: String,
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// Rows left out because they are missing after coercion.
    pub missing: usize,
    /// Rows left out because they coerce to an infinite value.
    pub non_finite: usize,
}

/// Bin the non-missing values of `column` into `bins` equal-width bins.
///
/// Bins span `[min, max]`; the last bin includes `max`. A constant column
/// uses `[v - 0.5, v + 0.5]`, and a column without values uses `[0, 1]`.
/// Infinite values cannot be placed in a finite bin and are counted in
/// `non_finite` instead.
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(EdaError::InvalidConfig(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let numeric = coerce_column(df, column)?;
    let values: Vec<f64> = numeric.present().filter(|v| v.is_finite()).collect();
    let non_finite = numeric.count() - values.len();

    let (lo, hi) = match (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) {
        (Some(lo), Some(hi)) if lo < hi => (lo, hi),
        (Some(v), Some(_)) => (v - 0.5, v + 0.5),
        _ => (0.0, 1.0),
    };

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for v in &values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram {
        column: column.to_string(),
        edges,
        counts,
        missing: numeric.len() - numeric.count(),
        non_finite,
    })
}

/// Draw a histogram of `column` to `out`.
pub fn show_histogram<W: Write>(
    df: &DataFrame,
    column: &str,
    options: &PlotOptions,
    out: &mut W,
) -> Result<()> {
    options.validate()?;
    let hist = histogram(df, column, options.bins)?;

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("Histogram of {}", column));
    writeln!(out, "{}", title)?;

    let max_count = hist.counts.iter().copied().max().unwrap_or(0);
    for (i, &count) in hist.counts.iter().enumerate() {
        let bar = scale(count, max_count, options.width);
        let close = if i + 1 == hist.counts.len() { ']' } else { ')' };
        writeln!(
            out,
            "[{:>12.4}, {:>12.4}{} | {:<width$} {}",
            hist.edges[i],
            hist.edges[i + 1],
            close,
            "#".repeat(bar),
            count,
            width = options.width
        )?;
    }

    writeln!(out, "x: {}, y: Count", column)?;
    if hist.missing > 0 {
        writeln!(out, "({} missing values not shown)", hist.missing)?;
    }
    if hist.non_finite > 0 {
        writeln!(out, "({} infinite values not shown)", hist.non_finite)?;
    }
    Ok(())
}

fn scale(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    ((count as f64 / max_count as f64) * width as f64).round() as usize
}

// ============================================================================
// Box plot
// ============================================================================

/// Five-number summary with IQR whiskers, as drawn in a box plot.
///
/// Fields are NaN and `fliers` is empty when the column has no values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotStats {
    pub column: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value at or above `Q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value at or below `Q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub fliers: Vec<f64>,
}

/// Box-plot statistics of the non-missing values of `column`.
pub fn box_plot_stats(df: &DataFrame, column: &str) -> Result<BoxPlotStats> {
    let numeric = coerce_column(df, column)?;
    let sorted = numeric.sorted_present();
    let bounds = IqrBounds::from_sorted(&sorted, DEFAULT_IQR_MULTIPLIER);

    let (inside, fliers): (Vec<f64>, Vec<f64>) =
        sorted.iter().partition(|&&v| !bounds.is_outlier(v));

    Ok(BoxPlotStats {
        column: column.to_string(),
        count: sorted.len(),
        q1: bounds.q1,
        median: median(&sorted),
        q3: bounds.q3,
        lower_whisker: inside.first().copied().unwrap_or(f64::NAN),
        upper_whisker: inside.last().copied().unwrap_or(f64::NAN),
        fliers,
    })
}

/// Draw a horizontal box plot of `column` to `out`.
pub fn plot_box<W: Write>(
    df: &DataFrame,
    column: &str,
    options: &PlotOptions,
    out: &mut W,
) -> Result<()> {
    options.validate()?;
    let stats = box_plot_stats(df, column)?;

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("Box plot of {}", column));
    writeln!(out, "{}", title)?;

    if stats.count == 0 {
        writeln!(out, "(no numeric values in '{}')", column)?;
        return Ok(());
    }

    writeln!(out, "{}", draw_box(&stats, options.width))?;
    writeln!(
        out,
        "whiskers [{:.4}, {:.4}]  Q1 {:.4}  median {:.4}  Q3 {:.4}  outliers {}",
        stats.lower_whisker,
        stats.upper_whisker,
        stats.q1,
        stats.median,
        stats.q3,
        stats.fliers.len()
    )?;
    Ok(())
}

/// Render `|---[==+==]---|  o` scaled to `width` characters.
///
/// Box edges win over every other marker, then the median. A whisker that
/// falls inside the box is not drawn. Infinite fliers are left off the line.
fn draw_box(stats: &BoxPlotStats, width: usize) -> String {
    let finite_fliers: Vec<f64> = stats
        .fliers
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    let extent = [stats.lower_whisker, stats.q1, stats.q3, stats.upper_whisker]
        .into_iter()
        .chain(finite_fliers.iter().copied())
        .filter(|v| v.is_finite());
    let lo = extent.clone().fold(f64::INFINITY, f64::min);
    let hi = extent.fold(f64::NEG_INFINITY, f64::max);

    let last = width - 1;
    let pos = |v: f64| -> usize {
        if hi > lo {
            ((((v - lo) / (hi - lo)) * last as f64).round() as usize).min(last)
        } else {
            0
        }
    };

    let q1 = pos(stats.q1);
    let q3 = pos(stats.q3).max(q1);
    let med = pos(stats.median).clamp(q1, q3);
    let lw = pos(stats.lower_whisker).min(q1);
    let uw = pos(stats.upper_whisker).max(q3);

    let mut line = vec![' '; width];
    for cell in &mut line[lw..q1] {
        *cell = '-';
    }
    for cell in &mut line[q3..=uw] {
        *cell = '-';
    }
    for cell in &mut line[q1..=q3] {
        *cell = '=';
    }
    if lw < q1 {
        line[lw] = '|';
    }
    if uw > q3 {
        line[uw] = '|';
    }
    for &f in &finite_fliers {
        line[pos(f)] = 'o';
    }
    line[med] = '+';
    line[q1] = '[';
    line[q3] = ']';

    line.into_iter().collect::<String>().trim_end().to_string()
}
