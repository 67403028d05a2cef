// Rust guideline compliant 2026-02-06

//! Output formatting module for the Consolidate CLI.
//!
//! This module provides functionality for formatting the merge report
//! in various output formats (JSON, table, plain text).

use consolidate_core::MergeStats;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting the merge report in different
/// output formats.
pub trait OutputFormatter {
    /// Formats a merge report for display.
    ///
    /// # Arguments
    /// * `stats` - Statistics from a completed merge
    ///
    /// # Returns
    /// A formatted string representation of the report
    fn format_stats(&self, stats: &MergeStats) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats the merge report as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_stats(&self, stats: &MergeStats) -> String {
        serde_json::to_string_pretty(stats)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize merge report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats the merge report as a human-readable summary plus a
/// per-source table.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_stats(&self, stats: &MergeStats) -> String {
        let mut output = String::new();

        output.push_str(&format!("Sources:               {}\n", stats.sources));
        output.push_str(&format!("Lines written:         {}\n", stats.lines_written));
        output.push_str(&format!(
            "Duplicates collapsed:  {}\n",
            stats.duplicates_collapsed
        ));
        output.push_str(&format!(
            "Blank lines skipped:   {}\n",
            stats.blank_lines_skipped
        ));

        if !stats.per_source.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(vec!["Source", "Lines read"]);
            for report in &stats.per_source {
                builder.push_record(vec![
                    report.source.as_str(),
                    &report.lines_read.to_string(),
                ]);
            }

            let mut table = builder.build();
            table.with(Style::modern());

            output.push('\n');
            output.push_str(&table.to_string());
        }

        output
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut output = Vec::new();
            let mut stderr = StandardStream::stderr(ColorChoice::Auto);
            let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error: ");
            let _ = stderr.reset();
            let _ = write!(output, "{}", error);
            String::from_utf8_lossy(&output).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats the merge report as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_stats(&self, stats: &MergeStats) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {}\n",
            stats.sources, stats.lines_written, stats.duplicates_collapsed, stats.blank_lines_skipped
        ));
        for report in &stats.per_source {
            output.push_str(&format!("{} {}\n", report.source, report.lines_read));
        }

        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
