// Rust guideline compliant 2026-02-06

//! Consolidate CLI Application
//!
//! Command-line program for consolidating sorted data from multiple text
//! files into a single sorted, duplicate-free output file.

use clap::Parser;
use consolidate_cli::{
    create_formatter, print_success, print_warning, should_use_color, OutputFormatter,
};
use consolidate_core::{consolidate, open_output, Config, SourceSet};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "csl",
    version,
    about = "Consolidate: merge sorted text files into one sorted, deduplicated file",
    long_about = "Consolidate merges the pre-sorted text files of a directory into a single output file using a streaming k-way merge. Blank lines are dropped, consecutive duplicates are collapsed, and every emitted line is terminated.",
    after_help = "Examples:\n  csl -i ./wordlists -o merged.txt\n  csl -i ./wordlists -o merged.txt --json\n  CONSOLIDATE_TEXT_EXTENSIONS=txt,list csl -i ./data -o merged.txt\n"
)]
struct Cli {
    /// Path to the input directory
    #[arg(short = 'i', long)]
    input_directory: PathBuf,

    /// Path to the output file
    #[arg(short = 'o', long)]
    output_file: PathBuf,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            consolidate_cli::print_error(&err.to_string());
            std::process::exit(1);
        }
    };

    let formatter = create_formatter(resolve_format(&cli, &config), use_color);

    if let Err(err) = run(&cli, &config, formatter.as_ref()) {
        eprintln!("{}", formatter.format_error(&err.to_string()));
        std::process::exit(1);
    }
}

/// Loads configuration from an explicit file or the working directory.
fn load_config(path: Option<&Path>) -> consolidate_core::Result<Config> {
    match path {
        Some(path) => Config::load_file(path),
        None => Config::load(Path::new(".")),
    }
}

/// Resolves the report format from flags, falling back to the config.
fn resolve_format(cli: &Cli, config: &Config) -> &'static str {
    match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                match config.output_format {
                    consolidate_core::OutputFormat::Json => "json",
                    consolidate_core::OutputFormat::Table => "table",
                    consolidate_core::OutputFormat::Plain => "plain",
                }
            }
        }
    }
}

/// Scans the input directory, runs the merge, and reports the result.
fn run(cli: &Cli, config: &Config, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let sources = SourceSet::open_directory(&cli.input_directory, &config.text_extensions)?;
    if sources.is_empty() {
        print_warning(&format!(
            "no input files found in `{}`",
            cli.input_directory.display()
        ));
    }

    let output = open_output(&cli.output_file)?;
    let stats = consolidate(sources.into_inner(), output)?;

    println!("{}", formatter.format_stats(&stats));
    print_success(&format!(
        "Consolidated {} sources into {}",
        stats.sources,
        cli.output_file.display()
    ));

    Ok(())
}
