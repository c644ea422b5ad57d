//! CLI argument parsing for gradelite
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{CatalogArgs, GpaArgs, SelectionArgs, SubjectsArgs};
pub use gradelite_core::format::OutputFormat;
use parse::parse_output_format;

/// Gradelite - credit-weighted GPA calculator
#[derive(Parser, Debug)]
#[command(name = "gradelite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, gradelite=trace)
    #[arg(long, global = true, env = "GRADELITE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the subject rows for a program year, semester and branch
    Subjects(SubjectsArgs),

    /// Compute the credit-weighted GPA for a selection
    Gpa(GpaArgs),

    /// List every program year, semester and branch in the catalog
    Catalog(CatalogArgs),
}
