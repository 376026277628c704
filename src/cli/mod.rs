//! Command-line parsing for the weather report generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the aggregation/formatting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "wxr", version, about = "Daily weather summary reports (Fahrenheit CSV in, Celsius out)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the multi-day "N Day Overview" report.
    Summary(ReportArgs),
    /// Print a per-day report, one block per record.
    Daily(ReportArgs),
}

/// Common options for both reports.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// CSV file with a header row followed by `date,min,max` rows
    /// (ISO-8601 dates, temperatures in Fahrenheit).
    #[arg(value_name = "FILE")]
    pub csv: PathBuf,
}
