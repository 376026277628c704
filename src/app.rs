//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the dataset
//! - renders the requested report
//! - prints it

use clap::Parser;

use crate::cli::{Command, ReportArgs};
use crate::domain::{ReportConfig, ReportKind};
use crate::error::WxError;

pub mod pipeline;

/// Entry point for the `wxr` binary.
pub fn run() -> Result<(), WxError> {
    // We want `wxr forecast.csv` to behave like `wxr summary forecast.csv`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = match cli.command {
        Command::Summary(args) => report_config_from_args(&args, ReportKind::Overview),
        Command::Daily(args) => report_config_from_args(&args, ReportKind::Daily),
    };

    let run = pipeline::run_report(&config)?;
    print!("{}", run.report);
    Ok(())
}

pub fn report_config_from_args(args: &ReportArgs, kind: ReportKind) -> ReportConfig {
    ReportConfig {
        csv_path: args.csv.clone(),
        kind,
    }
}

/// Rewrite argv so a bare file argument defaults to the `summary` report.
///
/// Rules:
/// - `wxr forecast.csv`        -> `wxr summary forecast.csv`
/// - `wxr --help/--version/-h` -> unchanged (show top-level help/version)
/// - `wxr summary/daily ...`   -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "summary" | "daily");
    if is_subcommand {
        return argv;
    }

    // First token is a path (or a flag meant for `summary`): route it there.
    argv.insert(1, "summary".to_string());
    argv
}
