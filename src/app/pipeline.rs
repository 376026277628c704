//! Shared "report pipeline" logic used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV load -> dataset -> statistics/conversion -> report string
//!
//! The CLI can then focus on argument handling and printing.

use crate::domain::{Dataset, ReportConfig, ReportKind};
use crate::error::WxError;
use crate::io::loader;
use crate::report;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub report: String,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, WxError> {
    let dataset = loader::read_dataset(&config.csv_path)?;
    run_report_with_dataset(config, dataset)
}

/// Execute the pipeline with an already-loaded dataset.
///
/// Useful for callers that build records in memory (and for tests that skip
/// the filesystem).
pub fn run_report_with_dataset(
    config: &ReportConfig,
    dataset: Dataset,
) -> Result<RunOutput, WxError> {
    let report = match config.kind {
        ReportKind::Overview => report::generate_summary(&dataset)?,
        ReportKind::Daily => report::generate_daily_summary(&dataset)?,
    };

    Ok(RunOutput { dataset, report })
}
