//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded observation records (`DailyRecord`, `Dataset`)
//! - run configuration (`ReportConfig`, `ReportKind`)

pub mod types;

pub use types::*;
