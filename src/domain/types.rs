//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be used in-memory during report generation and exported or reloaded later
//! without conversion.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One day of weather observations, as loaded from the source.
///
/// The date is kept as the raw ISO-8601 string from the source; it is only
/// parsed when a report renders it. Temperatures are Fahrenheit; conversion
/// to Celsius happens at formatting time, never in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// ISO-8601 date or date-time, e.g. `2021-07-06T07:00:00+08:00`.
    pub date: String,
    /// Daily minimum, degrees Fahrenheit.
    pub min_temp: f64,
    /// Daily maximum, degrees Fahrenheit.
    pub max_temp: f64,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, min_temp: f64, max_temp: f64) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }
}

/// The full set of records for one run, in source order.
///
/// Order is semantically meaningful: it defines the "position" used by the
/// tie-break rule, so the dataset is never sorted or deduplicated. Duplicate
/// dates are legal and simply appear twice.
pub type Dataset = Vec<DailyRecord>;

/// Which report to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// The "N Day Overview" with extremes and averages.
    Overview,
    /// One block per day, in dataset order.
    Daily,
}

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path to the CSV source.
    pub csv_path: PathBuf,
    /// Which report to render.
    pub kind: ReportKind,
}
