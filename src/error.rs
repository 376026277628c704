//! Error taxonomy for the reporting pipeline.
//!
//! Every failure class maps to a stable process exit code so that scripted
//! callers can distinguish "bad input" from "no data" without parsing stderr.

use std::path::PathBuf;

use thiserror::Error;

/// All errors the pipeline can surface to a caller.
///
/// The core never recovers from any of these: the first error aborts the
/// current report and propagates unchanged. There is no partial report.
#[derive(Debug, Error)]
pub enum WxError {
    /// A value that should have been numeric could not be coerced.
    #[error("invalid numeric value '{value}'")]
    InvalidInput { value: String },

    /// A mean (or an overview report) was requested over zero records.
    #[error("cannot summarize an empty dataset")]
    EmptyInput,

    /// A date string could not be parsed as ISO-8601.
    #[error("malformed date '{input}' (expected ISO-8601, e.g. 2021-07-06 or 2021-07-06T07:00:00+08:00)")]
    MalformedDate { input: String },

    /// The input file could not be opened or read.
    #[error("failed to read '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row had the wrong shape or a non-numeric temperature.
    #[error("malformed row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },
}

impl WxError {
    /// Process exit code for this failure class.
    ///
    /// 2 = unusable input, 3 = structurally valid input with no data.
    pub fn exit_code(&self) -> u8 {
        match self {
            WxError::InvalidInput { .. }
            | WxError::MalformedDate { .. }
            | WxError::SourceUnreadable { .. }
            | WxError::MalformedRow { .. } => 2,
            WxError::EmptyInput => 3,
        }
    }
}
