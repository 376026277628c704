//! CSV ingest and normalization.
//!
//! Turns the tabular source into an in-memory [`Dataset`] the reports can
//! work with. Design goals:
//!
//! - **Strict schema**: a header row, then `(date, min, max)` rows
//! - **Row-level errors** name the 1-based source line
//! - **Order preservation**: load order is the dataset order
//! - **Separation of concerns**: no statistics or formatting here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{DailyRecord, Dataset};
use crate::error::WxError;
use crate::units;

/// Load a dataset from a CSV file on disk.
pub fn read_dataset(path: &Path) -> Result<Dataset, WxError> {
    let file = File::open(path).map_err(|source| WxError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(file)
}

/// Parse a dataset from any reader of CSV text.
///
/// The first row is a header and is skipped. Rows whose fields are all empty
/// are skipped. Every other row must be exactly `(date, min, max)` with
/// numeric temperatures.
pub fn parse_dataset<R: Read>(source: R) -> Result<Dataset, WxError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header, and CSV lines are 1-based.
        let line = idx + 2;

        let record = result.map_err(|e| WxError::MalformedRow {
            line,
            message: format!("CSV parse error: {e}"),
        })?;

        if is_empty_row(&record) {
            continue;
        }

        records.push(parse_row(&record, line)?);
    }

    Ok(records)
}

fn is_empty_row(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn parse_row(record: &StringRecord, line: usize) -> Result<DailyRecord, WxError> {
    if record.len() != 3 {
        return Err(WxError::MalformedRow {
            line,
            message: format!("expected 3 fields (date, min, max), found {}", record.len()),
        });
    }

    let date = record.get(0).unwrap_or_default();
    if date.is_empty() {
        return Err(WxError::MalformedRow {
            line,
            message: "missing `date` field".to_string(),
        });
    }

    let min_temp = parse_temp_field(record.get(1).unwrap_or_default(), "min", line)?;
    let max_temp = parse_temp_field(record.get(2).unwrap_or_default(), "max", line)?;

    Ok(DailyRecord::new(date, min_temp, max_temp))
}

fn parse_temp_field(raw: &str, name: &str, line: usize) -> Result<f64, WxError> {
    units::parse_temperature(raw).map_err(|_| WxError::MalformedRow {
        line,
        message: format!("non-numeric `{name}` temperature '{raw}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_loads_in_order() {
        let csv = "date,min,max\n\
                   2021-07-02T07:00:00+08:00,49,67\n\
                   2021-07-03T07:00:00+08:00,57,68\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].date, "2021-07-02T07:00:00+08:00");
        assert_eq!(dataset[0].min_temp, 49.0);
        assert_eq!(dataset[1].max_temp, 68.0);
    }

    #[test]
    fn skips_empty_rows() {
        let csv = "date,min,max\n\
                   2021-07-02,49,67\n\
                   ,,\n\
                   2021-07-03,57,68\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[1].date, "2021-07-03");
    }

    #[test]
    fn header_only_source_yields_empty_dataset() {
        let dataset = parse_dataset("date,min,max\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn wrong_arity_names_the_line() {
        let csv = "date,min,max\n\
                   2021-07-02,49,67\n\
                   2021-07-03,57\n";
        let err = parse_dataset(csv.as_bytes()).unwrap_err();
        match err {
            WxError::MalformedRow { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_temperature_names_line_and_field() {
        let csv = "date,min,max\n\
                   2021-07-02,chilly,67\n";
        let err = parse_dataset(csv.as_bytes()).unwrap_err();
        match err {
            WxError::MalformedRow { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("`min`"));
                assert!(message.contains("chilly"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_dates_are_kept() {
        let csv = "date,min,max\n\
                   2021-07-02,49,67\n\
                   2021-07-02,49,67\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0], dataset[1]);
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let err = read_dataset(Path::new("/nonexistent/wx.csv")).unwrap_err();
        assert!(matches!(err, WxError::SourceUnreadable { .. }));
    }
}
