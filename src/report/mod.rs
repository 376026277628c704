//! Report assembly: the multi-day overview and the per-day summary.
//!
//! Formatting lives in one place so output changes stay localized (the golden
//! tests below pin the exact templates). Both generators are pure functions
//! of the dataset: no I/O, no hidden state, same input means same string.

use crate::date;
use crate::domain::DailyRecord;
use crate::error::WxError;
use crate::stats;
use crate::units;

/// Render the "N Day Overview" report.
///
/// Extremes are taken per column (lows and highs independently) with the
/// last-occurrence tie-break, so when two days share the extreme the most
/// recent one is the day cited. Fails with [`WxError::EmptyInput`] on an
/// empty dataset: an overview of zero days has no content.
pub fn generate_summary(dataset: &[DailyRecord]) -> Result<String, WxError> {
    let num_days = dataset.len();

    let min_column: Vec<f64> = dataset.iter().map(|r| r.min_temp).collect();
    let max_column: Vec<f64> = dataset.iter().map(|r| r.max_temp).collect();

    let min = stats::find_min(&min_column).ok_or(WxError::EmptyInput)?;
    let max = stats::find_max(&max_column).ok_or(WxError::EmptyInput)?;

    let min_celsius = units::format_celsius(units::fahrenheit_to_celsius(min.value));
    let max_celsius = units::format_celsius(units::fahrenheit_to_celsius(max.value));
    let min_date = date::to_readable(&dataset[min.position].date)?;
    let max_date = date::to_readable(&dataset[max.position].date)?;

    let average_low = units::format_celsius(units::fahrenheit_to_celsius(stats::mean(&min_column)?));
    let average_high = units::format_celsius(units::fahrenheit_to_celsius(stats::mean(&max_column)?));

    let mut out = String::new();
    out.push_str(&format!("{num_days} Day Overview\n"));
    out.push_str(&format!(
        "  The lowest temperature will be {min_celsius}, and will occur on {min_date}.\n"
    ));
    out.push_str(&format!(
        "  The highest temperature will be {max_celsius}, and will occur on {max_date}.\n"
    ));
    out.push_str(&format!("  The average low this week is {average_low}.\n"));
    out.push_str(&format!("  The average high this week is {average_high}.\n"));

    Ok(out)
}

/// Render one block per record, in dataset order.
///
/// A blank line follows every block. An empty dataset yields the empty
/// string (nothing to report is not an error here).
pub fn generate_daily_summary(dataset: &[DailyRecord]) -> Result<String, WxError> {
    let mut out = String::new();
    for record in dataset {
        let readable = date::to_readable(&record.date)?;
        let min_celsius = units::format_celsius(units::fahrenheit_to_celsius(record.min_temp));
        let max_celsius = units::format_celsius(units::fahrenheit_to_celsius(record.max_temp));

        out.push_str(&format!("---- {readable} ----\n"));
        out.push_str(&format!("  Minimum Temperature: {min_celsius}\n"));
        out.push_str(&format!("  Maximum Temperature: {max_celsius}\n"));
        out.push('\n');
    }
    Ok(out)
}
