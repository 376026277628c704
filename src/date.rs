//! ISO-8601 date parsing and the human-readable rendering used in reports.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::WxError;

/// Render an ISO-8601 date (or date-time) as `Weekday DD Month YYYY`,
/// e.g. `Tuesday 06 July 2021`.
///
/// A time-of-day and UTC offset are accepted and parsed but do not affect the
/// output: the rendered date is the wall-clock date as written in the input,
/// not a UTC-normalized one.
pub fn to_readable(iso: &str) -> Result<String, WxError> {
    let date = parse_iso_date(iso)?;
    Ok(date.format("%A %d %B %Y").to_string())
}

/// Accept the three ISO shapes the input data uses, most specific first.
fn parse_iso_date(iso: &str) -> Result<NaiveDate, WxError> {
    let s = iso.trim();

    // Full RFC 3339 date-time with offset. `naive_local` keeps the date in
    // the offset the string was written in.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }

    Err(WxError::MalformedDate {
        input: iso.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_offset_datetime_as_wall_clock_date() {
        assert_eq!(
            to_readable("2021-07-02T07:00:00+08:00").unwrap(),
            "Friday 02 July 2021"
        );
    }

    #[test]
    fn renders_date_only() {
        assert_eq!(to_readable("2021-07-06").unwrap(), "Tuesday 06 July 2021");
    }

    #[test]
    fn renders_naive_datetime() {
        assert_eq!(
            to_readable("2020-06-21T07:00:00").unwrap(),
            "Sunday 21 June 2020"
        );
    }

    #[test]
    fn day_is_zero_padded() {
        assert_eq!(to_readable("2021-07-04").unwrap(), "Sunday 04 July 2021");
    }

    #[test]
    fn rejects_non_dates() {
        let err = to_readable("next tuesday").unwrap_err();
        assert!(matches!(err, WxError::MalformedDate { .. }));
    }

    #[test]
    fn rejects_out_of_range_dates() {
        assert!(to_readable("2021-13-40").is_err());
    }
}
