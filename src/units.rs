//! Temperature unit conversion and numeric coercion.
//!
//! This is the single place where:
//! - Fahrenheit becomes Celsius (with the one-decimal rounding policy)
//! - loosely-typed numeric text becomes `f64` (with a typed error)
//!
//! Keeping the coercion here gives every caller the same `InvalidInput`
//! error instead of a raw parse failure leaking through.

use crate::error::WxError;

const DEGREE_CELSIUS: &str = "\u{b0}C";

/// Convert a Fahrenheit temperature to Celsius, rounded to one decimal place.
///
/// Rounding is half-away-from-zero (`f64::round` on the scaled value), which
/// matches the reference outputs: `32 -> 0.0`, `100 -> 37.8`, `-52 -> -46.7`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    (celsius * 10.0).round() / 10.0
}

/// Coerce a numeric-looking string to `f64`.
///
/// Accepts anything `f64::from_str` accepts after trimming, but rejects
/// non-finite values (`NaN`, `inf`) since they are never valid temperatures.
pub fn parse_value(raw: &str) -> Result<f64, WxError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| WxError::InvalidInput {
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(WxError::InvalidInput {
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Coerce a temperature field from the input source.
///
/// Same rules as [`parse_value`]; named separately so loader call sites read
/// as what they do.
pub fn parse_temperature(raw: &str) -> Result<f64, WxError> {
    parse_value(raw)
}

/// Render a Celsius value for the reports, e.g. `-46.7°C`.
pub fn format_celsius(celsius: f64) -> String {
    format!("{celsius:.1}{DEGREE_CELSIUS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_is_zero() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
    }

    #[test]
    fn boiling_range_rounds_up() {
        assert_eq!(fahrenheit_to_celsius(100.0), 37.8);
    }

    #[test]
    fn negative_values_round_away_from_zero() {
        assert_eq!(fahrenheit_to_celsius(-52.0), -46.7);
        assert_eq!(fahrenheit_to_celsius(-46.0), -43.3);
    }

    #[test]
    fn parse_value_accepts_integers_and_floats() {
        assert_eq!(parse_value("47").unwrap(), 47.0);
        assert_eq!(parse_value(" -51.5 ").unwrap(), -51.5);
    }

    #[test]
    fn parse_value_rejects_garbage() {
        let err = parse_value("warm").unwrap_err();
        assert!(matches!(err, WxError::InvalidInput { value } if value == "warm"));
    }

    #[test]
    fn parse_value_rejects_non_finite() {
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("inf").is_err());
    }

    #[test]
    fn format_celsius_keeps_one_decimal() {
        assert_eq!(format_celsius(0.0), "0.0\u{b0}C");
        assert_eq!(format_celsius(-46.7), "-46.7\u{b0}C");
        assert_eq!(format_celsius(22.2), "22.2\u{b0}C");
    }
}
