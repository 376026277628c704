//! Column statistics: mean and extremes-with-position.
//!
//! The extreme scans carry a deliberate policy: when several elements tie for
//! the extreme value, the LAST occurrence wins. The reports must cite the most
//! recent day among tied days, so the scans use `<=`/`>=` rather than a
//! library `min`/`max` (which would keep the first match).

use crate::error::WxError;
use crate::units;

/// An extreme value together with the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub value: f64,
    /// Index of the LAST element equal to `value`.
    pub position: usize,
}

/// Arithmetic mean of a sequence.
///
/// An empty sequence is an error here (there is no meaningful mean), unlike
/// the extreme scans where "no data" is a valid empty outcome.
pub fn mean(values: &[f64]) -> Result<f64, WxError> {
    if values.is_empty() {
        return Err(WxError::EmptyInput);
    }
    let total: f64 = values.iter().sum();
    Ok(total / values.len() as f64)
}

/// Smallest value and the index of its last occurrence.
///
/// Returns `None` for an empty sequence.
pub fn find_min(values: &[f64]) -> Option<Extreme> {
    let mut best: Option<Extreme> = None;
    for (position, &value) in values.iter().enumerate() {
        match best {
            // `<=` so a later tie overwrites an earlier one.
            Some(current) if value <= current.value => {
                best = Some(Extreme { value, position });
            }
            None => best = Some(Extreme { value, position }),
            Some(_) => {}
        }
    }
    best
}

/// Largest value and the index of its last occurrence.
///
/// Returns `None` for an empty sequence.
pub fn find_max(values: &[f64]) -> Option<Extreme> {
    let mut best: Option<Extreme> = None;
    for (position, &value) in values.iter().enumerate() {
        match best {
            Some(current) if value >= current.value => {
                best = Some(Extreme { value, position });
            }
            None => best = Some(Extreme { value, position }),
            Some(_) => {}
        }
    }
    best
}

/// Coerce a sequence of numeric-looking strings for the scans above.
///
/// Sources sometimes deliver temperatures as text; this converts a whole
/// column up front so the statistics only ever see `f64` and callers get the
/// uniform `InvalidInput` error naming the offending element.
pub fn coerce_values<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, WxError> {
    raw.iter().map(|s| units::parse_value(s.as_ref())).collect()
}
