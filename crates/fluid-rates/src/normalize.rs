use serde_json::Value;

use crate::value::parse_leading_float;

/// Values at or below this are read as percentages, above it as basis points.
pub const PERCENT_THRESHOLD: f64 = 20.0;

/// Basis points per percent.
pub const BPS_PER_PERCENT: f64 = 100.0;

/// Converts an upstream rate of ambiguous unit into a percentage (`4.0` = 4% APR).
///
/// The upstream API mixes basis points and percentages without tagging the
/// unit. Anything above 20 is read as basis points: real borrow APRs rarely
/// exceed 20%, while the same rates in basis points do. A genuine 25% APR is
/// therefore misread as 0.25%.
///
/// Missing, empty or non-numeric input is `0`, never an error.
pub fn normalize_rate(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(0.0, normalize_rate_f64),
        Some(Value::String(s)) => normalize_rate_str(s),
        _ => 0.0,
    }
}

pub fn normalize_rate_str(raw: &str) -> f64 {
    parse_leading_float(raw).map_or(0.0, normalize_rate_f64)
}

pub fn normalize_rate_f64(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value >= BPS_PER_PERCENT || (value > PERCENT_THRESHOLD && value < BPS_PER_PERCENT) {
        return value / BPS_PER_PERCENT;
    }
    value
}
