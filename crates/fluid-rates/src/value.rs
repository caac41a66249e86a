//! Safe navigation over loosely-typed upstream documents.
//!
//! The Fluid API schema is not contractually stable: fields may be missing,
//! `null`, numeric, or string-encoded. Every helper here returns an optional
//! or a default instead of failing.

use serde_json::Value;

/// Walks `path` through nested objects. `null` leaves count as absent.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// First candidate that is present, in order.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    candidates.into_iter().flatten().next()
}

pub const fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

/// Truthiness of a loosely-typed field: absent, `false`, `0`, `NaN` and `""`
/// are falsy. Note that the string `"0"` is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Strict numeric coercion: the whole (trimmed) value must be numeric.
///
/// Empty strings and `null` coerce to `0`, booleans to `0`/`1`. Anything that
/// does not read as a number yields `NaN`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn coerce_str(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.starts_with(['+', '-']) {
            return f64::NAN;
        }
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
    }
    match scan_decimal(s) {
        Some((n, consumed)) if consumed == s.len() => n,
        _ => f64::NAN,
    }
}

/// Lenient numeric parse: reads the longest numeric prefix and ignores the
/// rest (`"4.5%"` reads as `4.5`). Returns `None` when no prefix is numeric.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    scan_decimal(raw.trim_start()).map(|(n, _)| n)
}

// Returns the parsed value and the number of bytes consumed.
fn scan_decimal(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    if s[sign_len..].starts_with("Infinity") {
        let inf = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some((inf, sign_len + "Infinity".len()));
    }

    let count_digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = sign_len;
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().map(|n| (n, end))
}

/// String rendering of a scalar identity/name field. Non-scalars are `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
