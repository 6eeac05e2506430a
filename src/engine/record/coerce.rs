use std::borrow::Cow;

use serde_json::Value;

/// Reads a raw value as a float, if it looks like one.
///
/// Strings are trimmed first and accept anything `f64::from_str` does
/// (`"1e3"`, `"inf"`, `"nan"`), plus `_` separators between digits
/// (`"1_000"`). Everything that is not a number or a string yields `None`.
#[inline]
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => strip_digit_separators(s.trim())?.parse::<f64>().ok(),
        _ => None,
    }
}

/// Removes `_` separators. Each one must sit between two ASCII digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    well_placed.then(|| Cow::Owned(text.replace('_', "")))
}

/// Coerces to a float, falling back to `0.0`.
#[inline]
pub fn coerce_f64(value: Option<&Value>) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

/// Coerces to an integer by way of a float, truncating toward zero.
///
/// `"4.0"` and `4.7` both yield `4`. Non-finite values fall back to `0`.
#[inline]
pub fn coerce_i64(value: Option<&Value>) -> i64 {
    if let Some(Value::Number(n)) = value {
        if let Some(i) = n.as_i64() {
            return i;
        }
    }
    parse_number(value)
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
        .unwrap_or(0)
}

/// Reads a categorical value as trimmed text.
///
/// `Null` counts as absent. Numbers and booleans are rendered to their
/// display form so they can still take part in grouping.
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
