//! Loose numeric coercion for request values.
//!
//! Strings are read by their leading numeric prefix (`"12abc"` is 12,
//! `" 4.5kg"` is 4.5), booleans count as 1/0, and anything else that is not a
//! number becomes 0. Nothing here ever fails.

use serde_json::Value;

/// Longest prefix of `s` (after leading whitespace) that reads as a decimal
/// number: optional sign, digits with an optional fraction, optional exponent.
fn numeric_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

pub fn str_to_f64(s: &str) -> f64 {
    numeric_prefix(s)
        .and_then(|p| p.parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn str_to_i64(s: &str) -> i64 {
    let Some(prefix) = numeric_prefix(s) else {
        return 0;
    };
    if prefix.bytes().all(|b| b.is_ascii_digit() || b == b'+' || b == b'-') {
        return match prefix.parse::<i64>() {
            Ok(n) => n,
            Err(_) if prefix.starts_with('-') => i64::MIN,
            Err(_) => i64::MAX,
        };
    }
    float_to_i64(prefix.parse::<f64>().unwrap_or(0.0))
}

fn float_to_i64(f: f64) -> i64 {
    if f.is_finite() {
        // `as` truncates toward zero and saturates.
        f as i64
    } else {
        0
    }
}

pub fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => str_to_f64(s),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .unwrap_or_else(|| float_to_i64(n.as_f64().unwrap_or(0.0))),
        Value::String(s) => str_to_i64(s),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}
