//! Parenthetical / comma-colon payload parsing.
//!
//! Info annotations are comma-separated lists of `key: value` pairs
//! and bare keywords, e.g. `(type: Headphones, priority: 9900, not
//! available)`. The availability keywords fold into a single
//! `available` field; other values are numerically coerced when the
//! whole text parses as a number. Segment order is insignificant and
//! later duplicates overwrite earlier ones.

use serde_json::{Map, Value};

/// Splits a comma-separated payload into `(key, value)` segments.
/// Bare-keyword segments carry no value. All parts are trimmed.
pub(crate) fn info_segments(input: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    input.split(',').map(|segment| {
        let segment = segment.trim();
        match segment.split_once(':') {
            Some((key, value)) => (key.trim(), Some(value.trim())),
            None => (segment, None),
        }
    })
}

/// Parses an info payload into a mapping.
pub(crate) fn parse_info(input: &str) -> Map<String, Value> {
    let mut info = Map::new();
    for (key, value) in info_segments(input) {
        match key {
            "available" => {
                info.insert("available".to_string(), Value::String("yes".to_string()));
            }
            "availability unknown" => {
                info.insert(
                    "available".to_string(),
                    Value::String("unknown".to_string()),
                );
            }
            "not available" => {
                info.insert("available".to_string(), Value::String("no".to_string()));
            }
            "latency offset" => {
                // Keep only the leading numeric token; the unit suffix
                // (`usec`) is dropped and the number stays a string.
                if let Some(value) = value {
                    let token = value.split(' ').next().unwrap_or_default();
                    info.insert(key.to_string(), Value::String(token.to_string()));
                }
            }
            _ => {
                if let Some(value) = value {
                    info.insert(key.to_string(), coerce_scalar(value));
                }
            }
        }
    }
    info
}

/// Coerces `text` to a JSON number when the *whole* string parses as
/// one; otherwise keeps it as a string. A prefix match would silently
/// truncate values like `24bit`, so only complete parses count.
pub(crate) fn coerce_scalar(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = text.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(text.to_string())
}
