//! Lenient field parsers for request bodies.
//!
//! The promoter application is loose with JSON types: codes arrive as numbers or
//! numeric strings, flags as booleans or `0`/`1`, and empty strings stand in for absent
//! values. These deserializers accept those shapes and reject anything else with a
//! message naming the offending value.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Reads an optional field as raw JSON, folding `null` and blank strings into `None`.
fn optional_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => Some(value),
    })
}

/// Parses an integer code from a JSON number or numeric string.
///
/// # Returns
/// - `Ok(Some(i32))` - Value present and within `i32` range
/// - `Ok(None)` - Field absent, `null` or blank
/// - `Err` - Not an integer or out of range
pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_value(deserializer)? {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer code, got {}", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid integer code '{}': {}", s, e))),
        Some(other) => Err(D::Error::custom(format!(
            "expected an integer code, got {}",
            other
        ))),
    }
}

/// Parses a text field, accepting numbers and booleans as their literal text.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_value(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, got {}", other))),
    }
}

/// Parses a flag from a boolean, `0`/`1`, or `"true"`/`"false"`/`"0"`/`"1"`.
pub fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_value(deserializer)? {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(D::Error::custom(format!("expected a flag, got {}", n))),
        },
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("expected a flag, got '{}'", s))),
        },
        Some(other) => Err(D::Error::custom(format!("expected a flag, got {}", other))),
    }
}

/// Parses a flag whose presence matters even when it is `null`.
///
/// Only called for keys present in the body, so with `#[serde(default)]` an absent key
/// stays `None` while `null` or a blank string becomes `Some(None)`.
pub fn present_bool<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_bool(deserializer).map(Some)
}

/// Parses a monetary amount without going through `f64`.
///
/// JSON numbers are read from their textual form so `19.9` stays exactly `19.9`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match optional_value(deserializer)? {
        None => return Ok(None),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().replace(',', "."),
        Some(other) => {
            return Err(D::Error::custom(format!("expected an amount, got {}", other)));
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid amount '{}': {}", text, e)))
}

/// Parses a timestamp in RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` taken as UTC.
pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match optional_value(deserializer)? {
        None => return Ok(None),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(D::Error::custom(format!("expected a timestamp, got {}", other)));
        }
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text.trim()) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", text, e)))
}
