//! Lenient book-id parsing.
//!
//! Fixtures and clients send book ids either as JSON numbers or as numeric
//! strings. Both are normalised to `i64`; output is always a number.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Parse a book id from its textual form (path segments, string fields).
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    raw.parse::<f64>().ok().and_then(whole_number)
}

/// Interpret an arbitrary JSON value as a book id.
pub fn id_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        serde_json::Value::String(s) => parse_id(s),
        _ => None,
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn resolve<E: Error>(raw: RawId) -> Result<i64, E> {
    match raw {
        RawId::Int(n) => Ok(n),
        RawId::Float(f) => whole_number(f).ok_or_else(|| E::custom(format!("invalid book id: {}", f))),
        RawId::Text(s) => parse_id(&s).ok_or_else(|| E::custom(format!("invalid book id: {:?}", s))),
    }
}

/// `deserialize_with` helper for a required book id.
pub fn book_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    resolve(RawId::deserialize(deserializer)?)
}

/// `deserialize_with` helper for an optional book id. `null`, `""` and `0` mean no book.
pub fn optional_book_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Int(0)) => Ok(None),
        Some(RawId::Float(f)) if f == 0.0 => Ok(None),
        Some(raw) => resolve(raw).map(Some),
    }
}
