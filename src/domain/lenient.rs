//! Tolerant field decoders for live tournament feeds.
//!
//! Feeds routinely send numbers as strings, nulls where text is expected and
//! occasionally garbage. Anything that cannot be read as a sane value decodes
//! to `None` instead of failing the whole snapshot.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_int))
}

/// Seeds are 1-based; zero and negative values are treated as absent.
pub fn seed<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = int(deserializer)?;
    Ok(value.filter(|s| *s >= 1).and_then(|s| u32::try_from(s).ok()))
}

pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_float))
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_flag(deserializer)?.unwrap_or(false))
}

pub fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_flag))
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Blank strings decode to `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_timestamp))
}

fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_float)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn integral_float(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

fn value_to_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn value_to_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 format (with timezone)
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Naive timestamps are taken as UTC
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "int")]
        int: Option<i64>,
        #[serde(default, deserialize_with = "seed")]
        seed: Option<u32>,
        #[serde(default, deserialize_with = "float")]
        float: Option<f64>,
        #[serde(default, deserialize_with = "flag")]
        flag: bool,
        #[serde(default, deserialize_with = "optional_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "timestamp")]
        when: Option<DateTime<Utc>>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let p = probe(r#"{"int": "12", "seed": "3", "float": "1.5"}"#);
        assert_eq!(p.int, Some(12));
        assert_eq!(p.seed, Some(3));
        assert_eq!(p.float, Some(1.5));
    }

    #[test]
    fn test_malformed_numbers_become_absent() {
        let p = probe(r#"{"int": "abc", "seed": -4, "float": "NaN"}"#);
        assert_eq!(p.int, None);
        assert_eq!(p.seed, None);
        assert_eq!(p.float, None);

        let p = probe(r#"{"int": 2.5, "seed": 0, "float": {"x": 1}}"#);
        assert_eq!(p.int, None);
        assert_eq!(p.seed, None);
        assert_eq!(p.float, None);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let p = probe(r#"{"int": null, "flag": null, "text": "  "}"#);
        assert_eq!(p.int, None);
        assert!(!p.flag);
        assert_eq!(p.text, None);
        assert_eq!(p.when, None);
    }

    #[test]
    fn test_flag_variants() {
        assert!(probe(r#"{"flag": "true"}"#).flag);
        assert!(probe(r#"{"flag": 1}"#).flag);
        assert!(!probe(r#"{"flag": "maybe"}"#).flag);
    }

    #[test]
    fn test_timestamp_formats() {
        let rfc = probe(r#"{"when": "2024-05-01T10:00:00+02:00"}"#).when.unwrap();
        let naive = probe(r#"{"when": "2024-05-01T08:00:00"}"#).when.unwrap();
        assert_eq!(rfc, naive);
        assert_eq!(probe(r#"{"when": "yesterday"}"#).when, None);
    }
}
