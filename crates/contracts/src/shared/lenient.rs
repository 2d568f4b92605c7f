//! Serde helpers for server JSON whose fields may arrive as a string or a number
//!
//! Template code renders the same field as `"120"` on one page and `120` on
//! another, and `null` when the value was never entered.

use super::number::{format_plain, parse_number};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => format_plain(n.as_f64().unwrap_or(0.0)),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(parse_number(s)),
        _ => None,
    }
}

/// Строка из строки/числа; `null` → пустая строка
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

/// Как [`string`], но `null` сохраняется как `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(value_to_string(other))),
    }
}

/// Число из строки/числа; всё нераспознанное → 0
pub fn f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_f64(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

/// Число из строки/числа; `null` и пустая строка → `None`
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_f64(&Value::deserialize(deserializer)?))
}

/// Целочисленный ID из числа или строки (`7`, `"7"`, `" 7 "`)
pub fn integer_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| D::Error::custom(format!("invalid id: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| D::Error::custom(format!("invalid id {:?}: {}", s, e))),
        other => Err(D::Error::custom(format!("invalid id: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::string")]
        text: String,
        #[serde(default, deserialize_with = "super::opt_string")]
        maybe_text: Option<String>,
        #[serde(default, deserialize_with = "super::f64")]
        number: f64,
        #[serde(default, deserialize_with = "super::opt_f64")]
        maybe_number: Option<f64>,
    }

    #[test]
    fn test_numbers_and_strings_are_interchangeable() {
        let p: Sample = serde_json::from_str(
            r#"{"text": 120, "maybe_text": "A-1", "number": "1,500", "maybe_number": 2.5}"#,
        )
        .unwrap();
        assert_eq!(p.text, "120");
        assert_eq!(p.maybe_text.as_deref(), Some("A-1"));
        assert_eq!(p.number, 1500.0);
        assert_eq!(p.maybe_number, Some(2.5));
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let p: Sample =
            serde_json::from_str(r#"{"text": null, "maybe_text": null, "maybe_number": ""}"#)
                .unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.maybe_text, None);
        assert_eq!(p.number, 0.0);
        assert_eq!(p.maybe_number, None);
    }

    #[test]
    fn test_float_rendering_matches_form_input() {
        let p: Sample = serde_json::from_str(r#"{"text": 12.5}"#).unwrap();
        assert_eq!(p.text, "12.5");
        let p: Sample = serde_json::from_str(r#"{"text": 100.0}"#).unwrap();
        assert_eq!(p.text, "100");
    }

    #[derive(Deserialize)]
    struct IdSample {
        #[serde(deserialize_with = "super::integer_id")]
        id: i64,
    }

    #[test]
    fn test_integer_id_from_number_or_string() {
        let p: IdSample = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(p.id, 7);
        let p: IdSample = serde_json::from_str(r#"{"id": " 7 "}"#).unwrap();
        assert_eq!(p.id, 7);
        assert!(serde_json::from_str::<IdSample>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<IdSample>(r#"{"id": null}"#).is_err());
    }
}
