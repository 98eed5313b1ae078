//! Deserialization helpers that coalesce absent or falsy input to empty values.
//!
//! Resume payloads come from an external parser and from form state in the
//! browser; both send `null`, `""`, `0` or `false` where a value is missing.
//! Fields using these helpers must also be `#[serde(default)]` so a missing
//! key behaves like `null`.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Deserializes a falsy value as `T::default()`. Truthy values of the
/// wrong shape are still rejected.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(T::default());
    }
    T::deserialize(value).map_err(D::Error::custom)
}

/// Deserializes a list of strings, treating a falsy list as empty and
/// dropping `null` elements.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<Option<String>> = null_as_default(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

/// Deserializes an optional query parameter, treating a blank value as absent.
/// Non-blank values are parsed with `FromStr`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(D::Error::custom)
        }
        _ => Ok(None),
    }
}
