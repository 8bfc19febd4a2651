//! Deserialisation helpers for loosely-shaped stored documents.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Treats an explicit `null` the same as a missing field.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a plain string id, a `{"$oid": ".."}` wrapper or a number.
pub fn document_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(id_to_string).unwrap_or_default())
}

pub fn id_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("$oid")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Bonus achievements are stored as `null`, a list of strings or a list of
/// objects carrying a `nombre`; anything else is dropped.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let tags = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Object(map) => map.get("nombre").and_then(Value::as_str).map(str::to_string),
                other => {
                    log::debug!("Ignoring unsupported bonus entry: {}", other);
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            log::debug!("Ignoring bonus field of unexpected shape: {}", other);
            Vec::new()
        }
    };
    Ok(tags)
}

/// Keeps the entries of a stored list that parse as `T` and drops the rest,
/// so one bad entry never fails the enclosing document.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(other) => {
            log::warn!("Ignoring list of unexpected shape: {}", other);
            return Ok(Vec::new());
        }
    };

    let parsed = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value::<T>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Dropping list entry {}: {}", position, e);
                None
            }
        })
        .collect();
    Ok(parsed)
}

/// Whole number stored either as `45` or `45.0`; `null` reads as 0.
pub fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => number_to_u32(&n)
            .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {}", n))),
        Some(other) => Err(D::Error::custom(format!(
            "expected a whole number, found {}",
            other
        ))),
    }
}

fn number_to_u32(n: &Number) -> Option<u32> {
    if let Some(whole) = n.as_u64() {
        return u32::try_from(whole).ok();
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32)
}

pub(crate) fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn minute_field(value: &Value, key: &str) -> Option<u32> {
    match value.get(key) {
        Some(Value::Number(n)) => number_to_u32(n),
        _ => None,
    }
}
