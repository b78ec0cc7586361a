// Response envelope normalization.
//
// The portal backend is inconsistent about how it wraps payloads:
// list endpoints answer either with a bare array or with
// `{ <pluralKey>: [...], "pagination": {...} }`, and stats endpoints
// sometimes arrive double-wrapped as `{ "data": { "data": {...} } }`.
// This module is the single place where those shapes are recognized.
// Unwrapping is bounded (at most one extra `data` layer) and a body
// matching no tolerated shape is a hard `ShapeMismatch`, never a
// silent default.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::types::{Page, PaginationResponse};

/// Parse a list body into a normalized [`Page`].
///
/// Accepts either a bare array (no pagination metadata, treated as a
/// single complete page) or an object carrying the records under
/// `plural_key` with an optional `pagination` sibling.
pub(crate) fn parse_list<T: DeserializeOwned>(
    body: &str,
    plural_key: &str,
) -> Result<Page<T>, Error> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::ShapeMismatch {
        message: format!("invalid JSON: {e}"),
        body: body.to_owned(),
    })?;

    match value {
        Value::Array(records) => {
            let items = decode(Value::Array(records), body, "list items")?;
            Ok(Page {
                items,
                pagination: None,
            })
        }
        Value::Object(mut map) => {
            let Some(records) = map.remove(plural_key) else {
                return Err(Error::ShapeMismatch {
                    message: format!("expected array or object with `{plural_key}` key"),
                    body: body.to_owned(),
                });
            };
            let items = decode(records, body, "list items")?;
            let pagination: Option<PaginationResponse> = match map.remove("pagination") {
                Some(Value::Null) | None => None,
                Some(p) => Some(decode(p, body, "pagination metadata")?),
            };
            Ok(Page { items, pagination })
        }
        _ => Err(Error::ShapeMismatch {
            message: format!("expected array or object with `{plural_key}` key"),
            body: body.to_owned(),
        }),
    }
}

/// Parse a stats body, tolerating at most one extra `data` wrapper.
///
/// The inner layer is only taken when it duck-types as the expected
/// value (an object carrying `total`) -- an object that merely *has* a
/// `data` field is otherwise treated as the stats value itself.
pub(crate) fn parse_stats<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::ShapeMismatch {
        message: format!("invalid JSON: {e}"),
        body: body.to_owned(),
    })?;

    let candidate = unwrap_data_layers(&value, looks_like_stats);
    match candidate {
        Some(inner) => decode(inner.clone(), body, "stats object"),
        None => Err(Error::ShapeMismatch {
            message: "no stats object found at any tolerated nesting depth".to_owned(),
            body: body.to_owned(),
        }),
    }
}

/// Parse a by-campus breakdown body, tolerating the same `data`
/// wrapping as stats. A body matching no tolerated shape degrades to
/// an empty list -- per-campus breakdowns are advisory display data.
pub(crate) fn parse_stats_list<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };

    let candidate = unwrap_data_layers(&value, Value::is_array);
    candidate
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

/// Walk `value`, `value.data`, `value.data.data` in order and return
/// the first layer satisfying `matches`. Exactly two `data` hops are
/// attempted; deeper nesting is out of contract.
fn unwrap_data_layers<'a>(value: &'a Value, matches: fn(&Value) -> bool) -> Option<&'a Value> {
    if matches(value) {
        return Some(value);
    }
    let once = value.get("data")?;
    if matches(once) {
        return Some(once);
    }
    let twice = once.get("data")?;
    matches(twice).then_some(twice)
}

/// Duck-typed check for a stats object: the presence of `total`.
fn looks_like_stats(value: &Value) -> bool {
    value.is_object() && value.get("total").is_some()
}

fn decode<T: DeserializeOwned>(value: Value, body: &str, what: &str) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::ShapeMismatch {
        message: format!("malformed {what}: {e}"),
        body: body.to_owned(),
    })
}
