//! The JSON interchange boundary between a [`SessionMap`] and the value kept
//! in the cache.
//!
//! Entries are always written as a JSON object so that other services can read
//! them without knowing anything about this crate. On the way back in, the
//! "nothing stored" forms (`""`, `null`, `{}` and the empty-array form `[]`
//! that some writers emit for an empty session) all decode to an empty map.

use serde_json::Value;

use crate::{Error, Result, SessionMap};

/// Encodes the session as a JSON object.
pub fn encode(session: &SessionMap) -> Result<String> {
    serde_json::to_string(session).map_err(|e| Error::Encode(e.to_string()))
}

/// Decodes a cached value into a session.
pub fn decode(raw: &str) -> Result<SessionMap> {
    if raw.trim().is_empty() {
        return Ok(SessionMap::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|e| Error::Decode(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map.into()),
        Value::Null => Ok(SessionMap::new()),
        Value::Array(items) if items.is_empty() => Ok(SessionMap::new()),
        other => Err(Error::Decode(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
