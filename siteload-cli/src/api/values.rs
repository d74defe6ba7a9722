//! Field values written to the document store

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

/// A single field value in a document write.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

/// Ordered field map for one document write. Ordering keeps request
/// payloads and update masks deterministic.
pub type FieldMap = BTreeMap<String, Value>;

impl Value {
    /// A timestamp, or null when the source cell held nothing usable.
    pub fn timestamp_or_null(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Value::Null, Value::Timestamp)
    }

    /// Encode as a Firestore REST `Value` object.
    ///
    /// Integers travel as decimal strings and timestamps as RFC 3339, per
    /// the wire format.
    pub fn to_firestore_json(&self) -> serde_json::Value {
        match self {
            Value::Null => json!({ "nullValue": null }),
            Value::String(s) => json!({ "stringValue": s }),
            Value::Int(i) => json!({ "integerValue": i.to_string() }),
            Value::Float(f) => json!({ "doubleValue": f }),
            Value::Bool(b) => json!({ "booleanValue": b }),
            Value::Timestamp(ts) => {
                json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Secs, true) })
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Encode a field map as a Firestore REST document body.
pub fn encode_fields(fields: &FieldMap) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for (name, value) in fields {
        object.insert(name.clone(), value.to_firestore_json());
    }
    json!({ "fields": object })
}
