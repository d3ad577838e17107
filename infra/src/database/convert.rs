//! Conversion between JSON documents and BSON.
//!
//! Reference fields (`_id` and names ending in `_id`) holding a 24 character
//! hex string are stored as ObjectIds, and timestamp fields (names ending in
//! `_at`) holding an RFC 3339 string are stored as BSON dates, so the
//! database sees native types while the domain keeps working with JSON.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use mongodb::bson::{self, Bson};
use serde_json::{Map, Number, Value};

use ec_core::repositories::Document;
use ec_core::RecordId;

fn is_reference_key(key: &str) -> bool {
    key == "_id" || key.ends_with("_id")
}

fn is_timestamp_key(key: &str) -> bool {
    key.ends_with("_at")
}

/// Convert a JSON document into a BSON document
pub fn to_bson_document(document: &Document) -> bson::Document {
    document
        .iter()
        .map(|(key, value)| (key.clone(), to_bson(key, value)))
        .collect()
}

fn to_bson(key: &str, value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(flag) => Bson::Boolean(*flag),
        Value::Number(number) => number_to_bson(number),
        Value::String(text) => string_to_bson(key, text),
        Value::Array(items) => Bson::Array(items.iter().map(|item| to_bson(key, item)).collect()),
        Value::Object(map) => Bson::Document(to_bson_document(map)),
    }
}

fn number_to_bson(number: &Number) -> Bson {
    if let Some(int) = number.as_i64() {
        Bson::Int64(int)
    } else {
        Bson::Double(number.as_f64().unwrap_or(f64::NAN))
    }
}

fn string_to_bson(key: &str, text: &str) -> Bson {
    if is_reference_key(key) {
        if let Ok(id) = RecordId::parse_str(text) {
            return Bson::ObjectId(id.object_id());
        }
    }
    if is_timestamp_key(key) {
        if let Ok(at) = DateTime::parse_from_rfc3339(text) {
            return Bson::DateTime(bson::DateTime::from_millis(at.timestamp_millis()));
        }
    }
    Bson::String(text.to_string())
}

/// Convert a BSON document read from the server back into JSON
pub fn from_bson_document(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, from_bson(value)))
        .collect::<Map<String, Value>>()
}

fn from_bson(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(flag) => Value::Bool(flag),
        Bson::Int32(int) => Value::from(int),
        Bson::Int64(int) => Value::from(int),
        Bson::Double(float) => Number::from_f64(float).map_or(Value::Null, Value::Number),
        Bson::String(text) => Value::String(text),
        Bson::ObjectId(oid) => Value::String(RecordId::from(oid).to_hex()),
        Bson::DateTime(at) => {
            let millis = at.timestamp_millis();
            match Utc.timestamp_millis_opt(millis).single() {
                Some(at) => Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
                None => Value::from(millis),
            }
        }
        Bson::Array(items) => Value::Array(items.into_iter().map(from_bson).collect()),
        Bson::Document(nested) => Value::Object(from_bson_document(nested)),
        other => other.into_relaxed_extjson(),
    }
}
