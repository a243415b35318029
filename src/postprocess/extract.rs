//! Plain-text extraction from heterogeneous provider responses.
//!
//! The upstream API has returned generated content as a bare string, as a
//! list of parts, and as a mapping with a `text` or nested `content` field,
//! depending on API surface and model version. [`ResponseValue`] models that
//! union explicitly so every shape is handled exhaustively, and
//! [`extract_text`] flattens any of them to a string. Extraction is total:
//! it never fails, even on shapes it does not recognize.

use std::collections::BTreeMap;

use serde_json::Value;

/// A provider response payload in one of the shapes the API is known to
/// return.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    /// Plain generated text.
    Text(String),
    /// Ordered sequence of nested payloads (e.g. content parts).
    Sequence(Vec<ResponseValue>),
    /// Key/value mapping, usually carrying a `text` or `content` field.
    Map(BTreeMap<String, ResponseValue>),
    /// Any other scalar: null, boolean, or number.
    Scalar(Value),
}

impl From<Value> for ResponseValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ResponseValue::Text(text),
            Value::Array(items) => {
                ResponseValue::Sequence(items.into_iter().map(ResponseValue::from).collect())
            }
            Value::Object(fields) => ResponseValue::Map(
                fields
                    .into_iter()
                    .map(|(key, field)| (key, ResponseValue::from(field)))
                    .collect(),
            ),
            other => ResponseValue::Scalar(other),
        }
    }
}

impl ResponseValue {
    fn to_json(&self) -> Value {
        match self {
            ResponseValue::Text(text) => Value::String(text.clone()),
            ResponseValue::Sequence(items) => {
                Value::Array(items.iter().map(ResponseValue::to_json).collect())
            }
            ResponseValue::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, field)| (key.clone(), field.to_json()))
                    .collect(),
            ),
            ResponseValue::Scalar(value) => value.clone(),
        }
    }
}

/// Extract plain text from any response shape.
///
/// Sequences are concatenated in order. Mappings yield their `text` field if
/// present, otherwise their `content` field is unwrapped recursively,
/// otherwise the whole mapping is rendered as compact JSON. Scalars fall
/// back to their JSON rendering (`null` becomes the empty string).
pub fn extract_text(value: &ResponseValue) -> String {
    match value {
        ResponseValue::Text(text) => text.clone(),
        ResponseValue::Sequence(items) => items.iter().map(extract_text).collect(),
        ResponseValue::Map(fields) => {
            if let Some(text) = fields.get("text") {
                extract_text(text)
            } else if let Some(content) = fields.get("content") {
                extract_text(content)
            } else {
                value.to_json().to_string()
            }
        }
        ResponseValue::Scalar(scalar) => match scalar {
            Value::Null => String::new(),
            other => other.to_string(),
        },
    }
}
