//! Backend-neutral wire representation of documents.
//!
//! A [`WireDocument`] is a flat mapping from string field names to
//! [`WireValue`]s: loosely-typed scalars, ordered sequences of scalars, or
//! (only for partial updates) one level of operation-name → value nesting.
//! Dates travel as RFC 3339 UTC text and geo-points as `"lat,lon"` text;
//! everything else keeps its native transport representation.
//!
//! Both types derive serde traits so the backend client can hand them
//! straight to its JSON codec.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A loosely-typed value in a wire document.
///
/// The `Object` variant exists solely for the update-operation form; regular
/// documents never nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    /// Explicit null (e.g. a remove-field update operation).
    Null,
    /// Boolean scalar.
    Boolean(bool),
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar; also carries dates (RFC 3339) and geo-points ("lat,lon").
    Text(String),
    /// Ordered sequence of scalars.
    Sequence(Vec<WireValue>),
    /// Operation-name → value map, used only by update serialization.
    Object(HashMap<String, WireValue>),
    /// Raw bytes, serialized by the transport layer in its native form.
    Binary(Vec<u8>),
}

impl WireValue {
    /// Render the value as text, for error messages and reserved-key parsing.
    pub fn as_display_string(&self) -> String {
        match self {
            WireValue::Null => "null".to_string(),
            WireValue::Boolean(b) => b.to_string(),
            WireValue::Integer(i) => i.to_string(),
            WireValue::Float(f) => f.to_string(),
            WireValue::Text(s) => s.clone(),
            WireValue::Sequence(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.as_display_string()).collect();
                format!("[{}]", parts.join(", "))
            }
            WireValue::Object(_) => "{..}".to_string(),
            WireValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }

    /// Whether this is a sequence value.
    pub fn is_sequence(&self) -> bool {
        matches!(self, WireValue::Sequence(_))
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::Text(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::Text(s)
    }
}

impl From<i64> for WireValue {
    fn from(i: i64) -> Self {
        WireValue::Integer(i)
    }
}

impl From<f64> for WireValue {
    fn from(f: f64) -> Self {
        WireValue::Float(f)
    }
}

impl From<bool> for WireValue {
    fn from(b: bool) -> Self {
        WireValue::Boolean(b)
    }
}

/// A flat, backend-neutral document: field name → wire value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireDocument {
    fields: HashMap<String, WireValue>,
}

impl WireDocument {
    /// Create a new empty wire document.
    pub fn new() -> Self {
        WireDocument {
            fields: HashMap::new(),
        }
    }

    /// Insert a field value.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: WireValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    /// All (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WireValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, WireValue)> for WireDocument {
    fn from_iter<T: IntoIterator<Item = (String, WireValue)>>(iter: T) -> Self {
        WireDocument {
            fields: iter.into_iter().collect(),
        }
    }
}
