//! Field value types for documents.
//!
//! This module defines the [`FieldValue`] enum which represents all possible
//! types of values that can be stored in document fields, and the matching
//! [`ValueKind`] tag used by field descriptors to declare a field's type.
//!
//! # Supported Types
//!
//! - **Text** - String data
//! - **Integer** / **Long** - 32-bit and 64-bit signed integers
//! - **Float** / **Double** - 32-bit and 64-bit floating-point numbers
//! - **Boolean** - true/false values
//! - **DateTime** - UTC timestamps
//! - **Geo** - Geographic coordinates (latitude/longitude)
//! - **Binary** - Raw byte data
//!
//! # Type tags
//!
//! `ValueKind` is the schema-level counterpart of `FieldValue`: a closed set
//! of type tags decided once per field descriptor, so that coercion is a
//! single exhaustive `match` instead of a chain of runtime type checks.
//!
//! ```
//! use corvina::value::field_value::{FieldValue, ValueKind};
//!
//! let value = FieldValue::Text("hello".to_string());
//! assert_eq!(value.kind(), ValueKind::Text);
//! assert_eq!(value.as_text(), Some("hello"));
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::geo::GeoPoint;

/// The closed set of value types a field descriptor can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// UTF-8 text.
    Text,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Boolean,
    /// UTC timestamp.
    DateTime,
    /// Geographical point.
    Geo,
    /// Raw bytes.
    Binary,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Boolean => "boolean",
            ValueKind::DateTime => "datetime",
            ValueKind::Geo => "geo",
            ValueKind::Binary => "binary",
        };
        write!(f, "{name}")
    }
}

/// Represents a value for a field in a document.
///
/// Every variant corresponds to exactly one [`ValueKind`]; multi-valued
/// fields hold a `Vec<FieldValue>` at the document slot level rather than a
/// dedicated variant, so a value is always a scalar here.
///
/// # Examples
///
/// ```
/// use corvina::value::field_value::FieldValue;
///
/// let text = FieldValue::Text("Rust Programming".to_string());
/// let year = FieldValue::Integer(2024);
/// let price = FieldValue::Double(39.99);
/// let active = FieldValue::Boolean(true);
/// let data = FieldValue::Binary(vec![0x00, 0x01, 0x02]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// 32-bit integer value
    Integer(i32),
    /// 64-bit integer value
    Long(i64),
    /// 32-bit floating point value
    Float(f32),
    /// 64-bit floating point value
    Double(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value (always UTC)
    DateTime(DateTime<Utc>),
    /// Geographic point value
    Geo(GeoPoint),
    /// Binary data
    Binary(Vec<u8>),
}

impl FieldValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Long(_) => ValueKind::Long,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Double(_) => ValueKind::Double,
            FieldValue::Boolean(_) => ValueKind::Boolean,
            FieldValue::DateTime(_) => ValueKind::DateTime,
            FieldValue::Geo(_) => ValueKind::Geo,
            FieldValue::Binary(_) => ValueKind::Binary,
        }
    }

    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to numeric string representation.
    pub fn as_numeric(&self) -> Option<String> {
        match self {
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Long(l) => Some(l.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Double(d) => Some(d.to_string()),
            _ => None,
        }
    }

    /// Convert to boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a UTC timestamp if this is a datetime value.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Convert to GeoPoint if this is a geo value.
    pub fn as_geo(&self) -> Option<&GeoPoint> {
        match self {
            FieldValue::Geo(point) => Some(point),
            _ => None,
        }
    }

    /// Get the value as binary data, if possible.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Binary(data) => Some(data),
            _ => None,
        }
    }
}
