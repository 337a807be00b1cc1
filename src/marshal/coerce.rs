//! Bidirectional value coercion between the typed document model and the
//! loosely-typed wire representation.
//!
//! Outbound ([`to_wire_value`]) is infallible: dates become RFC 3339 UTC
//! text, geo-points become `"lat,lon"` text, and every other scalar keeps
//! its native transport representation. Inbound ([`to_typed_value`]) is
//! driven by the target [`ValueKind`] resolved from the field descriptor and
//! is a single exhaustive match: numeric narrowing/widening, boolean casts,
//! date parsing normalized to UTC, the geo grammar, and a fixed UTF-8
//! encoding for binary data. Any inbound failure is a fatal
//! [`CorvinaError::Coercion`] carrying the field name, the raw value and the
//! target kind.
//!
//! Sequences are coerced element-wise in both directions, preserving order.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::document::document::ValueSlot;
use crate::error::{CorvinaError, Result};
use crate::marshal::wire::WireValue;
use crate::value::field_value::{FieldValue, ValueKind};
use crate::value::geo::GeoPoint;

/// Convert a typed value to its wire representation.
pub fn to_wire_value(value: &FieldValue) -> WireValue {
    match value {
        FieldValue::Text(s) => WireValue::Text(s.clone()),
        FieldValue::Integer(i) => WireValue::Integer(i64::from(*i)),
        FieldValue::Long(l) => WireValue::Integer(*l),
        FieldValue::Float(f) => WireValue::Float(f64::from(*f)),
        FieldValue::Double(d) => WireValue::Float(*d),
        FieldValue::Boolean(b) => WireValue::Boolean(*b),
        FieldValue::DateTime(dt) => {
            WireValue::Text(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        FieldValue::Geo(point) => WireValue::Text(point.to_string()),
        FieldValue::Binary(bytes) => WireValue::Binary(bytes.clone()),
    }
}

/// Convert a document value slot to its wire representation; multi-valued
/// slots become ordered sequences.
pub fn slot_to_wire(slot: &ValueSlot) -> WireValue {
    match slot {
        ValueSlot::Single(value) => to_wire_value(value),
        ValueSlot::Multi(values) => {
            WireValue::Sequence(values.iter().map(to_wire_value).collect())
        }
    }
}

/// Convert a scalar wire value to the target kind.
///
/// `field` is the raw schema field name; it is only used to label coercion
/// errors.
pub fn to_typed_value(value: &WireValue, target: ValueKind, field: &str) -> Result<FieldValue> {
    let fail = || CorvinaError::coercion(field, value.as_display_string(), target);

    match target {
        ValueKind::Integer => match value {
            WireValue::Integer(i) => Ok(FieldValue::Integer(*i as i32)),
            WireValue::Float(f) => Ok(FieldValue::Integer(*f as i32)),
            WireValue::Text(s) => s.parse().map(FieldValue::Integer).map_err(|_| fail()),
            _ => Err(fail()),
        },
        ValueKind::Long => match value {
            WireValue::Integer(i) => Ok(FieldValue::Long(*i)),
            WireValue::Float(f) => Ok(FieldValue::Long(*f as i64)),
            WireValue::Text(s) => s.parse().map(FieldValue::Long).map_err(|_| fail()),
            _ => Err(fail()),
        },
        ValueKind::Float => match value {
            WireValue::Integer(i) => Ok(FieldValue::Float(*i as f32)),
            WireValue::Float(f) => Ok(FieldValue::Float(*f as f32)),
            WireValue::Text(s) => s.parse().map(FieldValue::Float).map_err(|_| fail()),
            _ => Err(fail()),
        },
        ValueKind::Double => match value {
            WireValue::Integer(i) => Ok(FieldValue::Double(*i as f64)),
            WireValue::Float(f) => Ok(FieldValue::Double(*f)),
            WireValue::Text(s) => s.parse().map(FieldValue::Double).map_err(|_| fail()),
            _ => Err(fail()),
        },
        ValueKind::Boolean => match value {
            WireValue::Boolean(b) => Ok(FieldValue::Boolean(*b)),
            WireValue::Text(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Ok(FieldValue::Boolean(true))
                } else if s.eq_ignore_ascii_case("false") {
                    Ok(FieldValue::Boolean(false))
                } else {
                    Err(fail())
                }
            }
            _ => Err(fail()),
        },
        ValueKind::DateTime => match value {
            WireValue::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| FieldValue::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| fail()),
            // Numeric dates are Unix epoch seconds.
            WireValue::Integer(i) => DateTime::from_timestamp(*i, 0)
                .map(FieldValue::DateTime)
                .ok_or_else(fail),
            _ => Err(fail()),
        },
        ValueKind::Geo => match value {
            WireValue::Text(s) => GeoPoint::parse(s).map(FieldValue::Geo).map_err(|_| fail()),
            _ => Err(fail()),
        },
        ValueKind::Binary => match value {
            WireValue::Binary(bytes) => Ok(FieldValue::Binary(bytes.clone())),
            // Fixed textual encoding: the UTF-8 bytes of the text form.
            WireValue::Text(s) => Ok(FieldValue::Binary(s.clone().into_bytes())),
            _ => Err(fail()),
        },
        ValueKind::Text => match value {
            WireValue::Text(s) => Ok(FieldValue::Text(s.clone())),
            // Permissive fallback: scalars degrade to their text rendering.
            WireValue::Integer(_) | WireValue::Float(_) | WireValue::Boolean(_) => {
                Ok(FieldValue::Text(value.as_display_string()))
            }
            _ => Err(fail()),
        },
    }
}

/// Convert a wire value to an ordered list of typed values, applying the
/// scalar conversion element-wise over sequences.
pub fn to_typed_values(value: &WireValue, target: ValueKind, field: &str) -> Result<Vec<FieldValue>> {
    match value {
        WireValue::Sequence(values) => values
            .iter()
            .map(|element| to_typed_value(element, target, field))
            .collect(),
        scalar => Ok(vec![to_typed_value(scalar, target, field)?]),
    }
}
