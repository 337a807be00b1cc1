//! Document deserialization: flat wire documents back to structured
//! documents.

use log::{debug, error};

use crate::document::document::Document;
use crate::error::{CorvinaError, Result};
use crate::marshal::coerce;
use crate::marshal::field_name;
use crate::marshal::wire::{WireDocument, WireValue};
use crate::schema::field::UseCase;
use crate::schema::schema::DocumentFactory;

/// Rebuild a structured document from its wire form.
///
/// The document is created through the factory from the reserved id key;
/// score and distance are picked up from their reserved keys when present
/// (absence leaves them unset). Every remaining key is stripped of the
/// internal marker and, when a search context is supplied, of the context
/// prefix (required at position 0), then resolved against the schema. Keys
/// that match no schema field are skipped silently for forward
/// compatibility. Matched values are coerced to the field's stored kind,
/// element-wise for sequences; any coercion failure aborts the whole call,
/// no partial document is returned.
pub fn deserialize(
    wire: &WireDocument,
    factory: &DocumentFactory,
    context: Option<&str>,
) -> Result<Document> {
    let id = match wire.get(field_name::ID) {
        Some(value) => value.as_display_string(),
        None => {
            return Err(CorvinaError::schema(format!(
                "Wire document has no '{}' key",
                field_name::ID
            )));
        }
    };
    let mut doc = factory.create_doc(id);

    if let Some(score) = wire.get(field_name::SCORE) {
        doc.set_score(parse_float(score, field_name::SCORE)?);
    }
    if let Some(distance) = wire.get(field_name::DISTANCE) {
        doc.set_distance(parse_float(distance, field_name::DISTANCE)?);
    }

    for (key, value) in wire.iter() {
        if field_name::is_reserved(key) {
            continue;
        }

        let parsed = field_name::parse(key, context);
        let Some(descriptor) = factory.get_field(parsed.base) else {
            debug!("Skipping unknown wire field '{}'", parsed.base);
            continue;
        };
        let descriptor = descriptor.clone();
        let target = descriptor.kind_for(UseCase::Stored);

        let result = if value.is_sequence() {
            if !descriptor.is_multi_value() {
                Err(CorvinaError::field(format!(
                    "Field '{}' is single-valued, sequence received",
                    parsed.base
                )))
            } else {
                coerce::to_typed_values(value, target, parsed.base).and_then(|values| {
                    if parsed.contextualized {
                        // Context presence was checked by the parser.
                        doc.set_contextualized_values(&descriptor, context.unwrap_or_default(), values)
                    } else {
                        doc.set_values(&descriptor, values)
                    }
                })
            }
        } else if descriptor.is_multi_value() {
            Err(CorvinaError::field(format!(
                "Field '{}' is multi-valued, scalar received",
                parsed.base
            )))
        } else {
            coerce::to_typed_value(value, target, parsed.base).and_then(|typed| {
                if parsed.contextualized {
                    doc.set_contextualized_value(&descriptor, context.unwrap_or_default(), typed)
                } else {
                    doc.set_value(&descriptor, typed)
                }
            })
        };

        if let Err(e) = result {
            error!(
                "Unable to parse result field '{}' value '{}' to kind [{}]",
                parsed.base,
                value.as_display_string(),
                target
            );
            return Err(e);
        }
    }

    Ok(doc)
}

/// Parse a reserved floating-point key (score, distance).
fn parse_float(value: &WireValue, key: &str) -> Result<f32> {
    match value {
        WireValue::Float(f) => Ok(*f as f32),
        WireValue::Integer(i) => Ok(*i as f32),
        WireValue::Text(s) => s
            .parse()
            .map_err(|_| CorvinaError::field(format!("Reserved key '{key}' is not a number"))),
        _ => Err(CorvinaError::field(format!(
            "Reserved key '{key}' is not a number"
        ))),
    }
}
