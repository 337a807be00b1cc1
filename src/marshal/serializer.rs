//! Document serialization: structured documents to flat wire documents.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::document::document::Document;
use crate::document::update::Update;
use crate::error::Result;
use crate::marshal::coerce;
use crate::marshal::field_name;
use crate::marshal::wire::{WireDocument, WireValue};

/// Serialize a document to its flat wire form.
///
/// Every field descriptor with at least one set value is expanded into one
/// wire entry per context holding a value (including the no-context
/// default); the entry's key comes from the field name resolver and its
/// value from the outbound coercer. Descriptors without a resolvable name
/// are skipped silently; empty multi-value slots are omitted. The reserved
/// id and type keys are always present. The input document is not mutated.
pub fn serialize(doc: &Document) -> Result<WireDocument> {
    let mut wire = WireDocument::new();

    for descriptor in doc.field_descriptors() {
        let name = descriptor.name();
        if !doc.has_value(name) {
            continue;
        }
        for context in doc.field_contexts(name) {
            let Some(wire_name) = field_name::resolve(descriptor, context) else {
                continue;
            };
            let Some(slot) = doc.get_contextualized_slot(name, context) else {
                continue;
            };
            if slot.is_empty() {
                continue;
            }
            wire.insert(wire_name, coerce::slot_to_wire(slot));
        }
    }

    wire.insert(field_name::ID, WireValue::from(doc.id()));
    wire.insert(field_name::TYPE, WireValue::from(doc.doc_type()));

    Ok(wire)
}

/// Serialize a batch of documents in parallel.
///
/// Per-document serialization is pure and independent, so the batch is
/// spread across the rayon worker pool. Results keep the input order.
pub fn serialize_batch(docs: &[Document]) -> Result<Vec<WireDocument>> {
    docs.par_iter().map(serialize).collect()
}

/// Serialize a partial-update specification to its wire form.
///
/// Each modified field/context pair produces a nested map of operation name
/// to coerced operand under the resolved wire field name; a value-less
/// operation (such as a bare remove) maps to an explicit null. Entries whose
/// context is unset fall back to the update-wide context. The reserved id
/// and type keys are always present.
pub fn serialize_update(update: &Update, doc_type: &str) -> Result<WireDocument> {
    let mut wire = WireDocument::new();
    wire.insert(field_name::ID, WireValue::from(update.id()));
    wire.insert(field_name::TYPE, WireValue::from(doc_type));

    debug!(
        "Atomic update - mapping update operations for document id [{}], {} fields",
        update.id(),
        update.len()
    );

    for field in update.fields() {
        let descriptor = field.descriptor();
        for (context, entries) in field.entries() {
            let effective_context = context.or(update.update_context());
            let Some(wire_name) = field_name::resolve(descriptor, effective_context) else {
                continue;
            };
            let modifiers: HashMap<String, WireValue> = entries
                .iter()
                .map(|entry| {
                    let value = match &entry.value {
                        Some(slot) => coerce::slot_to_wire(slot),
                        None => WireValue::Null,
                    };
                    (entry.operation.wire_name().to_string(), value)
                })
                .collect();
            wire.insert(wire_name, WireValue::Object(modifiers));
        }
    }

    Ok(wire)
}
