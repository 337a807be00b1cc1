//! Structured, schema-bound documents.
//!
//! A [`Document`] is uniquely identified by an id and a type and owns a
//! mapping from field descriptors to values. Values may be scoped to zero or
//! more named contexts (e.g. a locale); the no-context default value acts as
//! the fallback representation. Documents are created through
//! [`DocumentFactory::create_doc`](crate::schema::schema::DocumentFactory::create_doc)
//! and are mutable only through typed setters, which validate the value kind
//! and multiplicity declared by the field descriptor.
//!
//! # Examples
//!
//! ```
//! use corvina::schema::field::FieldDescriptor;
//! use corvina::schema::schema::DocumentFactory;
//! use corvina::value::field_value::{FieldValue, ValueKind};
//!
//! let factory = DocumentFactory::builder("product")
//!     .add_field(FieldDescriptor::new("color", ValueKind::Text))
//!     .unwrap()
//!     .build();
//!
//! let mut doc = factory.create_doc("p-1");
//! let color = factory.get_field("color").unwrap().clone();
//!
//! doc.set_value(&color, FieldValue::Text("red".to_string())).unwrap();
//! doc.set_contextualized_value(&color, "es", FieldValue::Text("rojo".to_string()))
//!     .unwrap();
//!
//! assert_eq!(
//!     doc.get_contextualized_value("color", Some("es")),
//!     Some(&FieldValue::Text("rojo".to_string()))
//! );
//! assert_eq!(
//!     doc.get_contextualized_value("color", None),
//!     Some(&FieldValue::Text("red".to_string()))
//! );
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{CorvinaError, Result};
use crate::schema::field::FieldDescriptor;
use crate::value::field_value::FieldValue;

/// The value(s) a field holds for one context.
///
/// Single- vs multi-valued-ness is fixed by the field descriptor and must be
/// consistent with the wire representation in both marshalling directions.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSlot {
    /// A single scalar value.
    Single(FieldValue),
    /// An ordered sequence of values.
    Multi(Vec<FieldValue>),
}

impl ValueSlot {
    /// Whether the slot holds no values at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ValueSlot::Single(_) => false,
            ValueSlot::Multi(values) => values.is_empty(),
        }
    }

    /// The values in this slot, in order.
    pub fn values(&self) -> &[FieldValue] {
        match self {
            ValueSlot::Single(value) => std::slice::from_ref(value),
            ValueSlot::Multi(values) => values,
        }
    }
}

/// Per-field storage: the shared descriptor plus one slot per context.
#[derive(Debug, Clone)]
struct FieldData {
    descriptor: Arc<FieldDescriptor>,
    /// Keyed by context; `None` is the no-context default slot.
    slots: AHashMap<Option<String>, ValueSlot>,
}

/// A structured document bound to a schema.
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    doc_type: String,
    score: Option<f32>,
    distance: Option<f32>,
    fields: AHashMap<String, FieldData>,
}

impl Document {
    /// Create a new empty document. Prefer
    /// [`DocumentFactory::create_doc`](crate::schema::schema::DocumentFactory::create_doc),
    /// which fills in the factory's document type.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, doc_type: T) -> Self {
        Document {
            id: id.into(),
            doc_type: doc_type.into(),
            score: None,
            distance: None,
            fields: AHashMap::new(),
        }
    }

    /// The document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The document type.
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// The search score, if this document came from a search result.
    pub fn score(&self) -> Option<f32> {
        self.score
    }

    /// Set the search score.
    pub fn set_score(&mut self, score: f32) {
        self.score = Some(score);
    }

    /// The geo distance, if this document came from a geo-sorted result.
    pub fn distance(&self) -> Option<f32> {
        self.distance
    }

    /// Set the geo distance.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = Some(distance);
    }

    /// Set the default (no-context) value of a single-valued field.
    pub fn set_value(
        &mut self,
        descriptor: &Arc<FieldDescriptor>,
        value: FieldValue,
    ) -> Result<()> {
        self.put_slot(descriptor, None, ValueSlot::Single(value))
    }

    /// Set the default (no-context) values of a multi-valued field.
    pub fn set_values(
        &mut self,
        descriptor: &Arc<FieldDescriptor>,
        values: Vec<FieldValue>,
    ) -> Result<()> {
        self.put_slot(descriptor, None, ValueSlot::Multi(values))
    }

    /// Set the value of a single-valued field for a named context.
    pub fn set_contextualized_value<C: Into<String>>(
        &mut self,
        descriptor: &Arc<FieldDescriptor>,
        context: C,
        value: FieldValue,
    ) -> Result<()> {
        self.put_slot(descriptor, Some(context.into()), ValueSlot::Single(value))
    }

    /// Set the values of a multi-valued field for a named context.
    pub fn set_contextualized_values<C: Into<String>>(
        &mut self,
        descriptor: &Arc<FieldDescriptor>,
        context: C,
        values: Vec<FieldValue>,
    ) -> Result<()> {
        self.put_slot(descriptor, Some(context.into()), ValueSlot::Multi(values))
    }

    fn put_slot(
        &mut self,
        descriptor: &Arc<FieldDescriptor>,
        context: Option<String>,
        slot: ValueSlot,
    ) -> Result<()> {
        validate_slot(descriptor, &slot)?;
        let data = self
            .fields
            .entry(descriptor.name().to_string())
            .or_insert_with(|| FieldData {
                descriptor: Arc::clone(descriptor),
                slots: AHashMap::new(),
            });
        data.slots.insert(context, slot);
        Ok(())
    }

    /// Whether the field has at least one set value in any context.
    pub fn has_value(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|data| data.slots.values().any(|slot| !slot.is_empty()))
    }

    /// The descriptors of all fields with at least one set value.
    pub fn field_descriptors(&self) -> impl Iterator<Item = &Arc<FieldDescriptor>> {
        self.fields.values().map(|data| &data.descriptor)
    }

    /// The contexts for which a field holds values; `None` is the default
    /// slot. Empty when the field holds no values.
    pub fn field_contexts(&self, name: &str) -> Vec<Option<&str>> {
        match self.fields.get(name) {
            Some(data) => data.slots.keys().map(|c| c.as_deref()).collect(),
            None => Vec::new(),
        }
    }

    /// The value slot of a field for a context, falling back to the default
    /// slot when the context has no value of its own.
    pub fn get_contextualized_slot(&self, name: &str, context: Option<&str>) -> Option<&ValueSlot> {
        let data = self.fields.get(name)?;
        if let Some(ctx) = context
            && let Some(slot) = data.slots.get(&Some(ctx.to_string()))
        {
            return Some(slot);
        }
        data.slots.get(&None)
    }

    /// The single value of a field for a context, with default fallback.
    pub fn get_contextualized_value(&self, name: &str, context: Option<&str>) -> Option<&FieldValue> {
        match self.get_contextualized_slot(name, context)? {
            ValueSlot::Single(value) => Some(value),
            ValueSlot::Multi(_) => None,
        }
    }

    /// The values of a multi-valued field for a context, with default fallback.
    pub fn get_contextualized_values(
        &self,
        name: &str,
        context: Option<&str>,
    ) -> Option<&[FieldValue]> {
        match self.get_contextualized_slot(name, context)? {
            ValueSlot::Multi(values) => Some(values),
            ValueSlot::Single(_) => None,
        }
    }

    /// The default (no-context) single value of a field.
    pub fn get_value(&self, name: &str) -> Option<&FieldValue> {
        self.get_contextualized_value(name, None)
    }

    /// The default (no-context) values of a multi-valued field.
    pub fn get_values(&self, name: &str) -> Option<&[FieldValue]> {
        self.get_contextualized_values(name, None)
    }

    /// The number of fields with set values.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document has no field values.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Check a slot against a descriptor's multiplicity and value kind.
fn validate_slot(descriptor: &FieldDescriptor, slot: &ValueSlot) -> Result<()> {
    match slot {
        ValueSlot::Single(_) if descriptor.is_multi_value() => {
            return Err(CorvinaError::field(format!(
                "Field '{}' is multi-valued, single value given",
                descriptor.name()
            )));
        }
        ValueSlot::Multi(_) if !descriptor.is_multi_value() => {
            return Err(CorvinaError::field(format!(
                "Field '{}' is single-valued, value list given",
                descriptor.name()
            )));
        }
        _ => {}
    }

    let expected = descriptor.value_kind();
    for value in slot.values() {
        if value.kind() != expected {
            return Err(CorvinaError::field(format!(
                "Field '{}' expects kind [{}], got [{}]",
                descriptor.name(),
                expected,
                value.kind()
            )));
        }
    }
    Ok(())
}
