//! Partial-update specifications.
//!
//! An [`Update`] describes a set of atomic modifications to one indexed
//! document without re-sending the whole document: per field and per
//! context, an ordered list of operations such as set, add or remove. The
//! serializer turns an update into the nested wire form
//! `{ field: { "SET": value, ... }, ... }` (see
//! [`serialize_update`](crate::marshal::serializer::serialize_update)).
//!
//! # Examples
//!
//! ```
//! use corvina::document::update::{Update, UpdateOperation};
//! use corvina::schema::field::FieldDescriptor;
//! use corvina::value::field_value::{FieldValue, ValueKind};
//! use std::sync::Arc;
//!
//! let price = Arc::new(FieldDescriptor::new("price", ValueKind::Double));
//!
//! let update = Update::new("p-1").set(&price, FieldValue::Double(9.99));
//! assert_eq!(update.id(), "p-1");
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::document::document::ValueSlot;
use crate::schema::field::FieldDescriptor;
use crate::value::field_value::FieldValue;

/// The atomic update operations supported by the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperation {
    /// Replace the field value(s).
    Set,
    /// Append value(s) to a multi-valued field.
    Add,
    /// Increment a numeric field.
    Inc,
    /// Remove the field, or specific value(s) from a multi-valued field.
    Remove,
    /// Remove values matching a regular expression from a multi-valued field.
    RemoveRegex,
}

impl UpdateOperation {
    /// The operation name used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            UpdateOperation::Set => "SET",
            UpdateOperation::Add => "ADD",
            UpdateOperation::Inc => "INC",
            UpdateOperation::Remove => "REMOVE",
            UpdateOperation::RemoveRegex => "REMOVEREGEX",
        }
    }
}

/// One operation together with its operand, if any.
///
/// A bare [`UpdateOperation::Remove`] carries no value and clears the whole
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEntry {
    /// The operation to apply.
    pub operation: UpdateOperation,
    /// The operand; `None` for value-less operations.
    pub value: Option<ValueSlot>,
}

/// All modifications recorded for one field.
#[derive(Debug, Clone)]
pub struct FieldUpdate {
    descriptor: Arc<FieldDescriptor>,
    /// Entries per context; `None` is the update-wide default context.
    entries: AHashMap<Option<String>, Vec<UpdateEntry>>,
}

impl FieldUpdate {
    /// The descriptor of the field being updated.
    pub fn descriptor(&self) -> &Arc<FieldDescriptor> {
        &self.descriptor
    }

    /// The recorded entries per context.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&str>, &[UpdateEntry])> {
        self.entries
            .iter()
            .map(|(context, entries)| (context.as_deref(), entries.as_slice()))
    }
}

/// A partial-update specification for one document.
#[derive(Debug, Clone, Default)]
pub struct Update {
    id: String,
    /// Context applied to entries recorded without an explicit context.
    update_context: Option<String>,
    fields: AHashMap<String, FieldUpdate>,
}

impl Update {
    /// Create a new update for the document with the given id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Update {
            id: id.into(),
            update_context: None,
            fields: AHashMap::new(),
        }
    }

    /// The id of the document being updated.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the update-wide context, applied to entries recorded without an
    /// explicit context of their own.
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        self.update_context = Some(context.into());
        self
    }

    /// The update-wide context, if any.
    pub fn update_context(&self) -> Option<&str> {
        self.update_context.as_deref()
    }

    /// Replace the field's value.
    pub fn set(self, descriptor: &Arc<FieldDescriptor>, value: FieldValue) -> Self {
        self.push(descriptor, None, UpdateOperation::Set, Some(ValueSlot::Single(value)))
    }

    /// Replace the field's value for a specific context.
    pub fn set_in_context<C: Into<String>>(
        self,
        descriptor: &Arc<FieldDescriptor>,
        context: C,
        value: FieldValue,
    ) -> Self {
        self.push(
            descriptor,
            Some(context.into()),
            UpdateOperation::Set,
            Some(ValueSlot::Single(value)),
        )
    }

    /// Append values to a multi-valued field.
    pub fn add(self, descriptor: &Arc<FieldDescriptor>, values: Vec<FieldValue>) -> Self {
        self.push(descriptor, None, UpdateOperation::Add, Some(ValueSlot::Multi(values)))
    }

    /// Append values to a multi-valued field for a specific context.
    pub fn add_in_context<C: Into<String>>(
        self,
        descriptor: &Arc<FieldDescriptor>,
        context: C,
        values: Vec<FieldValue>,
    ) -> Self {
        self.push(
            descriptor,
            Some(context.into()),
            UpdateOperation::Add,
            Some(ValueSlot::Multi(values)),
        )
    }

    /// Increment a numeric field.
    pub fn inc(self, descriptor: &Arc<FieldDescriptor>, amount: FieldValue) -> Self {
        self.push(descriptor, None, UpdateOperation::Inc, Some(ValueSlot::Single(amount)))
    }

    /// Remove the field entirely.
    pub fn remove(self, descriptor: &Arc<FieldDescriptor>) -> Self {
        self.push(descriptor, None, UpdateOperation::Remove, None)
    }

    /// Remove specific values from a multi-valued field.
    pub fn remove_values(self, descriptor: &Arc<FieldDescriptor>, values: Vec<FieldValue>) -> Self {
        self.push(
            descriptor,
            None,
            UpdateOperation::Remove,
            Some(ValueSlot::Multi(values)),
        )
    }

    /// Remove values matching a regular expression from a multi-valued field.
    pub fn remove_regex<S: Into<String>>(self, descriptor: &Arc<FieldDescriptor>, pattern: S) -> Self {
        self.push(
            descriptor,
            None,
            UpdateOperation::RemoveRegex,
            Some(ValueSlot::Single(FieldValue::Text(pattern.into()))),
        )
    }

    fn push(
        mut self,
        descriptor: &Arc<FieldDescriptor>,
        context: Option<String>,
        operation: UpdateOperation,
        value: Option<ValueSlot>,
    ) -> Self {
        let field = self
            .fields
            .entry(descriptor.name().to_string())
            .or_insert_with(|| FieldUpdate {
                descriptor: Arc::clone(descriptor),
                entries: AHashMap::new(),
            });
        field
            .entries
            .entry(context)
            .or_default()
            .push(UpdateEntry { operation, value });
        self
    }

    /// The recorded field updates.
    pub fn fields(&self) -> impl Iterator<Item = &FieldUpdate> {
        self.fields.values()
    }

    /// The number of fields with recorded updates.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no updates were recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::field_value::ValueKind;

    #[test]
    fn test_wire_names() {
        assert_eq!(UpdateOperation::Set.wire_name(), "SET");
        assert_eq!(UpdateOperation::Add.wire_name(), "ADD");
        assert_eq!(UpdateOperation::Inc.wire_name(), "INC");
        assert_eq!(UpdateOperation::Remove.wire_name(), "REMOVE");
        assert_eq!(UpdateOperation::RemoveRegex.wire_name(), "REMOVEREGEX");
    }

    #[test]
    fn test_update_building() {
        let price = Arc::new(FieldDescriptor::new("price", ValueKind::Double));
        let tags = Arc::new(FieldDescriptor::new("tags", ValueKind::Text).multi_value(true));

        let update = Update::new("p-1")
            .set(&price, FieldValue::Double(9.99))
            .add(&tags, vec![FieldValue::Text("sale".to_string())])
            .remove(&tags);

        assert_eq!(update.id(), "p-1");
        assert_eq!(update.len(), 2);

        let tags_update = update
            .fields()
            .find(|f| f.descriptor().name() == "tags")
            .unwrap();
        let (_, entries) = tags_update.entries().next().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, UpdateOperation::Add);
        assert_eq!(entries[1].operation, UpdateOperation::Remove);
        assert!(entries[1].value.is_none());
    }

    #[test]
    fn test_update_context_recording() {
        let color = Arc::new(FieldDescriptor::new("color", ValueKind::Text));

        let update = Update::new("p-1")
            .context("es")
            .set_in_context(&color, "fr", FieldValue::Text("rouge".to_string()));

        assert_eq!(update.update_context(), Some("es"));
        let field = update.fields().next().unwrap();
        let (context, _) = field.entries().next().unwrap();
        assert_eq!(context, Some("fr"));
    }
}
