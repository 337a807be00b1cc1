//! Field descriptors for schema definition.
//!
//! A [`FieldDescriptor`] declares one logical document field: its value
//! kind, whether it is single- or multi-valued, whether it is an internal
//! (non-user-facing) field, and, for complex fields, the distinct kinds used
//! for faceting and storage.
//!
//! # Examples
//!
//! ```
//! use corvina::schema::field::{FieldDescriptor, UseCase};
//! use corvina::value::field_value::ValueKind;
//!
//! let title = FieldDescriptor::new("title", ValueKind::Text);
//! assert_eq!(title.kind_for(UseCase::Stored), ValueKind::Text);
//!
//! let tags = FieldDescriptor::new("tags", ValueKind::Text).multi_value(true);
//! assert!(tags.is_multi_value());
//!
//! // Complex field: faceted as text, stored as a 64-bit integer.
//! let rating = FieldDescriptor::new("rating", ValueKind::Text)
//!     .complex(ValueKind::Text, ValueKind::Long);
//! assert_eq!(rating.kind_for(UseCase::Stored), ValueKind::Long);
//! assert_eq!(rating.kind_for(UseCase::Facet), ValueKind::Text);
//! assert_eq!(rating.kind_for(UseCase::Suggest), ValueKind::Text);
//! ```

use serde::{Deserialize, Serialize};

use crate::value::field_value::ValueKind;

/// The usage context that selects which declared kind of a complex field
/// applies during coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseCase {
    /// Stored/retrievable representation.
    Stored,
    /// Faceting representation.
    Facet,
    /// Filtering representation.
    Filter,
    /// Suggestion representation (always text).
    Suggest,
}

/// The additional declared kinds of a complex field.
///
/// Complex fields carry one kind per use case instead of a single domain
/// kind: the facet kind doubles as the filter kind, and the suggest kind is
/// always [`ValueKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexKinds {
    /// Kind used for faceting and filtering.
    pub facet: ValueKind,
    /// Kind used for storage and retrieval.
    pub stored: ValueKind,
}

/// Describes one logical field of a document type.
///
/// Descriptors are immutable once registered with a
/// [`DocumentFactory`](crate::schema::schema::DocumentFactory) and are
/// shared (`Arc`) by all documents of that schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Base field name, without any wire prefixes.
    name: String,
    /// Declared domain kind.
    kind: ValueKind,
    /// Whether the field holds an ordered sequence of values.
    multi_value: bool,
    /// Whether the field is internal (non-user-facing) and carries the
    /// internal marker on the wire.
    internal: bool,
    /// Per-use-case kinds, present only for complex fields.
    complex: Option<ComplexKinds>,
}

impl FieldDescriptor {
    /// Create a new single-valued, user-facing field descriptor.
    pub fn new<S: Into<String>>(name: S, kind: ValueKind) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind,
            multi_value: false,
            internal: false,
            complex: None,
        }
    }

    /// Set whether this field holds multiple values.
    pub fn multi_value(mut self, multi_value: bool) -> Self {
        self.multi_value = multi_value;
        self
    }

    /// Mark this field as internal (non-user-facing).
    pub fn internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    /// Declare this as a complex field with distinct facet and stored kinds.
    pub fn complex(mut self, facet: ValueKind, stored: ValueKind) -> Self {
        self.complex = Some(ComplexKinds { facet, stored });
        self
    }

    /// The base field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared domain kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether this field holds multiple values.
    pub fn is_multi_value(&self) -> bool {
        self.multi_value
    }

    /// Whether this field is internal.
    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// Whether this is a complex field.
    pub fn is_complex(&self) -> bool {
        self.complex.is_some()
    }

    /// The kind that applies for the given use case.
    ///
    /// Simple fields use their declared kind for every use case. Complex
    /// fields select the facet kind for faceting and filtering, the stored
    /// kind for storage, and text for suggestions.
    pub fn kind_for(&self, use_case: UseCase) -> ValueKind {
        match &self.complex {
            Some(kinds) => match use_case {
                UseCase::Facet | UseCase::Filter => kinds.facet,
                UseCase::Stored => kinds.stored,
                UseCase::Suggest => ValueKind::Text,
            },
            None => self.kind,
        }
    }

    /// The kind a document value of this field must have.
    ///
    /// This is the stored kind for complex fields and the declared kind
    /// otherwise; typed setters on `Document` validate against it.
    pub fn value_kind(&self) -> ValueKind {
        self.kind_for(UseCase::Stored)
    }
}
