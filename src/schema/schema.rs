//! Document factories: the schema authority for one document type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::document::document::Document;
use crate::error::{CorvinaError, Result};
use crate::marshal::field_name;
use crate::schema::field::FieldDescriptor;

/// A document factory defines the structure of documents of one type.
///
/// The factory maps field names to [`FieldDescriptor`]s and is the authority
/// for "does this field exist" and "what kind must values take". It is
/// long-lived and read-only once built, so it may be shared freely across
/// concurrent marshalling operations.
///
/// # Examples
///
/// ```
/// use corvina::schema::field::FieldDescriptor;
/// use corvina::schema::schema::DocumentFactory;
/// use corvina::value::field_value::ValueKind;
///
/// let mut factory = DocumentFactory::new("product");
/// factory
///     .add_field(FieldDescriptor::new("title", ValueKind::Text))
///     .unwrap();
///
/// assert!(factory.has_field("title"));
/// let doc = factory.create_doc("p-1");
/// assert_eq!(doc.id(), "p-1");
/// assert_eq!(doc.doc_type(), "product");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentFactory {
    /// The document type this factory produces.
    doc_type: String,
    /// Map of field names to their descriptors
    fields: HashMap<String, Arc<FieldDescriptor>>,
    /// Ordered list of field names (for consistent ordering)
    field_names: Vec<String>,
}

impl DocumentFactory {
    /// Create a new empty factory for the given document type.
    pub fn new<S: Into<String>>(doc_type: S) -> Self {
        DocumentFactory {
            doc_type: doc_type.into(),
            fields: HashMap::new(),
            field_names: Vec::new(),
        }
    }

    /// Add a field descriptor to the schema.
    ///
    /// The four reserved wire keys (id, type, score, distance) are never
    /// schema fields; a descriptor named after one of them would serialize
    /// under the reserved key and be dropped on the way back, so it is
    /// rejected here.
    pub fn add_field(&mut self, descriptor: FieldDescriptor) -> Result<()> {
        let name = descriptor.name().to_string();

        if name.is_empty() {
            return Err(CorvinaError::schema("Field name cannot be empty"));
        }
        if field_name::is_reserved(&name) {
            return Err(CorvinaError::schema(format!(
                "Field name '{name}' is a reserved wire key"
            )));
        }
        if self.fields.contains_key(&name) {
            return Err(CorvinaError::schema(format!(
                "Field '{name}' already exists"
            )));
        }

        self.fields.insert(name.clone(), Arc::new(descriptor));
        self.field_names.push(name);

        Ok(())
    }

    /// Get a field descriptor by name.
    pub fn get_field(&self, name: &str) -> Option<&Arc<FieldDescriptor>> {
        self.fields.get(name)
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The document type this factory produces.
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Get all field names in the order they were added.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Get all field descriptors.
    pub fn fields(&self) -> &HashMap<String, Arc<FieldDescriptor>> {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a new, empty document of this factory's type.
    pub fn create_doc<S: Into<String>>(&self, id: S) -> Document {
        Document::new(id, self.doc_type.clone())
    }

    /// Create a builder for constructing factories.
    pub fn builder<S: Into<String>>(doc_type: S) -> DocumentFactoryBuilder {
        DocumentFactoryBuilder::new(doc_type)
    }
}

/// A builder for constructing document factories in a fluent manner.
#[derive(Debug)]
pub struct DocumentFactoryBuilder {
    factory: DocumentFactory,
}

impl DocumentFactoryBuilder {
    /// Create a new factory builder.
    pub fn new<S: Into<String>>(doc_type: S) -> Self {
        DocumentFactoryBuilder {
            factory: DocumentFactory::new(doc_type),
        }
    }

    /// Add a field descriptor.
    pub fn add_field(mut self, descriptor: FieldDescriptor) -> Result<Self> {
        self.factory.add_field(descriptor)?;
        Ok(self)
    }

    /// Build the final factory.
    pub fn build(self) -> DocumentFactory {
        self.factory
    }
}
