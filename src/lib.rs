//! # Corvina
//!
//! A typed, context-aware document marshalling library for search backends.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Strongly-typed document model with per-context values
//! - Lossless round-tripping through a flat, backend-neutral wire form
//! - Per-use-case type resolution for complex fields
//! - Partial-update (set/add/remove) wire serialization
//! - Parallel batch serialization
//!
//! ## Example
//!
//! ```
//! use corvina::marshal::{deserialize, serialize};
//! use corvina::schema::field::FieldDescriptor;
//! use corvina::schema::schema::DocumentFactory;
//! use corvina::value::field_value::{FieldValue, ValueKind};
//!
//! let factory = DocumentFactory::builder("product")
//!     .add_field(FieldDescriptor::new("title", ValueKind::Text))
//!     .unwrap()
//!     .build();
//!
//! let title = factory.get_field("title").unwrap().clone();
//! let mut doc = factory.create_doc("p-1");
//! doc.set_value(&title, FieldValue::Text("Hello".to_string())).unwrap();
//!
//! let wire = serialize(&doc).unwrap();
//! let restored = deserialize(&wire, &factory, None).unwrap();
//! assert_eq!(restored.get_value("title"), doc.get_value("title"));
//! ```

pub mod backend;
pub mod document;
pub mod error;
pub mod marshal;
pub mod schema;
pub mod value;

pub mod prelude {
    //! Convenience re-exports of the most commonly used types.

    pub use crate::document::document::{Document, ValueSlot};
    pub use crate::document::update::{Update, UpdateOperation};
    pub use crate::error::{CorvinaError, Result};
    pub use crate::marshal::wire::{WireDocument, WireValue};
    pub use crate::marshal::{deserialize, serialize, serialize_batch, serialize_update};
    pub use crate::schema::field::{FieldDescriptor, UseCase};
    pub use crate::schema::schema::DocumentFactory;
    pub use crate::value::field_value::{FieldValue, ValueKind};
    pub use crate::value::geo::GeoPoint;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
