//! Schema module for Corvina.
//!
//! This module provides field descriptors and the document factory that
//! owns them: the authority for what fields exist on a document type and
//! what kinds their values must take.

pub mod field;
#[allow(clippy::module_inception)]
pub mod schema;

// Re-export commonly used types
pub use field::{ComplexKinds, FieldDescriptor, UseCase};
pub use schema::{DocumentFactory, DocumentFactoryBuilder};
