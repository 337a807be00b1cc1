//! Value types shared by documents, schemas and the wire layer.

pub mod field_value;
pub mod geo;

// Re-export commonly used types
pub use field_value::{FieldValue, ValueKind};
pub use geo::GeoPoint;
