//! Marshalling module for Corvina.
//!
//! Bidirectional conversion between the structured document model and the
//! flat, backend-neutral wire representation:
//!
//! - [`field_name`]: wire naming conventions and its exact inverse parser
//! - [`coerce`]: per-kind value coercion in both directions
//! - [`serializer`]: document and update serialization
//! - [`deserializer`]: wire document reconstruction
//!
//! All operations are pure and stateless beyond their inputs; the schema is
//! read-only during marshalling and may be shared across threads.

pub mod coerce;
pub mod deserializer;
pub mod field_name;
pub mod serializer;
pub mod wire;

// Re-export commonly used types and entry points
pub use deserializer::deserialize;
pub use serializer::{serialize, serialize_batch, serialize_update};
pub use wire::{WireDocument, WireValue};
