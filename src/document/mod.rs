//! Document module for Corvina.
//!
//! This module provides the structured, schema-bound document model and the
//! partial-update specification that the marshalling layer operates on.

#[allow(clippy::module_inception)]
pub mod document;
pub mod update;

// Re-export commonly used types
pub use document::{Document, ValueSlot};
pub use update::{Update, UpdateEntry, UpdateOperation};
