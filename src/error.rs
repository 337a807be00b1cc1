//! Error types for the Corvina library.
//!
//! All fallible operations return [`Result`], with [`CorvinaError`] as the
//! error type. The enum uses the `thiserror` crate for automatic `Error`
//! trait implementation and provides convenient constructor methods for
//! creating specific error types.
//!
//! # Examples
//!
//! ```
//! use corvina::error::{CorvinaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorvinaError::schema("Invalid schema"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

use crate::value::field_value::ValueKind;

/// The main error type for Corvina operations.
#[derive(Error, Debug)]
pub enum CorvinaError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Schema-related errors (missing descriptors, duplicate fields, etc.)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Field-related errors (kind or multiplicity misuse)
    #[error("Field error: {0}")]
    Field(String),

    /// A value could not be coerced to the kind declared by its field
    /// descriptor. Carries the offending field name, the raw wire value and
    /// the target kind. Always fatal for the enclosing serialize/deserialize
    /// call.
    #[error("Unable to coerce field '{field}' value '{value}' to kind [{target}]")]
    Coercion {
        /// Name of the field whose value failed to coerce.
        field: String,
        /// Textual rendering of the raw value.
        value: String,
        /// The kind the value was being coerced to.
        target: ValueKind,
    },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CorvinaError.
pub type Result<T> = std::result::Result<T, CorvinaError>;

impl CorvinaError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        CorvinaError::Schema(msg.into())
    }

    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        CorvinaError::Field(msg.into())
    }

    /// Create a new coercion error.
    pub fn coercion<F: Into<String>, V: Into<String>>(
        field: F,
        value: V,
        target: ValueKind,
    ) -> Self {
        CorvinaError::Coercion {
            field: field.into(),
            value: value.into(),
            target,
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CorvinaError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CorvinaError::Other(msg.into())
    }
}
