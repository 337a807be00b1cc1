//! Backend adapter seam.
//!
//! The marshalling layer does not talk to any search engine itself; it
//! produces and consumes [`WireDocument`]s. A concrete adapter (network
//! client, query builder, index lifecycle) implements [`SearchBackend`] and
//! is chosen explicitly at process start; there is no runtime discovery
//! mechanism.

use crate::document::document::Document;
use crate::document::update::Update;
use crate::error::Result;
use crate::schema::schema::DocumentFactory;

/// The status of a backend, as reported by [`SearchBackend::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// The backend is reachable and serving.
    Up,
    /// The backend is unreachable or failing.
    Down,
}

/// The contract a concrete search-engine adapter fulfills.
///
/// Implementations serialize documents with
/// [`serialize_batch`](crate::marshal::serializer::serialize_batch) before
/// writing and rebuild results with
/// [`deserialize`](crate::marshal::deserializer::deserialize) after reading.
/// Retry, timeout and commit semantics live entirely behind this trait.
pub trait SearchBackend {
    /// Index a batch of documents.
    fn index(&mut self, docs: &[Document]) -> Result<()>;

    /// Delete a document by id.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Apply a partial update.
    fn update(&mut self, update: &Update, factory: &DocumentFactory) -> Result<()>;

    /// Fetch documents by id.
    fn get(&self, ids: &[&str], factory: &DocumentFactory) -> Result<Vec<Document>>;

    /// Report the backend status.
    fn status(&self) -> BackendStatus;
}
