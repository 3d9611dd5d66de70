//! Database Module
//!
//! The store boundary: five collections of JSON documents behind the
//! [`DocumentStore`] trait. [`SurrealStore`] talks to a SurrealDB server,
//! [`MemoryStore`] keeps everything in process.
//!
//! Identifiers are assigned by the store on insert: a UUIDv4 rendered as 32
//! lowercase hex digits. Anything that does not parse as a UUID is rejected
//! with [`StoreError::MalformedId`] before the store is touched.

pub mod memory;
pub mod repository;
pub mod surreal;

pub use memory::MemoryStore;
pub use surreal::SurrealStore;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// A stored document: a flat JSON object
pub type Document = Map<String, Value>;

/// Field holding the store-assigned identifier on documents read back
pub const ID_FIELD: &str = "id";

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed document id: {0}")]
    MalformedId(String),

    #[error("Invalid filter field: {0}")]
    InvalidFilter(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Document decode error: {0}")]
    Decode(String),
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Logical collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Orders,
    Tables,
    Menu,
    TableRequests,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Orders,
        Collection::Tables,
        Collection::Menu,
        Collection::TableRequests,
    ];

    /// Collection name in the store
    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Orders => "orders",
            Collection::Tables => "tables",
            Collection::Menu => "menu",
            Collection::TableRequests => "table_requests",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operations the HTTP layer needs from a document store
///
/// Each call is a single round trip; nothing here composes operations or
/// offers transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document whose top-level fields equal every entry of `filter`
    async fn find_one(&self, collection: Collection, filter: Document)
    -> StoreResult<Option<Document>>;

    /// Every document in the collection
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    /// Insert a document and return the identifier the store assigned
    async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String>;

    /// Delete by identifier, returning how many documents were removed (0 or 1)
    async fn delete_one(&self, collection: Collection, id: &str) -> StoreResult<u64>;

    /// Round trip to the store without touching data
    async fn ping(&self) -> StoreResult<()>;
}

/// Store handle shared by every request
pub type SharedStore = Arc<dyn DocumentStore>;

/// Generate a fresh document key
pub fn new_document_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Normalize a client-supplied identifier to the stored key form
pub fn parse_document_key(id: &str) -> StoreResult<String> {
    Uuid::try_parse(id)
        .map(|uuid| uuid.simple().to_string())
        .map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Filter field names end up in query text, so only plain identifiers pass
pub(crate) fn check_filter_field(field: &str) -> StoreResult<()> {
    let mut chars = field.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(StoreError::InvalidFilter(field.to_string()))
    }
}
