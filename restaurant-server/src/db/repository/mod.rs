//! Repository Module
//!
//! Typed access to the five collections on top of a [`DocumentStore`].
//! Every method is exactly one store call.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod table_request;
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use table_request::TableRequestRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Document, SharedStore, StoreError, StoreResult};

/// Base repository holding the shared store handle
#[derive(Clone)]
pub struct BaseRepository {
    store: SharedStore,
}

impl BaseRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

/// Decode a stored document into its model
pub(crate) fn decode<T: DeserializeOwned>(document: Document) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// Decode every document of a listing
pub(crate) fn decode_all<T: DeserializeOwned>(documents: Vec<Document>) -> StoreResult<Vec<T>> {
    documents.into_iter().map(decode).collect()
}

/// Encode a create payload as a document
pub(crate) fn encode<T: Serialize>(value: &T) -> StoreResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::Decode("payload is not a JSON object".to_string())),
    }
}
