//! In-memory document store
//!
//! Same contract as the SurrealDB store, kept in a process-local map.
//! Used by the test suite and for local runs with `STORE_URL=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use super::{
    Collection, Document, DocumentStore, ID_FIELD, StoreResult, check_filter_field,
    new_document_key, parse_document_key,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently in a collection
    pub fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field, expected)| document.get(field) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        for field in filter.keys() {
            check_filter_field(field)?;
        }
        let guard = self.collections.read();
        Ok(guard
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)))
            .cloned())
    }

    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .read()
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> StoreResult<String> {
        let key = new_document_key();
        document.insert(ID_FIELD.to_string(), Value::String(key.clone()));
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .push(document);
        Ok(key)
    }

    async fn delete_one(&self, collection: Collection, id: &str) -> StoreResult<u64> {
        let key = Value::String(parse_document_key(id)?);
        let mut guard = self.collections.write();
        let Some(docs) = guard.get_mut(&collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| doc.get(ID_FIELD) == Some(&key)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreError;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_overrides_client_id() {
        let store = MemoryStore::new();
        let id = store
            .insert_one(Collection::Orders, doc(json!({"id": "mine", "requesterName": "bob"})))
            .await
            .unwrap();

        let all = store.find_all(Collection::Orders).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["id"], json!(id));
        assert_ne!(id, "mine");
    }

    #[tokio::test]
    async fn test_find_one_matches_every_filter_field() {
        let store = MemoryStore::new();
        store
            .insert_one(Collection::Users, doc(json!({"username": "alice", "password": "p1"})))
            .await
            .unwrap();

        let hit = store
            .find_one(Collection::Users, doc(json!({"username": "alice", "password": "p1"})))
            .await
            .unwrap();
        assert!(hit.is_some());

        let miss = store
            .find_one(Collection::Users, doc(json!({"username": "alice", "password": "P1"})))
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        store
            .insert_one(Collection::Orders, doc(json!({"requesterName": "bob"})))
            .await
            .unwrap();
        assert_eq!(store.count(Collection::Orders), 1);
        assert!(store.find_all(Collection::TableRequests).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_once_then_nothing() {
        let store = MemoryStore::new();
        let id = store
            .insert_one(Collection::TableRequests, doc(json!({"tableNumber": 4})))
            .await
            .unwrap();

        assert_eq!(store.delete_one(Collection::TableRequests, &id).await.unwrap(), 1);
        assert_eq!(store.delete_one(Collection::TableRequests, &id).await.unwrap(), 0);
        assert_eq!(store.count(Collection::TableRequests), 0);
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let store = MemoryStore::new();
        let result = store.delete_one(Collection::Orders, "12345").await;
        assert!(matches!(result, Err(StoreError::MalformedId(_))));
    }

    #[tokio::test]
    async fn test_find_one_rejects_bad_field_name() {
        let store = MemoryStore::new();
        let result = store
            .find_one(Collection::Users, doc(json!({"user name": "x"})))
            .await;
        assert!(matches!(result, Err(StoreError::InvalidFilter(_))));
    }
}
