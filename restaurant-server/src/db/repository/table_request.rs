//! Table Request Repository

use shared::models::{TableRequest, TableRequestCreate};

use super::{BaseRepository, decode_all, encode};
use crate::db::{Collection, SharedStore, StoreResult};

const COLLECTION: Collection = Collection::TableRequests;

#[derive(Clone)]
pub struct TableRequestRepository {
    base: BaseRepository,
}

impl TableRequestRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all table requests
    pub async fn find_all(&self) -> StoreResult<Vec<TableRequest>> {
        decode_all(self.base.store().find_all(COLLECTION).await?)
    }

    /// Insert a table request, returning its id
    pub async fn create(&self, data: TableRequestCreate) -> StoreResult<String> {
        self.base
            .store()
            .insert_one(COLLECTION, encode(&data)?)
            .await
    }

    /// Delete a table request; `false` when nothing matched
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.base.store().delete_one(COLLECTION, id).await?;
        Ok(removed > 0)
    }
}
