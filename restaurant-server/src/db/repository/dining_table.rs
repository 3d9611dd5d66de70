//! Dining Table Repository

use shared::models::DiningTable;

use super::{BaseRepository, decode_all};
use crate::db::{Collection, SharedStore, StoreResult};

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all dining tables
    pub async fn find_all(&self) -> StoreResult<Vec<DiningTable>> {
        decode_all(self.base.store().find_all(Collection::Tables).await?)
    }
}
