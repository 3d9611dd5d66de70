//! Menu Item Repository

use shared::models::MenuItem;

use super::{BaseRepository, decode_all};
use crate::db::{Collection, SharedStore, StoreResult};

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> StoreResult<Vec<MenuItem>> {
        decode_all(self.base.store().find_all(Collection::Menu).await?)
    }
}
