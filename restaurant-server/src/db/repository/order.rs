//! Order Repository

use shared::models::{Order, OrderCreate};

use super::{BaseRepository, decode_all, encode};
use crate::db::{Collection, SharedStore, StoreResult};

const COLLECTION: Collection = Collection::Orders;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all orders
    pub async fn find_all(&self) -> StoreResult<Vec<Order>> {
        decode_all(self.base.store().find_all(COLLECTION).await?)
    }

    /// Insert an order, returning its id
    pub async fn create(&self, data: OrderCreate) -> StoreResult<String> {
        self.base
            .store()
            .insert_one(COLLECTION, encode(&data)?)
            .await
    }

    /// Delete an order; `false` when nothing matched
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.base.store().delete_one(COLLECTION, id).await?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StoreError};
    use serde_json::json;
    use std::sync::Arc;

    fn soup_order() -> OrderCreate {
        OrderCreate {
            requester_name: "bob".into(),
            dishes: vec![json!("soup")],
            total_price: 9.5,
        }
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let repo = OrderRepository::new(Arc::new(MemoryStore::new()));
        let id = repo.create(soup_order()).await.unwrap();

        let orders = repo.find_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(orders[0].requester_name, "bob");
        assert_eq!(orders[0].total_price, 9.5);

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_error() {
        let repo = OrderRepository::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            repo.delete("xyz").await,
            Err(StoreError::MalformedId(_))
        ));
    }
}
