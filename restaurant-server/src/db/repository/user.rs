//! User Repository

use serde_json::Value;
use shared::models::{User, UserCreate};

use super::{BaseRepository, decode, encode};
use crate::db::{Collection, Document, SharedStore, StoreResult};

const COLLECTION: Collection = Collection::Users;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find the user whose username and password both match exactly
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<User>> {
        let mut filter = Document::new();
        filter.insert("username".into(), Value::from(username));
        filter.insert("password".into(), Value::from(password));
        self.base
            .store()
            .find_one(COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let mut filter = Document::new();
        filter.insert("username".into(), Value::from(username));
        self.base
            .store()
            .find_one(COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    /// Insert a user; uniqueness is the caller's concern
    pub async fn create(&self, data: UserCreate) -> StoreResult<String> {
        self.base
            .store()
            .insert_one(COLLECTION, encode(&data)?)
            .await
    }
}
