use std::sync::Arc;

use crate::core::{Config, Result, StoreBackend};
use crate::db::{MemoryStore, SharedStore, SurrealStore};

/// Server state shared by every request
///
/// Cloning is cheap: the config and the store sit behind `Arc`s. The store
/// is opened once at startup and never torn down while serving.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: SharedStore,
}

impl ServerState {
    /// Build state around an existing store (tests inject doubles here)
    pub fn new(config: Config, store: SharedStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Open the configured store
    ///
    /// A store that cannot be reached is a startup failure.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: SharedStore = match &config.store {
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store, data is lost on exit");
                Arc::new(MemoryStore::new())
            }
            StoreBackend::Surreal(surreal) => Arc::new(SurrealStore::connect(surreal).await?),
        };

        store.ping().await?;

        Ok(Self::new(config.clone(), store))
    }
}
