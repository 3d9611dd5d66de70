//! SurrealDB document store
//!
//! Each collection is a SurrealDB table. Record keys are the 32-hex document
//! keys; reads project the key back into a plain string `id` field so callers
//! never see `RecordId` values.

use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use super::{
    Collection, Document, DocumentStore, ID_FIELD, StoreError, StoreResult, check_filter_field,
    new_document_key, parse_document_key,
};

const SELECT_ALL: &str = "SELECT *, record::id(id) AS id FROM type::table($table)";

/// Connection settings for [`SurrealStore::connect`]
#[derive(Debug, Clone)]
pub struct SurrealConfig {
    /// `ws://`, `wss://`, `http://` or `https://` endpoint
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials, when the server requires them
    pub credentials: Option<(String, String)>,
}

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
}

impl SurrealStore {
    /// Open the connection, sign in and select namespace/database
    pub async fn connect(config: &SurrealConfig) -> StoreResult<Self> {
        let db = any::connect(config.url.as_str()).await?;

        if let Some((username, password)) = &config.credentials {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connected to SurrealDB"
        );

        Ok(Self { db })
    }
}

fn into_document(value: Value) -> StoreResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Decode(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// `SELECT ... WHERE a = $f0 AND b = $f1 LIMIT 1` for the given filter
fn find_one_query(filter: &Document) -> StoreResult<String> {
    let mut query = String::from(SELECT_ALL);
    for (index, field) in filter.keys().enumerate() {
        check_filter_field(field)?;
        query.push_str(if index == 0 { " WHERE " } else { " AND " });
        query.push_str(&format!("{field} = $f{index}"));
    }
    query.push_str(" LIMIT 1");
    Ok(query)
}

#[async_trait]
impl DocumentStore for SurrealStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        let query = find_one_query(&filter)?;
        let mut request = self.db.query(query).bind(("table", collection.name()));
        for (index, (_, value)) in filter.into_iter().enumerate() {
            request = request.bind((format!("f{index}"), value));
        }

        let rows: Vec<Value> = request.await?.check()?.take(0)?;
        rows.into_iter().next().map(into_document).transpose()
    }

    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let rows: Vec<Value> = self
            .db
            .query(SELECT_ALL)
            .bind(("table", collection.name()))
            .await?
            .check()?
            .take(0)?;
        rows.into_iter().map(into_document).collect()
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> StoreResult<String> {
        document.remove(ID_FIELD);
        let key = new_document_key();

        self.db
            .query("CREATE type::thing($table, $key) CONTENT $content RETURN NONE")
            .bind(("table", collection.name()))
            .bind(("key", key.clone()))
            .bind(("content", Value::Object(document)))
            .await?
            .check()?;

        Ok(key)
    }

    async fn delete_one(&self, collection: Collection, id: &str) -> StoreResult<u64> {
        let key = parse_document_key(id)?;

        let removed: Vec<Value> = self
            .db
            .query("DELETE type::thing($table, $key) RETURN BEFORE")
            .bind(("table", collection.name()))
            .bind(("key", key))
            .await?
            .check()?
            .take(0)?;

        Ok(removed.len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db.health().await?;
        Ok(())
    }
}
