#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use restaurant_server::db::{Collection, Document, StoreError, StoreResult};
use restaurant_server::{Config, DocumentStore, HttpService, MemoryStore, ServerState};
use serde_json::Value;
use tower::ServiceExt;

/// Full HTTP stack over a fresh in-memory store
pub fn test_app() -> (HttpService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = ServerState::new(Config::in_memory(), store.clone());
    (HttpService::new(state), store)
}

/// Full HTTP stack over a store that fails every call
pub fn failing_app() -> HttpService {
    HttpService::new(ServerState::new(Config::in_memory(), Arc::new(FailingStore)))
}

/// Store double standing in for a lost database connection
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database("connection refused".into())
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_one(&self, _: Collection, _: Document) -> StoreResult<Option<Document>> {
        Err(unavailable())
    }

    async fn find_all(&self, _: Collection) -> StoreResult<Vec<Document>> {
        Err(unavailable())
    }

    async fn insert_one(&self, _: Collection, _: Document) -> StoreResult<String> {
        Err(unavailable())
    }

    async fn delete_one(&self, _: Collection, _: &str) -> StoreResult<u64> {
        Err(unavailable())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unavailable())
    }
}

/// Full HTTP stack over a store that panics on every call
pub fn panicking_app() -> HttpService {
    HttpService::new(ServerState::new(Config::in_memory(), Arc::new(PanicStore)))
}

/// Store double whose every call panics, for the uncaught-failure path
pub struct PanicStore;

#[async_trait]
impl DocumentStore for PanicStore {
    async fn find_one(&self, _: Collection, _: Document) -> StoreResult<Option<Document>> {
        panic!("find_one exploded")
    }

    async fn find_all(&self, _: Collection) -> StoreResult<Vec<Document>> {
        panic!("find_all exploded")
    }

    async fn insert_one(&self, _: Collection, _: Document) -> StoreResult<String> {
        panic!("insert_one exploded")
    }

    async fn delete_one(&self, _: Collection, _: &str) -> StoreResult<u64> {
        panic!("delete_one exploded")
    }

    async fn ping(&self) -> StoreResult<()> {
        panic!("ping exploded")
    }
}

/// Send a request with an optional JSON body, returning status and parsed body
pub async fn send(
    app: &HttpService,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    into_parts(app, request).await
}

/// Send an `application/x-www-form-urlencoded` body
pub async fn send_form(app: &HttpService, uri: &str, form: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    into_parts(app, request).await
}

/// Send a raw body with the given content type
pub async fn send_raw(
    app: &HttpService,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    into_parts(app, request).await
}

async fn into_parts(app: &HttpService, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
