use std::any::Any;
use std::net::SocketAddr;

use axum::{
    Router,
    body::Body,
    http::{Request, Uri},
    middleware,
    response::{IntoResponse, Response},
};
use tower::Service;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// Access log middleware
async fn log_request(request: Request<Body>, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Unmatched routes, and known paths hit with the wrong method
async fn not_found(uri: Uri) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("Not Found - {uri}"))
}

/// Panics inside a handler become a plain 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::internal(format!("Handler panicked: {detail}")).into_response()
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::tables::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::table_requests::router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Router bound to its state, with the middleware stack applied
#[derive(Clone)]
pub struct HttpService {
    router: Router,
}

impl HttpService {
    pub fn new(state: ServerState) -> Self {
        let router = build_app()
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_request));

        Self { router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run one request through the full stack without a socket
    pub async fn oneshot(&self, request: Request<Body>) -> Response {
        let mut service = self.router.clone();
        match service.call(request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        }
    }

    /// Bind and serve until `shutdown_signal` resolves
    pub async fn start_server<F>(&self, addr: SocketAddr, shutdown_signal: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}
