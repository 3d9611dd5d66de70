//! Core module: configuration, shared state, server lifecycle
//!
//! - [`Config`] - settings read from the environment
//! - [`ServerState`] - store handle and config shared by every request
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup and serve failures

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, StoreBackend};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
