//! Restaurant Server
//!
//! HTTP API over a restaurant's users, menu, dining tables, orders and
//! table requests. Every route validates its input, makes one store call
//! and maps the outcome to a status code and JSON body.
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── db/            # store trait, SurrealDB and in-memory stores, repositories
//! ├── api/           # routers and handlers
//! ├── services/      # HTTP stack
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::{DocumentStore, MemoryStore, SharedStore, SurrealStore};
pub use services::{HttpService, build_app};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and start logging
///
/// Configuration errors are returned before any logging is set up, so the
/// caller prints them itself.
pub fn setup_environment() -> crate::core::Result<Config> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv_error = env_file_error(dotenv::dotenv());

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, "Ignoring unreadable .env file");
    }
    Ok(config)
}

/// A `.env` that exists but cannot be read or parsed; absence is not an error
fn env_file_error<T>(result: dotenv::Result<T>) -> Option<dotenv::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

pub fn print_banner() {
    println!(
        r#"
    ____            __                              __
   / __ \___  _____/ /_____ ___  ___________ _____  / /_
  / /_/ / _ \/ ___/ __/ __ `/ / / / ___/ __ `/ __ \/ __/
 / _, _/  __(__  ) /_/ /_/ / /_/ / /  / /_/ / / / / /_
/_/ |_|\___/____/\__/\__,_/\__,_/_/   \__,_/_/ /_/\__/
    "#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_env_file_is_not_reported() {
        let missing = dotenv::Error::Io(io::Error::new(io::ErrorKind::NotFound, "no .env"));
        assert!(env_file_error::<()>(Err(missing)).is_none());
        assert!(env_file_error(Ok(())).is_none());
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let malformed = dotenv::Error::LineParse("STORE_URL ws://db".into(), 9);
        assert!(env_file_error::<()>(Err(malformed)).is_some());

        let unreadable =
            dotenv::Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(env_file_error::<()>(Err(unreadable)).is_some());
    }
}
