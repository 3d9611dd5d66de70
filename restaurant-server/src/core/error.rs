use thiserror::Error;

use crate::db::StoreError;

/// Failures that stop the process: bad configuration, an unreachable store,
/// a port that cannot be bound
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
