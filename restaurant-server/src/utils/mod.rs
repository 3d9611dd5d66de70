//! Utility module: error re-exports, logging, request validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
