//! Error handling
//!
//! Handlers return [`AppResult`]; the shared [`AppError`] renders itself as
//! `{ "error": ..., "code": ... }`. Store failures convert here.
//!
//! | store error | code | status |
//! |-------------|------|--------|
//! | `MalformedId` | `MalformedId` | 500 |
//! | anything else | `DatabaseError` | 500 |

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::StoreError;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(id) => {
                AppError::with_message(ErrorCode::MalformedId, format!("Malformed id: {id}"))
                    .with_detail("id", id)
            }
            other => AppError::database(other.to_string()),
        }
    }
}
