//! Unified error system for the restaurant API
//!
//! - [`ErrorCode`]: numeric codes for every failure the API reports
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`]: error carried through handlers, rendered as [`ErrorBody`]
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, not found)
//! - 1xxx: Account errors (credentials, username conflicts)
//! - 4xxx: Order errors
//! - 7xxx: Table errors
//! - 9xxx: System errors (store, configuration)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::RequiredField, "requesterName is required");
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
