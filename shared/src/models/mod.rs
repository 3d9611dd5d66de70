//! Data models
//!
//! Documents as stored in the five collections. Every document carries the
//! store-assigned `id`; free-form collections (menu, tables) keep unknown
//! fields in a flattened JSON map.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod table_request;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use table_request::*;
pub use user::*;
