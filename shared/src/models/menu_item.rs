//! Menu Item Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dish on the menu (collection `menu`)
///
/// The menu is populated outside this service, so only `id` is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
