//! Table Request Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table number as sent by the front end
///
/// JSON clients send a number, HTML forms send the label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableNumber {
    Number(i64),
    Label(String),
}

impl TableNumber {
    /// Zero and the empty label count as "not given"
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Label(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// Table reservation request (collection `table_requests`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    pub id: String,
    pub requester_name: String,
    pub table_number: TableNumber,
}

/// Create table request payload (already validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequestCreate {
    pub requester_name: String,
    pub table_number: TableNumber,
}
