//! Server-assigned order records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status, authoritative values come from the server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Created,
    Done,
}

impl OrderStatus {
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Server-assigned order record
///
/// Holds ingredient ids, not full ingredient objects; the view layer joins
/// them against the catalog. Never mutated locally, only replaced wholesale
/// on refetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (assigned by server)
    #[serde(rename = "_id")]
    pub id: String,
    /// Ordered ingredient-id sequence as submitted
    pub ingredients: Vec<String>,
    /// Order status
    pub status: OrderStatus,
    /// Human-readable name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Sequential display number
    pub number: i64,
}
