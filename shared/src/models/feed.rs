//! Public order feed

use super::Order;
use serde::{Deserialize, Serialize};

/// Public order feed with server-reported aggregates
///
/// `total` and `total_today` are counted by the server, never derived
/// locally from `orders`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Most recent orders
    pub orders: Vec<Order>,
    /// All-time order count
    pub total: u64,
    /// Orders placed today
    pub total_today: u64,
}
