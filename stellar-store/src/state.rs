//! State shape and pure transitions
//!
//! `StoreState` is the single record owned by the store for the lifetime
//! of a page session. Synchronous transitions live here as plain methods;
//! the `Store` wrapper serializes access and runs the asynchronous
//! procedures.

use serde::{Deserialize, Serialize};
use shared::{Cart, Ingredient, Order, User};

/// Per-procedure error slots
///
/// The authentication procedures surface their message through
/// `StoreState::error_text` for display; these slots keep the last failure
/// of every other procedure so the UI can tell "failed" apart from "still
/// loading" once the in-flight flag clears. Each slot resets on the next
/// successful run of its procedure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProcedureErrors {
    pub catalog: Option<String>,
    pub order: Option<String>,
    pub feed: Option<String>,
    pub user_orders: Option<String>,
    pub profile: Option<String>,
}

/// The centralized storefront state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreState {
    /// Ingredient catalog, replaced wholesale on refetch
    pub ingredients: Vec<Ingredient>,
    /// Shared loading flag for catalog/auth/feed/profile procedures
    pub loading: bool,
    /// Modal-open indicator
    pub is_modal_open: bool,
    /// Error message from the last failed authentication procedure
    pub error_text: String,
    /// Initialization-complete indicator
    pub is_init: bool,
    /// Public feed orders
    pub feed_orders: Vec<Order>,
    /// Authenticated user's orders; `None` until fetched
    pub user_orders: Option<Vec<Order>>,
    /// Result of the last successful order submission
    pub order_receipt: Option<Order>,
    /// Order-submission in-flight flag
    pub order_request: bool,
    /// All-time order count, server-reported
    pub total_orders: u64,
    /// Today's order count, server-reported
    pub orders_today: u64,
    /// Authentication indicator
    pub is_authenticated: bool,
    /// In-progress order
    pub cart: Cart,
    /// Current user; empty strings when unauthenticated
    pub user: User,
    /// Per-procedure error slots
    pub errors: ProcedureErrors,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Synchronous transitions ==========

    pub fn open_modal(&mut self) {
        self.is_modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_modal_open = false;
    }

    /// Clear the submission in-flight flag and the submission result
    pub fn close_order_request(&mut self) {
        self.order_request = false;
        self.order_receipt = None;
    }

    pub fn clear_feed_orders(&mut self) {
        self.feed_orders.clear();
    }

    pub fn clear_user_orders(&mut self) {
        self.user_orders = None;
    }

    pub fn mark_initialized(&mut self) {
        self.is_init = true;
    }

    pub fn set_error_text(&mut self, text: impl Into<String>) {
        self.error_text = text.into();
    }

    pub fn clear_error_text(&mut self) {
        self.error_text.clear();
    }

    /// Reset identity to the unauthenticated placeholder
    pub(crate) fn reset_user(&mut self) {
        self.user = User::default();
        self.is_authenticated = false;
    }
}
