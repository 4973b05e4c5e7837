//! Store construction, synchronous operations, and selectors

use crate::draft::{DraftError, DraftStore};
use crate::ids::{InstanceIds, UuidInstanceIds};
use crate::state::{ProcedureErrors, StoreState};
use parking_lot::RwLock;
use shared::{Cart, CartIngredient, Ingredient, Order, User};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use stellar_client::BurgerApi;
use tracing::debug;

// ============================================================================
// Request Sequencing
// ============================================================================

/// Monotonic request sequence for one procedure family
///
/// Overlapping dispatches of the same procedure are not deduplicated; each
/// runs its own start/settle cycle. The ticket lets a resolution check
/// whether a newer request for the same resource was issued after it
/// started, in which case its data merge is discarded as stale.
#[derive(Debug, Default)]
pub(crate) struct RequestSeq {
    issued: AtomicU64,
}

impl RequestSeq {
    /// Issue a ticket for a new dispatch
    pub(crate) fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether no newer dispatch has been issued since this ticket
    pub(crate) fn is_latest(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

/// One sequence per procedure family, plus the in-flight counters behind
/// the shared loading flag and the order-request flag. Counters keep
/// overlapping dispatches from stranding a flag.
#[derive(Debug, Default)]
pub(crate) struct Procedures {
    pub(crate) catalog: RequestSeq,
    pub(crate) order: RequestSeq,
    pub(crate) login: RequestSeq,
    pub(crate) register: RequestSeq,
    pub(crate) current_user: RequestSeq,
    pub(crate) feed: RequestSeq,
    pub(crate) user_orders: RequestSeq,
    pub(crate) logout: RequestSeq,
    pub(crate) profile: RequestSeq,
    loading_inflight: AtomicU64,
    order_inflight: AtomicU64,
}

// ============================================================================
// Store
// ============================================================================

/// The order state store
///
/// Owns the state container exclusively; consumers read through selectors
/// and mutate only by dispatching operations. One instance per application
/// session, threaded to consumers by the caller.
pub struct Store<A: BurgerApi> {
    pub(crate) api: A,
    ids: Box<dyn InstanceIds>,
    pub(crate) state: RwLock<StoreState>,
    pub(crate) procedures: Procedures,
}

impl<A: BurgerApi> Store<A> {
    /// Create a store over the given API collaborator with random
    /// instance ids
    pub fn new(api: A) -> Self {
        Self::with_ids(api, Box::new(UuidInstanceIds))
    }

    /// Create a store with an injected instance-id generator
    pub fn with_ids(api: A, ids: Box<dyn InstanceIds>) -> Self {
        Self {
            api,
            ids,
            state: RwLock::new(StoreState::new()),
            procedures: Procedures::default(),
        }
    }

    // ========== In-flight accounting ==========

    pub(crate) fn begin_loading(&self) {
        self.procedures.loading_inflight.fetch_add(1, Ordering::SeqCst);
        self.state.write().loading = true;
    }

    pub(crate) fn settle_loading(&self) {
        let left = self.procedures.loading_inflight.fetch_sub(1, Ordering::SeqCst) - 1;
        if left == 0 {
            self.state.write().loading = false;
        }
    }

    pub(crate) fn begin_order_request(&self) {
        self.procedures.order_inflight.fetch_add(1, Ordering::SeqCst);
        self.state.write().order_request = true;
    }

    pub(crate) fn settle_order_request(&self) {
        let left = self.procedures.order_inflight.fetch_sub(1, Ordering::SeqCst) - 1;
        if left == 0 {
            self.state.write().order_request = false;
        }
    }

    // ========== Synchronous operations ==========

    pub fn open_modal(&self) {
        self.state.write().open_modal();
    }

    pub fn close_modal(&self) {
        self.state.write().close_modal();
    }

    /// Add an ingredient to the cart
    ///
    /// A bun replaces the bun slot, anything else is appended to the end of
    /// the filling sequence under a freshly generated instance id, which is
    /// returned so callers can address the entry later.
    pub fn add_ingredient(&self, ingredient: Ingredient) -> String {
        let instance_id = self.ids.next_id();
        let item = CartIngredient::new(ingredient, instance_id.clone());
        self.state.write().cart.add(item);
        instance_id
    }

    /// Remove the cart entry with the given instance id; no-op when absent
    pub fn delete_ingredient(&self, instance_id: &str) {
        self.state.write().cart.remove(instance_id);
    }

    /// Swap the entry with its predecessor; boundary and missing ids are
    /// no-ops returning `false`
    pub fn move_ingredient_up(&self, instance_id: &str) -> bool {
        self.state.write().cart.move_up(instance_id)
    }

    /// Swap the entry with its successor; boundary and missing ids are
    /// no-ops returning `false`
    pub fn move_ingredient_down(&self, instance_id: &str) -> bool {
        self.state.write().cart.move_down(instance_id)
    }

    /// Clear the submission in-flight flag and the submission result
    pub fn close_order_request(&self) {
        self.state.write().close_order_request();
    }

    pub fn clear_feed_orders(&self) {
        self.state.write().clear_feed_orders();
    }

    pub fn clear_user_orders(&self) {
        self.state.write().clear_user_orders();
    }

    pub fn mark_initialized(&self) {
        self.state.write().mark_initialized();
    }

    pub fn set_error_text(&self, text: impl Into<String>) {
        self.state.write().set_error_text(text);
    }

    pub fn clear_error_text(&self) {
        self.state.write().clear_error_text();
    }

    // ========== Draft persistence bridge ==========

    /// Stash the current cart before an authentication redirect
    pub fn stash_draft(&self, drafts: &dyn DraftStore) -> Result<(), DraftError> {
        let cart = self.state.read().cart.clone();
        drafts.stash(&cart)
    }

    /// Restore a stashed cart once, after authentication succeeds
    ///
    /// The stashed bun fills the slot only when none is present; stashed
    /// fillings whose catalog id already sits in the cart are skipped.
    /// Returns whether a draft was consumed. Does nothing while
    /// unauthenticated so the blob stays put for the post-login visit.
    pub fn restore_draft(&self, drafts: &dyn DraftStore) -> Result<bool, DraftError> {
        if !self.state.read().is_authenticated {
            return Ok(false);
        }

        let Some(saved) = drafts.take()? else {
            return Ok(false);
        };

        let mut state = self.state.write();
        if state.cart.bun.is_none() {
            state.cart.bun = saved.bun;
        }

        let existing: HashSet<String> = state
            .cart
            .fillings
            .iter()
            .map(|item| item.catalog_id().to_string())
            .collect();
        for item in saved.fillings {
            if !existing.contains(item.catalog_id()) {
                state.cart.fillings.push(item);
            }
        }

        debug!("restored stashed cart draft");
        Ok(true)
    }

    // ========== Selectors ==========

    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.state.read().ingredients.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn order_receipt(&self) -> Option<Order> {
        self.state.read().order_receipt.clone()
    }

    pub fn is_order_requested(&self) -> bool {
        self.state.read().order_request
    }

    pub fn feed_orders(&self) -> Vec<Order> {
        self.state.read().feed_orders.clone()
    }

    pub fn user_orders(&self) -> Option<Vec<Order>> {
        self.state.read().user_orders.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().is_init
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.read().is_modal_open
    }

    pub fn error_text(&self) -> String {
        self.state.read().error_text.clone()
    }

    pub fn total_orders(&self) -> u64 {
        self.state.read().total_orders
    }

    pub fn orders_today(&self) -> u64 {
        self.state.read().orders_today
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    pub fn cart(&self) -> Cart {
        self.state.read().cart.clone()
    }

    pub fn user(&self) -> User {
        self.state.read().user.clone()
    }

    pub fn procedure_errors(&self) -> ProcedureErrors {
        self.state.read().errors.clone()
    }

    /// Full state snapshot, mainly for diagnostics and tests
    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }
}
