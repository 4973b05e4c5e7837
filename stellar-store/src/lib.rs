//! Stellar Store - centralized order state for the Stellar Burger storefront
//!
//! A single serializable state container plus asynchronous synchronization
//! procedures that reconcile it with the remote ingredient/order/user API.
//! Consumers dispatch synchronous intents (cart edits, modal flags) or
//! asynchronous ones (catalog fetch, order submission, auth) and subscribe
//! to read-only selectors; nothing mutates the state except the store
//! itself (single writer, many readers).
//!
//! The store is an explicit value instantiated once per session and
//! threaded to its consumers; there is no hidden global.

pub mod draft;
pub mod error;
pub mod ids;
pub mod state;
pub mod store;
#[cfg(test)]
mod testing;
mod thunks;

pub use draft::{DraftError, DraftStore, FileDraftStore, MemoryDraftStore};
pub use error::StoreError;
pub use ids::{InstanceIds, SequentialInstanceIds, UuidInstanceIds};
pub use state::{ProcedureErrors, StoreState};
pub use store::Store;

// Re-exports for consumers wiring up a store
pub use stellar_client::{BurgerApi, LoginData, RegisterData, UserPatch};
