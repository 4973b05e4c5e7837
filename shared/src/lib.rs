//! Shared types for the Stellar Burger storefront
//!
//! Domain models mirrored from the remote API plus the in-progress
//! order (cart) and its pure state transitions. Everything here is
//! serde-serializable and free of I/O.

pub mod cart;
pub mod models;

// Re-exports
pub use cart::{Cart, CartIngredient};
pub use models::{Feed, Ingredient, IngredientKind, Order, OrderStatus, User};
pub use serde::{Deserialize, Serialize};
