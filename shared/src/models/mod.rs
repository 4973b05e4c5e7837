//! Domain models mirrored from the remote API
//!
//! These records are sourced from the server and never mutated locally;
//! refetches replace them wholesale.

mod feed;
mod ingredient;
mod order;
mod user;

pub use feed::Feed;
pub use ingredient::{Ingredient, IngredientKind};
pub use order::{Order, OrderStatus};
pub use user::User;
