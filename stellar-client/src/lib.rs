//! Stellar Client - HTTP client for the Stellar Burger API
//!
//! Provides the `BurgerApi` collaborator contract consumed by the order
//! state store, its network implementation over reqwest, and credential
//! storage for the access/refresh token pair.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;

pub use api::{AuthPayload, BurgerApi, LoginData, OrderReceipt, RegisterData, UserPatch};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use error::{ClientError, ClientResult};
pub use http::HttpBurgerApi;

// Re-export shared types for convenience
pub use shared::{Feed, Ingredient, Order, User};
