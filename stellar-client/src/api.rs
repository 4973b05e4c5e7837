//! API collaborator contract
//!
//! The order state store consumes this trait; `HttpBurgerApi` implements
//! it over the network and tests substitute programmable mocks.

use crate::ClientResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{Feed, Ingredient, Order, User};

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Registration data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; `None` fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Result of a successful order submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// The created order record
    pub order: Order,
    /// Burger name composed by the server
    pub name: String,
}

/// Profile plus token pair returned by login and registration
#[derive(Debug, Clone)]
pub struct AuthPayload {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// BurgerApi Trait
// ============================================================================

/// Stellar Burger API surface
#[async_trait]
pub trait BurgerApi: Send + Sync {
    /// Fetch the ingredient catalog
    async fn get_ingredients(&self) -> ClientResult<Vec<Ingredient>>;

    /// Submit an order; `ingredient_ids` carries the bun id first and last
    async fn order_burger(&self, ingredient_ids: &[String]) -> ClientResult<OrderReceipt>;

    /// Log in with credentials
    async fn login(&self, data: &LoginData) -> ClientResult<AuthPayload>;

    /// Register a new account
    async fn register(&self, data: &RegisterData) -> ClientResult<AuthPayload>;

    /// Fetch the current user's profile
    async fn get_user(&self) -> ClientResult<User>;

    /// Fetch the public order feed
    async fn get_feeds(&self) -> ClientResult<Feed>;

    /// Fetch the authenticated user's orders
    async fn get_orders(&self) -> ClientResult<Vec<Order>>;

    /// Log out, invalidating the refresh token server-side
    async fn logout(&self) -> ClientResult<()>;

    /// Update the current user's profile
    async fn update_user(&self, patch: &UserPatch) -> ClientResult<User>;
}
