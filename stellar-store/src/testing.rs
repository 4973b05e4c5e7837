//! Helpers shared by the unit tests

use async_trait::async_trait;
use shared::models::{Ingredient, IngredientKind};
use shared::{Feed, Order, User};
use stellar_client::{
    AuthPayload, BurgerApi, ClientError, ClientResult, LoginData, OrderReceipt, RegisterData,
    UserPatch,
};

pub(crate) fn sample_ingredient(id: &str, kind: IngredientKind, price: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: format!("Ingredient {id}"),
        kind,
        proteins: 10.0,
        fat: 5.0,
        carbohydrates: 20.0,
        calories: 150.0,
        price,
        image: String::new(),
        image_mobile: String::new(),
        image_large: String::new(),
    }
}

/// API stub for tests that never reach the network
#[derive(Debug, Default)]
pub(crate) struct NullApi;

#[async_trait]
impl BurgerApi for NullApi {
    async fn get_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn order_burger(&self, _ingredient_ids: &[String]) -> ClientResult<OrderReceipt> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn login(&self, _data: &LoginData) -> ClientResult<AuthPayload> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn register(&self, _data: &RegisterData) -> ClientResult<AuthPayload> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn get_user(&self) -> ClientResult<User> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn get_feeds(&self) -> ClientResult<Feed> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn get_orders(&self) -> ClientResult<Vec<Order>> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn logout(&self) -> ClientResult<()> {
        Err(ClientError::Api("unavailable".to_string()))
    }

    async fn update_user(&self, _patch: &UserPatch) -> ClientResult<User> {
        Err(ClientError::Api("unavailable".to_string()))
    }
}
