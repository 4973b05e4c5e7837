//! HTTP implementation of the Stellar Burger API
//!
//! Thin wrapper over reqwest against the Norma endpoints. Every response
//! carries a `success` flag; `success: false` and non-2xx statuses both
//! normalize to `ClientError`. Authorized calls that bounce with an
//! expired access token are retried once after a refresh-token exchange.

use crate::{
    AuthPayload, BurgerApi, ClientConfig, ClientError, ClientResult, CredentialStore, LoginData,
    OrderReceipt, RegisterData, UserPatch,
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{Feed, Ingredient, Order, User};
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// Response Envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
struct IngredientsResponse {
    #[allow(dead_code)]
    success: bool,
    data: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    #[allow(dead_code)]
    success: bool,
    name: String,
    order: Order,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    #[allow(dead_code)]
    success: bool,
    access_token: String,
    refresh_token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[allow(dead_code)]
    success: bool,
    user: User,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[allow(dead_code)]
    success: bool,
    #[serde(flatten)]
    feed: Feed,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    #[allow(dead_code)]
    success: bool,
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[allow(dead_code)]
    success: bool,
}

// ============================================================================
// HttpBurgerApi
// ============================================================================

/// Network client for the Stellar Burger API
#[derive(Clone)]
pub struct HttpBurgerApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl HttpBurgerApi {
    /// Create a new client from configuration and a credential store
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            credentials,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authorized: bool,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);

        if let Some(body) = body {
            request = request.json(body);
        }

        if authorized {
            let token = self
                .credentials
                .access_token()
                .ok_or(ClientError::Unauthorized)?;
            // Token is stored as issued, "Bearer " prefix included
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Authorized call with a single refresh-and-retry on token expiry
    async fn send_authorized<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        match self.send(method.clone(), path, body.as_ref(), true).await {
            Err(ClientError::Unauthorized) => {
                debug!(path, "access token rejected, exchanging refresh token");
                self.refresh_session().await?;
                self.send(method, path, body.as_ref(), true).await
            }
            other => other,
        }
    }

    /// Exchange the refresh token for a fresh pair
    ///
    /// A failed exchange invalidates the session: stored credentials are
    /// cleared and the caller sees `Unauthorized`.
    async fn refresh_session(&self) -> ClientResult<()> {
        let refresh = self
            .credentials
            .refresh_token()
            .ok_or(ClientError::Unauthorized)?;

        let body = serde_json::json!({ "token": refresh });
        let result: ClientResult<TokenResponse> =
            self.send(Method::POST, "/auth/token", Some(&body), false).await;

        match result {
            Ok(tokens) => {
                self.credentials
                    .store(tokens.access_token, tokens.refresh_token);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "refresh token exchange failed, clearing credentials");
                self.credentials.clear();
                Err(ClientError::Unauthorized)
            }
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized);
        }

        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !status.is_success() || !success {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed");
            return Err(ClientError::Api(message.to_string()));
        }

        serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl BurgerApi for HttpBurgerApi {
    async fn get_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        let response: IngredientsResponse =
            self.send(Method::GET, "/ingredients", None, false).await?;
        debug!(count = response.data.len(), "fetched ingredient catalog");
        Ok(response.data)
    }

    async fn order_burger(&self, ingredient_ids: &[String]) -> ClientResult<OrderReceipt> {
        let body = serde_json::json!({ "ingredients": ingredient_ids });
        let response: OrderResponse = self
            .send_authorized(Method::POST, "/orders", Some(body))
            .await?;
        debug!(number = response.order.number, "order created");
        Ok(OrderReceipt {
            order: response.order,
            name: response.name,
        })
    }

    async fn login(&self, data: &LoginData) -> ClientResult<AuthPayload> {
        let body = serde_json::to_value(data)?;
        let response: AuthResponse = self
            .send(Method::POST, "/auth/login", Some(&body), false)
            .await?;

        self.credentials
            .store(response.access_token.clone(), response.refresh_token.clone());

        Ok(AuthPayload {
            user: response.user,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }

    async fn register(&self, data: &RegisterData) -> ClientResult<AuthPayload> {
        let body = serde_json::to_value(data)?;
        let response: AuthResponse = self
            .send(Method::POST, "/auth/register", Some(&body), false)
            .await?;

        self.credentials
            .store(response.access_token.clone(), response.refresh_token.clone());

        Ok(AuthPayload {
            user: response.user,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }

    async fn get_user(&self) -> ClientResult<User> {
        let response: UserResponse = self
            .send_authorized(Method::GET, "/auth/user", None)
            .await?;
        Ok(response.user)
    }

    async fn get_feeds(&self) -> ClientResult<Feed> {
        let response: FeedResponse = self.send(Method::GET, "/orders/all", None, false).await?;
        Ok(response.feed)
    }

    async fn get_orders(&self) -> ClientResult<Vec<Order>> {
        let response: FeedResponse = self.send_authorized(Method::GET, "/orders", None).await?;
        Ok(response.feed.orders)
    }

    async fn logout(&self) -> ClientResult<()> {
        let refresh = self
            .credentials
            .refresh_token()
            .ok_or(ClientError::Unauthorized)?;

        let body = serde_json::json!({ "token": refresh });
        let _: StatusResponse = self
            .send(Method::POST, "/auth/logout", Some(&body), false)
            .await?;

        // Server confirmed; the pair is now invalid
        self.credentials.clear();
        Ok(())
    }

    async fn update_user(&self, patch: &UserPatch) -> ClientResult<User> {
        let body = serde_json::to_value(patch)?;
        let response: UserResponse = self
            .send_authorized(Method::PATCH, "/auth/user", Some(body))
            .await?;
        Ok(response.user)
    }
}
