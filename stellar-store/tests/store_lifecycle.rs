//! Store lifecycle tests
//!
//! Drives the store through its asynchronous synchronization procedures
//! against a scripted mock API, verifying the start/success/failure
//! contract of each procedure and the end-to-end ordering scenario.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use shared::models::{Ingredient, IngredientKind, Order, OrderStatus};
use shared::{Feed, User};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use stellar_client::{
    AuthPayload, BurgerApi, ClientError, ClientResult, LoginData, OrderReceipt, RegisterData,
    UserPatch,
};
use stellar_store::{SequentialInstanceIds, Store, StoreError};

// ============================================================================
// Scripted Mock API
// ============================================================================

struct Script<T> {
    delay_ms: u64,
    result: Result<T, String>,
}

impl<T> Script<T> {
    fn ok(value: T) -> Self {
        Self {
            delay_ms: 0,
            result: Ok(value),
        }
    }

    fn err(message: &str) -> Self {
        Self {
            delay_ms: 0,
            result: Err(message.to_string()),
        }
    }

    fn after(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Default)]
struct MockApi {
    ingredients: Mutex<VecDeque<Script<Vec<Ingredient>>>>,
    orders: Mutex<VecDeque<Script<OrderReceipt>>>,
    logins: Mutex<VecDeque<Script<AuthPayload>>>,
    registers: Mutex<VecDeque<Script<AuthPayload>>>,
    users: Mutex<VecDeque<Script<User>>>,
    feeds: Mutex<VecDeque<Script<Feed>>>,
    user_orders: Mutex<VecDeque<Script<Vec<Order>>>>,
    logouts: Mutex<VecDeque<Script<()>>>,
    updates: Mutex<VecDeque<Script<User>>>,
    /// Every payload passed to `order_burger`; shared so tests keep a
    /// handle after the mock moves into the store
    submitted_payloads: Arc<Mutex<Vec<Vec<String>>>>,
}

async fn run_script<T>(queue: &Mutex<VecDeque<Script<T>>>) -> ClientResult<T> {
    let script = queue.lock().pop_front().expect("no scripted response left");
    if script.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(script.delay_ms)).await;
    }
    script.result.map_err(ClientError::Api)
}

#[async_trait]
impl BurgerApi for MockApi {
    async fn get_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        run_script(&self.ingredients).await
    }

    async fn order_burger(&self, ingredient_ids: &[String]) -> ClientResult<OrderReceipt> {
        self.submitted_payloads.lock().push(ingredient_ids.to_vec());
        run_script(&self.orders).await
    }

    async fn login(&self, _data: &LoginData) -> ClientResult<AuthPayload> {
        run_script(&self.logins).await
    }

    async fn register(&self, _data: &RegisterData) -> ClientResult<AuthPayload> {
        run_script(&self.registers).await
    }

    async fn get_user(&self) -> ClientResult<User> {
        run_script(&self.users).await
    }

    async fn get_feeds(&self) -> ClientResult<Feed> {
        run_script(&self.feeds).await
    }

    async fn get_orders(&self) -> ClientResult<Vec<Order>> {
        run_script(&self.user_orders).await
    }

    async fn logout(&self) -> ClientResult<()> {
        run_script(&self.logouts).await
    }

    async fn update_user(&self, _patch: &UserPatch) -> ClientResult<User> {
        run_script(&self.updates).await
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn ingredient(id: &str, kind: IngredientKind, price: f64) -> Ingredient {
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

fn order(number: i64) -> Order {
    Order {
        id: format!("order-{number}"),
        ingredients: vec!["b1".to_string(), "i1".to_string(), "b1".to_string()],
        status: OrderStatus::Done,
        name: "Stellar burger".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        number,
    }
}

fn auth_payload(name: &str, email: &str) -> AuthPayload {
    AuthPayload {
        user: User::new(name, email),
        access_token: "Bearer access".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

fn login_data() -> LoginData {
    LoginData {
        email: "neo@stellar.test".to_string(),
        password: "follow-the-white-rabbit".to_string(),
    }
}

fn store_with(api: MockApi) -> Store<MockApi> {
    Store::with_ids(api, Box::new(SequentialInstanceIds::new("inst")))
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn catalog_fetch_sets_loading_then_replaces_list() {
    let api = MockApi::default();
    api.ingredients
        .lock()
        .push_back(Script::ok(vec![ingredient("b1", IngredientKind::Bun, 100.0)]).after(50));

    let store = Arc::new(store_with(api));
    let worker = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_ingredients().await })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(store.is_loading(), "pending phase must raise the flag");

    worker.await.unwrap().unwrap();
    assert!(!store.is_loading());
    assert_eq!(store.ingredients().len(), 1);
    assert!(store.procedure_errors().catalog.is_none());
}

#[tokio::test]
async fn catalog_fetch_failure_keeps_prior_list() {
    let api = MockApi::default();
    api.ingredients
        .lock()
        .push_back(Script::ok(vec![ingredient("b1", IngredientKind::Bun, 100.0)]));
    api.ingredients.lock().push_back(Script::err("catalog down"));

    let store = store_with(api);
    store.fetch_ingredients().await.unwrap();
    assert_eq!(store.ingredients().len(), 1);

    let err = store.fetch_ingredients().await.unwrap_err();
    assert!(matches!(err, StoreError::Api(_)));
    assert!(!store.is_loading());
    // Prior list survives; failure lands in the catalog error slot
    assert_eq!(store.ingredients().len(), 1);
    assert_eq!(
        store.procedure_errors().catalog.as_deref(),
        Some("catalog down")
    );
}

#[tokio::test]
async fn overlapping_catalog_fetches_latest_dispatch_wins() {
    let api = MockApi::default();
    // First dispatch resolves last
    api.ingredients
        .lock()
        .push_back(Script::ok(vec![ingredient("old", IngredientKind::Bun, 1.0)]).after(60));
    api.ingredients
        .lock()
        .push_back(Script::ok(vec![ingredient("new", IngredientKind::Bun, 2.0)]).after(10));

    let store = Arc::new(store_with(api));
    let first = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_ingredients().await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_ingredients().await })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    // The stale resolution of the first dispatch must not overwrite the
    // newer catalog, and the flag must not be stranded
    assert!(!store.is_loading());
    assert_eq!(store.ingredients().len(), 1);
    assert_eq!(store.ingredients()[0].id, "new");
}

// ============================================================================
// Order Submission
// ============================================================================

#[tokio::test]
async fn order_submission_end_to_end() {
    let api = MockApi::default();
    let payloads = api.submitted_payloads.clone();
    api.orders.lock().push_back(Script::ok(OrderReceipt {
        order: order(12345),
        name: "Stellar burger".to_string(),
    }));

    let store = store_with(api);
    store.add_ingredient(ingredient("b1", IngredientKind::Bun, 100.0));
    store.add_ingredient(ingredient("i1", IngredientKind::Main, 50.0));
    store.add_ingredient(ingredient("i2", IngredientKind::Sauce, 20.0));

    store.submit_order().await.unwrap();

    // Payload carries the bun id first and last
    assert_eq!(
        payloads.lock().as_slice(),
        &[vec![
            "b1".to_string(),
            "i1".to_string(),
            "i2".to_string(),
            "b1".to_string()
        ]]
    );

    assert!(!store.is_order_requested());
    assert_eq!(store.order_receipt().unwrap().number, 12345);

    // Closing the request clears the receipt but leaves the cart alone
    store.close_order_request();
    assert!(store.order_receipt().is_none());
    assert!(!store.is_order_requested());
    assert_eq!(store.cart().fillings.len(), 2);
    assert!(store.cart().bun.is_some());
}

#[tokio::test]
async fn order_submission_failure_clears_receipt() {
    let api = MockApi::default();
    api.orders.lock().push_back(Script::ok(OrderReceipt {
        order: order(1),
        name: "First".to_string(),
    }));
    api.orders.lock().push_back(Script::err("kitchen on fire"));

    let store = store_with(api);
    store.add_ingredient(ingredient("b1", IngredientKind::Bun, 100.0));
    store.add_ingredient(ingredient("i1", IngredientKind::Main, 50.0));

    store.submit_order().await.unwrap();
    assert!(store.order_receipt().is_some());

    let err = store.submit_order().await.unwrap_err();
    assert!(matches!(err, StoreError::Api(_)));
    assert!(!store.is_order_requested());
    assert!(store.order_receipt().is_none());
    assert_eq!(
        store.procedure_errors().order.as_deref(),
        Some("kitchen on fire")
    );
}

#[tokio::test]
async fn incomplete_cart_is_rejected_before_dispatch() {
    let api = MockApi::default();
    let payloads = api.submitted_payloads.clone();
    let store = store_with(api);

    // Empty cart
    let err = store.submit_order().await.unwrap_err();
    assert!(matches!(err, StoreError::IncompleteOrder));

    // Bun alone is still incomplete
    store.add_ingredient(ingredient("b1", IngredientKind::Bun, 100.0));
    let err = store.submit_order().await.unwrap_err();
    assert!(matches!(err, StoreError::IncompleteOrder));

    // The in-flight flag was never touched and nothing reached the API
    assert!(!store.is_order_requested());
    assert!(payloads.lock().is_empty());
}

#[tokio::test]
async fn order_request_flag_raised_while_pending() {
    let api = MockApi::default();
    api.orders.lock().push_back(
        Script::ok(OrderReceipt {
            order: order(7),
            name: "Slow burger".to_string(),
        })
        .after(50),
    );

    let store = Arc::new(store_with(api));
    store.add_ingredient(ingredient("b1", IngredientKind::Bun, 100.0));
    store.add_ingredient(ingredient("i1", IngredientKind::Main, 50.0));

    let worker = {
        let store = store.clone();
        tokio::spawn(async move { store.submit_order().await })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(store.is_order_requested());

    worker.await.unwrap().unwrap();
    assert!(!store.is_order_requested());
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn login_success_marks_authenticated_and_merges_user() {
    let api = MockApi::default();
    api.logins
        .lock()
        .push_back(Script::ok(auth_payload("Neo", "neo@stellar.test")));

    let store = store_with(api);
    store.login(&login_data()).await.unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.user().name, "Neo");
    assert!(!store.is_loading());
    assert_eq!(store.error_text(), "");
}

#[tokio::test]
async fn login_failure_records_error_text() {
    let api = MockApi::default();
    api.logins.lock().push_back(Script::err("bad credentials"));

    let store = store_with(api);
    let err = store.login(&login_data()).await.unwrap_err();

    assert!(matches!(err, StoreError::Api(_)));
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
    assert_eq!(store.error_text(), "bad credentials");

    // The UI acknowledges the message explicitly
    store.clear_error_text();
    assert_eq!(store.error_text(), "");
}

#[tokio::test]
async fn register_follows_the_login_contract() {
    let api = MockApi::default();
    api.registers
        .lock()
        .push_back(Script::ok(auth_payload("Trinity", "trinity@stellar.test")));
    api.registers.lock().push_back(Script::err("email taken"));

    let store = store_with(api);
    store
        .register(&RegisterData {
            name: "Trinity".to_string(),
            email: "trinity@stellar.test".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.user().email, "trinity@stellar.test");

    store
        .register(&RegisterData {
            name: "Smith".to_string(),
            email: "trinity@stellar.test".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(store.error_text(), "email taken");
}

#[tokio::test]
async fn rejected_user_fetch_resets_identity_regardless_of_prior_state() {
    let api = MockApi::default();
    api.logins
        .lock()
        .push_back(Script::ok(auth_payload("Neo", "neo@stellar.test")));
    api.users.lock().push_back(Script::err("jwt expired"));

    let store = store_with(api);
    store.login(&login_data()).await.unwrap();
    assert!(store.is_authenticated());

    store.fetch_user().await.unwrap_err();

    assert!(!store.is_authenticated());
    assert_eq!(store.user(), User::default());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn successful_user_fetch_merges_profile() {
    let api = MockApi::default();
    api.users
        .lock()
        .push_back(Script::ok(User::new("Neo", "neo@stellar.test")));

    let store = store_with(api);
    store.fetch_user().await.unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.user().name, "Neo");
}

#[tokio::test]
async fn logout_resets_identity_only_on_confirmed_success() {
    let api = MockApi::default();
    api.logins
        .lock()
        .push_back(Script::ok(auth_payload("Neo", "neo@stellar.test")));
    api.logouts.lock().push_back(Script::err("server sneezed"));
    api.logouts.lock().push_back(Script::ok(()));

    let store = store_with(api);
    store.login(&login_data()).await.unwrap();

    // Failed logout keeps the session
    store.logout().await.unwrap_err();
    assert!(store.is_authenticated());
    assert_eq!(store.user().name, "Neo");

    // Confirmed logout resets it
    store.logout().await.unwrap();
    assert!(!store.is_authenticated());
    assert!(store.user().is_anonymous());
}

#[tokio::test]
async fn profile_update_merges_confirmed_fields_only() {
    let api = MockApi::default();
    api.logins
        .lock()
        .push_back(Script::ok(auth_payload("Neo", "neo@stellar.test")));
    api.updates
        .lock()
        .push_back(Script::ok(User::new("Neo Anderson", "neo@stellar.test")));
    api.updates.lock().push_back(Script::err("email in use"));

    let store = store_with(api);
    store.login(&login_data()).await.unwrap();

    store
        .update_user(&UserPatch {
            name: Some("Neo Anderson".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(store.user().name, "Neo Anderson");
    assert!(store.procedure_errors().profile.is_none());

    store
        .update_user(&UserPatch {
            email: Some("taken@stellar.test".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    // Prior user kept, failure recorded
    assert_eq!(store.user().name, "Neo Anderson");
    assert_eq!(store.user().email, "neo@stellar.test");
    assert_eq!(
        store.procedure_errors().profile.as_deref(),
        Some("email in use")
    );
}

// ============================================================================
// Feed and User Orders
// ============================================================================

#[tokio::test]
async fn feed_fetch_replaces_orders_and_totals() {
    let api = MockApi::default();
    api.feeds.lock().push_back(Script::ok(Feed {
        orders: vec![order(1), order(2)],
        total: 40000,
        total_today: 45,
    }));

    let store = store_with(api);
    store.fetch_feed().await.unwrap();

    assert_eq!(store.feed_orders().len(), 2);
    assert_eq!(store.total_orders(), 40000);
    assert_eq!(store.orders_today(), 45);

    store.clear_feed_orders();
    assert!(store.feed_orders().is_empty());
    // Totals are server-reported aggregates; clearing the list leaves them
    assert_eq!(store.total_orders(), 40000);
}

#[tokio::test]
async fn feed_fetch_failure_keeps_prior_values() {
    let api = MockApi::default();
    api.feeds.lock().push_back(Script::ok(Feed {
        orders: vec![order(1)],
        total: 10,
        total_today: 1,
    }));
    api.feeds.lock().push_back(Script::err("feed down"));

    let store = store_with(api);
    store.fetch_feed().await.unwrap();
    store.fetch_feed().await.unwrap_err();

    assert_eq!(store.feed_orders().len(), 1);
    assert_eq!(store.total_orders(), 10);
    assert_eq!(store.procedure_errors().feed.as_deref(), Some("feed down"));
}

#[tokio::test]
async fn user_orders_fetch_and_clear() {
    let api = MockApi::default();
    api.user_orders
        .lock()
        .push_back(Script::ok(vec![order(5), order(6)]));

    let store = store_with(api);
    assert!(store.user_orders().is_none());

    store.fetch_user_orders().await.unwrap();
    assert_eq!(store.user_orders().unwrap().len(), 2);

    store.clear_user_orders();
    assert!(store.user_orders().is_none());

    // Clearing again is a stable fixed point
    store.clear_user_orders();
    assert!(store.user_orders().is_none());
}
