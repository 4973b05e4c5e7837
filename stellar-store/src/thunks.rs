//! Asynchronous synchronization procedures
//!
//! Every procedure follows the same three-phase contract: start marks the
//! in-flight flag, then the API call settles as success (merge the result)
//! or failure (record the message, keep prior data). Transitions apply in
//! resolution order; a resolution that is no longer the latest issued
//! request for its family settles the in-flight accounting but its merge
//! is discarded.

use crate::error::StoreError;
use crate::store::Store;
use stellar_client::{BurgerApi, LoginData, RegisterData, UserPatch};
use tracing::{debug, warn};

impl<A: BurgerApi> Store<A> {
    /// Fetch the ingredient catalog and replace it wholesale
    pub async fn fetch_ingredients(&self) -> Result<(), StoreError> {
        let ticket = self.procedures.catalog.begin();
        self.begin_loading();
        let result = self.api.get_ingredients().await;
        self.settle_loading();

        let latest = self.procedures.catalog.is_latest(ticket);
        match result {
            Ok(ingredients) if latest => {
                let mut state = self.state.write();
                state.ingredients = ingredients;
                state.errors.catalog = None;
                Ok(())
            }
            Ok(_) => {
                debug!(ticket, "discarding stale catalog resolution");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "ingredient catalog fetch failed");
                if latest {
                    self.state.write().errors.catalog = Some(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Submit the in-progress order
    ///
    /// The payload is the cart's id sequence with the bun id first and
    /// last. An incomplete cart is rejected up front without touching the
    /// in-flight flag.
    pub async fn submit_order(&self) -> Result<(), StoreError> {
        let ingredient_ids = self
            .state
            .read()
            .cart
            .submission_ids()
            .ok_or(StoreError::IncompleteOrder)?;

        let ticket = self.procedures.order.begin();
        self.begin_order_request();
        let result = self.api.order_burger(&ingredient_ids).await;
        self.settle_order_request();

        let latest = self.procedures.order.is_latest(ticket);
        match result {
            Ok(receipt) if latest => {
                debug!(number = receipt.order.number, "order submission accepted");
                let mut state = self.state.write();
                state.order_receipt = Some(receipt.order);
                state.errors.order = None;
                Ok(())
            }
            Ok(_) => {
                debug!(ticket, "discarding stale order resolution");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "order submission failed");
                if latest {
                    let mut state = self.state.write();
                    state.order_receipt = None;
                    state.errors.order = Some(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Log in with credentials
    pub async fn login(&self, data: &LoginData) -> Result<(), StoreError> {
        let ticket = self.procedures.login.begin();
        self.begin_loading();
        let result = self.api.login(data).await;
        self.settle_loading();

        let latest = self.procedures.login.is_latest(ticket);
        match result {
            Ok(payload) if latest => {
                let mut state = self.state.write();
                state.is_authenticated = true;
                state.user = payload.user;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "login failed");
                if latest {
                    self.state.write().set_error_text(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Register a new account
    pub async fn register(&self, data: &RegisterData) -> Result<(), StoreError> {
        let ticket = self.procedures.register.begin();
        self.begin_loading();
        let result = self.api.register(data).await;
        self.settle_loading();

        let latest = self.procedures.register.is_latest(ticket);
        match result {
            Ok(payload) if latest => {
                let mut state = self.state.write();
                state.is_authenticated = true;
                state.user = payload.user;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "registration failed");
                if latest {
                    self.state.write().set_error_text(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Fetch the current user's profile
    ///
    /// Failure means the session is not (or no longer) valid: the user is
    /// reset to the anonymous placeholder regardless of prior state.
    pub async fn fetch_user(&self) -> Result<(), StoreError> {
        let ticket = self.procedures.current_user.begin();
        self.begin_loading();
        let result = self.api.get_user().await;
        self.settle_loading();

        let latest = self.procedures.current_user.is_latest(ticket);
        match result {
            Ok(user) if latest => {
                let mut state = self.state.write();
                state.user = user;
                state.is_authenticated = true;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                debug!(error = %err, "current-user fetch failed, resetting identity");
                if latest {
                    self.state.write().reset_user();
                }
                Err(err.into())
            }
        }
    }

    /// Fetch the public order feed and the server-reported totals
    pub async fn fetch_feed(&self) -> Result<(), StoreError> {
        let ticket = self.procedures.feed.begin();
        self.begin_loading();
        let result = self.api.get_feeds().await;
        self.settle_loading();

        let latest = self.procedures.feed.is_latest(ticket);
        match result {
            Ok(feed) if latest => {
                let mut state = self.state.write();
                state.feed_orders = feed.orders;
                state.total_orders = feed.total;
                state.orders_today = feed.total_today;
                state.errors.feed = None;
                Ok(())
            }
            Ok(_) => {
                debug!(ticket, "discarding stale feed resolution");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "order feed fetch failed");
                if latest {
                    self.state.write().errors.feed = Some(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Fetch the authenticated user's orders
    pub async fn fetch_user_orders(&self) -> Result<(), StoreError> {
        let ticket = self.procedures.user_orders.begin();
        self.begin_loading();
        let result = self.api.get_orders().await;
        self.settle_loading();

        let latest = self.procedures.user_orders.is_latest(ticket);
        match result {
            Ok(orders) if latest => {
                let mut state = self.state.write();
                state.user_orders = Some(orders);
                state.errors.user_orders = None;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "user orders fetch failed");
                if latest {
                    self.state.write().errors.user_orders = Some(err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Log out; identity is reset only on server-confirmed success
    pub async fn logout(&self) -> Result<(), StoreError> {
        let ticket = self.procedures.logout.begin();
        self.begin_loading();
        let result = self.api.logout().await;
        self.settle_loading();

        let latest = self.procedures.logout.is_latest(ticket);
        match result {
            Ok(()) if latest => {
                self.state.write().reset_user();
                Ok(())
            }
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "logout failed, keeping session state");
                Err(err.into())
            }
        }
    }

    /// Update the current user's profile
    ///
    /// Only the server-confirmed name/email are merged back; a failure
    /// leaves the prior user untouched.
    pub async fn update_user(&self, patch: &UserPatch) -> Result<(), StoreError> {
        let ticket = self.procedures.profile.begin();
        self.begin_loading();
        let result = self.api.update_user(patch).await;
        self.settle_loading();

        let latest = self.procedures.profile.is_latest(ticket);
        match result {
            Ok(user) if latest => {
                let mut state = self.state.write();
                state.user.name = user.name;
                state.user.email = user.email;
                state.errors.profile = None;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "profile update failed");
                if latest {
                    self.state.write().errors.profile = Some(err.to_string());
                }
                Err(err.into())
            }
        }
    }
}
