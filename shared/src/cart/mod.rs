//! In-progress order (cart)
//!
//! The cart holds at most one bun plus an ordered sequence of fillings.
//! Sequence order is significant: it reflects the visual stacking and is
//! preserved in the submitted ingredient-id list. All operations here are
//! pure state transitions; instance ids are generated by the caller.

use crate::models::Ingredient;
use serde::{Deserialize, Serialize};

/// An ingredient placed into the cart
///
/// Carries a locally generated `instance_id` so the same catalog entry can
/// appear several times in one order and still be addressed individually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    /// Locally generated unique instance id
    pub instance_id: String,
}

impl CartIngredient {
    pub fn new(ingredient: Ingredient, instance_id: impl Into<String>) -> Self {
        Self {
            ingredient,
            instance_id: instance_id.into(),
        }
    }

    /// Catalog id of the underlying ingredient
    pub fn catalog_id(&self) -> &str {
        &self.ingredient.id
    }
}

/// The in-progress order: one optional bun and an ordered filling stack
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Bun slot; the bun wraps the fillings top and bottom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bun: Option<CartIngredient>,
    /// Non-bun ingredients, bottom-up stacking order
    #[serde(default)]
    pub fillings: Vec<CartIngredient>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient to the cart
    ///
    /// A bun replaces the current bun slot; anything else is appended to
    /// the end of the filling sequence.
    pub fn add(&mut self, item: CartIngredient) {
        if item.ingredient.kind.is_bun() {
            self.bun = Some(item);
        } else {
            self.fillings.push(item);
        }
    }

    /// Remove the filling with the given instance id; no-op when absent
    pub fn remove(&mut self, instance_id: &str) {
        self.fillings.retain(|item| item.instance_id != instance_id);
    }

    /// Swap the filling with its predecessor
    ///
    /// Returns `true` when a swap happened. Missing ids and the first
    /// position are no-ops returning `false`.
    pub fn move_up(&mut self, instance_id: &str) -> bool {
        match self.position(instance_id) {
            Some(idx) if idx > 0 => {
                self.fillings.swap(idx - 1, idx);
                true
            }
            _ => false,
        }
    }

    /// Swap the filling with its successor
    ///
    /// Returns `true` when a swap happened. Missing ids and the last
    /// position are no-ops returning `false`.
    pub fn move_down(&mut self, instance_id: &str) -> bool {
        match self.position(instance_id) {
            Some(idx) if idx + 1 < self.fillings.len() => {
                self.fillings.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    fn position(&self, instance_id: &str) -> Option<usize> {
        self.fillings
            .iter()
            .position(|item| item.instance_id == instance_id)
    }

    /// Build the submission id sequence: bun id first and last
    ///
    /// Top and bottom bun use the same id, submitted twice. Returns `None`
    /// until the order is complete (a bun plus at least one filling), which
    /// mirrors the order-button guard in the storefront.
    pub fn submission_ids(&self) -> Option<Vec<String>> {
        let bun = self.bun.as_ref()?;
        if self.fillings.is_empty() {
            return None;
        }

        let mut ids = Vec::with_capacity(self.fillings.len() + 2);
        ids.push(bun.catalog_id().to_string());
        ids.extend(self.fillings.iter().map(|f| f.catalog_id().to_string()));
        ids.push(bun.catalog_id().to_string());
        Some(ids)
    }

    /// Total price: bun counted twice plus every filling
    pub fn total_price(&self) -> f64 {
        let bun_price = self
            .bun
            .as_ref()
            .map(|b| b.ingredient.price * 2.0)
            .unwrap_or(0.0);
        bun_price
            + self
                .fillings
                .iter()
                .map(|f| f.ingredient.price)
                .sum::<f64>()
    }

    /// Whether both the bun slot and the filling sequence are empty
    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.fillings.is_empty()
    }

    /// Drop the bun and all fillings
    pub fn clear(&mut self) {
        self.bun = None;
        self.fillings.clear();
    }
}
