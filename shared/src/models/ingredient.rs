//! Ingredient catalog entries

use serde::{Deserialize, Serialize};

/// Ingredient category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    /// Bun - occupies the single bun slot, top and bottom
    Bun,
    /// Sauce
    Sauce,
    /// Main filling (patty, cheese, ...)
    Main,
}

impl IngredientKind {
    /// Whether this ingredient goes into the bun slot
    pub fn is_bun(self) -> bool {
        matches!(self, Self::Bun)
    }
}

/// Immutable catalog entry, sourced entirely from the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Catalog ID (assigned by server)
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    /// Proteins, grams
    pub proteins: f64,
    /// Fat, grams
    pub fat: f64,
    /// Carbohydrates, grams
    pub carbohydrates: f64,
    /// Calories, kcal
    pub calories: f64,
    /// Unit price
    pub price: f64,
    /// Card image URL
    pub image: String,
    /// Mobile image URL
    pub image_mobile: String,
    /// Large image URL
    pub image_large: String,
}
