//! Catalog product types.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Nutrition facts per serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    /// Grams of protein.
    pub protein: u32,
    /// Grams of carbohydrates.
    pub carbs: u32,
    /// Grams of fat.
    pub fat: u32,
}

/// A read-only catalog entry.
///
/// Field names serialize in camelCase (`inStock`) so persisted cart items
/// keep the same shape as the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Absolute image URL.
    pub image: String,
    /// Category slug (matches [`Category::id`]).
    pub category: String,
    pub featured: bool,
    /// Units available; the cart never holds more than this.
    pub in_stock: u32,
    pub nutrition: Nutrition,
}

impl Product {
    /// Whether at least one unit can be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.in_stock > 0
    }

    /// Case-insensitive match of `term` against the name or description.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug used in URLs and on [`Product::category`].
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a product with the fields the cart cares about.
    pub fn product(id: i64, price_cents: i64, in_stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "A test product".to_string(),
            price: Price::from_cents(price_cents),
            image: "https://images.example.com/product.jpg".to_string(),
            category: "bowls".to_string(),
            featured: false,
            in_stock,
            nutrition: Nutrition::default(),
        }
    }
}
