//! Back-office mock tables.
//!
//! The `/admin` area manages its own small product list, ingredient
//! inventory, order log and customer list. They are seeded from
//! `data/backoffice.json` at startup, held in process memory, and shared by
//! every admin session until the process exits.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use home_harvest_core::{
    BackofficeOrderId, BackofficeProductId, CustomerId, IngredientId, Price, PriceError,
};

/// Seed data.
const BACKOFFICE_JSON: &str = include_str!("../data/backoffice.json");

/// Validation errors for back-office forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackofficeError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Price must be a non-negative amount")]
    InvalidPrice(#[from] PriceError),

    #[error("Quantity must be a positive number")]
    InvalidQuantity,
}

/// A product managed from the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackofficeProduct {
    pub id: BackofficeProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
}

/// An inventory ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

/// A row in the order log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: BackofficeOrderId,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub total: Price,
    pub date: NaiveDate,
}

/// A row in the customer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub orders: u32,
}

/// Counts shown on the back-office dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackofficeMetrics {
    pub orders: usize,
    pub customers: usize,
    pub products: usize,
    pub ingredients: usize,
}

/// Form input for a new product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

/// Form input for a new ingredient.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Default, Deserialize)]
struct Tables {
    products: Vec<BackofficeProduct>,
    ingredients: Vec<Ingredient>,
    orders: Vec<OrderRow>,
    customers: Vec<CustomerRow>,
}

/// Shared handle to the back-office tables.
#[derive(Debug, Clone)]
pub struct Backoffice {
    tables: Arc<RwLock<Tables>>,
}

impl Backoffice {
    /// Load the seed tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        let tables: Tables = serde_json::from_str(BACKOFFICE_JSON)?;
        tracing::info!(
            products = tables.products.len(),
            ingredients = tables.ingredients.len(),
            "Back-office tables seeded"
        );
        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
        })
    }

    /// Empty tables.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    pub async fn products(&self) -> Vec<BackofficeProduct> {
        self.tables.read().await.products.clone()
    }

    pub async fn ingredients(&self) -> Vec<Ingredient> {
        self.tables.read().await.ingredients.clone()
    }

    pub async fn orders(&self) -> Vec<OrderRow> {
        self.tables.read().await.orders.clone()
    }

    pub async fn customers(&self) -> Vec<CustomerRow> {
        self.tables.read().await.customers.clone()
    }

    pub async fn metrics(&self) -> BackofficeMetrics {
        let tables = self.tables.read().await;
        BackofficeMetrics {
            orders: tables.orders.len(),
            customers: tables.customers.len(),
            products: tables.products.len(),
            ingredients: tables.ingredients.len(),
        }
    }

    /// Validate and append a product.
    ///
    /// # Errors
    ///
    /// Returns `BackofficeError::MissingFields` if any field is blank and
    /// `BackofficeError::InvalidPrice` if the price does not parse or is
    /// negative. Nothing is added on error.
    pub async fn add_product(&self, input: NewProduct) -> Result<BackofficeProduct, BackofficeError> {
        let name = input.name.trim();
        let description = input.description.trim();
        if name.is_empty() || description.is_empty() || input.price.trim().is_empty() {
            return Err(BackofficeError::MissingFields);
        }
        let price = Price::parse(&input.price)?;

        let mut tables = self.tables.write().await;
        let id = tables
            .products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(BackofficeProductId::new(1), |id| id.next());

        let product = BackofficeProduct {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        };
        tables.products.push(product.clone());

        tracing::info!(product_id = %product.id, name = %product.name, "Back-office product added");
        Ok(product)
    }

    /// Validate and append an ingredient.
    ///
    /// # Errors
    ///
    /// Returns `BackofficeError::MissingFields` if any field is blank and
    /// `BackofficeError::InvalidQuantity` unless the quantity is a positive
    /// integer. Nothing is added on error.
    pub async fn add_ingredient(&self, input: NewIngredient) -> Result<Ingredient, BackofficeError> {
        let name = input.name.trim();
        let unit = input.unit.trim();
        let quantity = input.quantity.trim();
        if name.is_empty() || unit.is_empty() || quantity.is_empty() {
            return Err(BackofficeError::MissingFields);
        }
        let quantity = quantity
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or(BackofficeError::InvalidQuantity)?;

        let mut tables = self.tables.write().await;
        let id = tables
            .ingredients
            .iter()
            .map(|i| i.id)
            .max()
            .map_or(IngredientId::new(1), |id| id.next());

        let ingredient = Ingredient {
            id,
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        };
        tables.ingredients.push(ingredient.clone());

        tracing::info!(ingredient_id = %ingredient.id, name = %ingredient.name, "Ingredient added");
        Ok(ingredient)
    }
}
