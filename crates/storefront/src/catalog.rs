//! Static product catalog.
//!
//! The catalog (products, categories, mock sales figures and sample orders)
//! is embedded in the binary from `data/catalog.json` and parsed once at
//! startup. It is read-only for the lifetime of the process.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use home_harvest_core::{Category, OrderStatus, Price, Product, ProductId};

/// Embedded catalog data.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Upper bound of the listing page's price slider.
pub const PRICE_RANGE_MAX: i64 = 20;

/// Maximum number of related products shown on a detail page.
pub const RELATED_LIMIT: usize = 4;

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product {product} references unknown category '{category}'")]
    UnknownCategory { product: ProductId, category: String },
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
}

/// One day of mock sales.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub amount: Price,
    pub orders: u32,
}

/// Headline figures for the admin-user dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreMetrics {
    pub orders: u32,
    pub customers: u32,
    pub products: u32,
    pub revenue: Price,
}

/// A past order shown on the customer dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleOrder {
    pub reference: String,
    pub product_name: String,
    pub date: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
    sales: Vec<SalesPoint>,
    metrics: StoreMetrics,
    sample_orders: Vec<SampleOrder>,
}

/// Criteria for the product listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Price,
    /// Inclusive upper price bound.
    pub max_price: Price,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            min_price: Price::ZERO,
            max_price: Price::from_dollars(PRICE_RANGE_MAX),
        }
    }
}

impl ProductFilter {
    /// Whether any criterion differs from the defaults.
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Whether `product` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| product.matches_search(term));
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category == category);
        let price_ok = product.price >= self.min_price && product.price <= self.max_price;

        search_ok && category_ok && price_ok
    }
}

/// The read-only catalog.
///
/// Cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogData>,
}

impl Catalog {
    /// Load the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or inconsistent.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a product id repeats, or a
    /// product references a category that does not exist.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        let category_ids: HashSet<&str> = data.categories.iter().map(|c| c.id.as_str()).collect();
        let mut seen = HashSet::new();
        for product in &data.products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            if !category_ids.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    product: product.id,
                    category: product.category.clone(),
                });
            }
        }

        tracing::info!(
            products = data.products.len(),
            categories = data.categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            inner: Arc::new(data),
        })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == id)
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.inner.categories.iter().find(|c| c.id == id)
    }

    /// Products in the given category.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.inner
            .products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.inner.products.iter().filter(|p| p.featured).collect()
    }

    /// Other products from the same category, at most [`RELATED_LIMIT`].
    #[must_use]
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.by_category(&product.category)
            .into_iter()
            .filter(|p| p.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Products matching the filter, in catalog order.
    #[must_use]
    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.inner
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    /// Mock daily sales.
    #[must_use]
    pub fn sales(&self) -> &[SalesPoint] {
        &self.inner.sales
    }

    /// Mock headline figures.
    #[must_use]
    pub fn metrics(&self) -> &StoreMetrics {
        &self.inner.metrics
    }

    /// Mock past orders for the customer dashboard.
    #[must_use]
    pub fn sample_orders(&self) -> &[SampleOrder] {
        &self.inner.sample_orders
    }
}
