//! Product route handlers.
//!
//! The listing is filtered server-side from query parameters; the detail
//! page shows nutrition facts and related products.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use home_harvest_core::{Category, Price, Product, ProductId};

use crate::catalog::{PRICE_RANGE_MAX, ProductFilter};
use crate::filters;
use crate::middleware::PageContext;
use crate::routes::pages::NotFoundTemplate;
use crate::services::Pause;
use crate::state::AppState;

/// Listing query parameters.
///
/// Prices arrive as strings so a blank or malformed bound falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ListingQuery {
    /// Convert into a catalog filter.
    #[must_use]
    pub fn into_filter(self) -> ProductFilter {
        let defaults = ProductFilter::default();
        let parse = |value: Option<String>, default: Price| {
            value
                .as_deref()
                .and_then(|v| Price::parse(v).ok())
                .unwrap_or(default)
        };

        let mut min_price = parse(self.min_price, defaults.min_price);
        let mut max_price = parse(self.max_price, defaults.max_price);
        if min_price > max_price {
            std::mem::swap(&mut min_price, &mut max_price);
        }

        ProductFilter {
            search: non_blank(self.q),
            category: non_blank(self.category),
            min_price,
            max_price,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub ctx: PageContext,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub price_range_max: i64,
    pub filtered: bool,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductTemplate {
    pub ctx: PageContext,
    pub product: Product,
    pub category: Option<Category>,
    pub related: Vec<Product>,
}

/// Display the product listing.
#[instrument(skip(state, ctx))]
pub async fn index(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    state.latency().pause(Pause::ProductListing).await;

    let filter = query.into_filter();
    let catalog = state.catalog();
    let products: Vec<Product> = catalog.search(&filter).into_iter().cloned().collect();

    tracing::debug!(results = products.len(), "Product listing filtered");

    ProductsTemplate {
        ctx,
        products,
        categories: catalog.categories().to_vec(),
        search: filter.search.clone().unwrap_or_default(),
        category: filter.category.clone().unwrap_or_default(),
        min_price: filter.min_price.amount().normalize().to_string(),
        max_price: filter.max_price.amount().normalize().to_string(),
        price_range_max: PRICE_RANGE_MAX,
        filtered: filter.is_active(),
    }
}

/// Display a product detail page.
///
/// Unknown or malformed ids render the 404 page.
#[instrument(skip(state, ctx))]
pub async fn show(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<String>,
) -> Response {
    let catalog = state.catalog();
    let Some(product) = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| catalog.product(id))
    else {
        return (StatusCode::NOT_FOUND, NotFoundTemplate { ctx }).into_response();
    };

    state.latency().pause(Pause::ProductDetail).await;

    ProductTemplate {
        category: catalog.category(&product.category).cloned(),
        related: catalog.related(product).into_iter().cloned().collect(),
        product: product.clone(),
        ctx,
    }
    .into_response()
}
