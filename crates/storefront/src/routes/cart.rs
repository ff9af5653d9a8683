//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Mutations are plain form posts
//! that redirect back, with a toast describing what happened.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use home_harvest_core::{CartError, CartItem, OrderSummary, Price, ProductId};
use home_harvest_core::cart::FREE_SHIPPING_THRESHOLD;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::routes::{local_path, notify};
use crate::services::{CartService, CartServiceError, Pause};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
    /// Local path to return to; defaults to the cart.
    pub redirect_to: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i64,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub ctx: PageContext,
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,
    /// Spend still needed for free shipping; `None` once reached.
    pub free_shipping_gap: Option<Price>,
}

/// Display the cart page.
#[instrument(skip(session, ctx))]
pub async fn show(session: Session, ctx: PageContext) -> Result<impl IntoResponse> {
    let cart = CartService::new(&session).load().await?;
    let summary = cart.summary();
    let free_shipping_gap = (!cart.is_empty() && summary.subtotal < FREE_SHIPPING_THRESHOLD)
        .then(|| Price::new(FREE_SHIPPING_THRESHOLD.amount() - summary.subtotal.amount()));

    Ok(CartShowTemplate {
        ctx,
        items: cart.into_items(),
        summary,
        free_shipping_gap,
    })
}

/// Add a product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .product(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;
    let requested = form.quantity.unwrap_or(1);
    let back = local_path(form.redirect_to.as_deref()).unwrap_or("/cart");

    state.latency().pause(Pause::AddToCart).await;

    let carts = CartService::new(&session);
    let before = carts
        .load()
        .await?
        .get(product.id)
        .map_or(0, |item| item.quantity);

    let toast = match carts.add(product, requested).await {
        Ok(quantity) if quantity < before.saturating_add(requested) => {
            Toast::error("Maximum quantity reached").with_description(
                "You've reached the maximum available quantity for this product.",
            )
        }
        Ok(_) => {
            let id = product.id.to_string();
            add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
            Toast::info("Added to cart").with_description(format!(
                "{requested} × {} has been added to your cart.",
                product.name
            ))
        }
        Err(CartServiceError::Cart(CartError::OutOfStock(name))) => {
            Toast::error("Out of stock").with_description(format!("{name} is currently unavailable."))
        }
        Err(CartServiceError::Cart(CartError::ZeroQuantity)) => {
            Toast::error("Invalid quantity").with_description("Choose at least one item.")
        }
        Err(CartServiceError::Store(e)) => return Err(e.into()),
    };

    notify(&session, toast).await?;
    Ok(Redirect::to(back))
}

/// Change the quantity of a cart entry. Zero or less removes it.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    CartService::new(&session)
        .update_quantity(ProductId::new(form.product_id), form.quantity)
        .await?;
    Ok(Redirect::to("/cart"))
}

/// Remove a cart entry.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    CartService::new(&session)
        .remove(ProductId::new(form.product_id))
        .await?;
    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    CartService::new(&session).clear().await?;
    Ok(Redirect::to("/cart"))
}
