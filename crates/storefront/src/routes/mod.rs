//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (search, category, price range)
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Set a line quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! POST /checkout               - Place an order (requires sign-in)
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /signup                 - Signup page
//! POST /signup                 - Signup action
//! POST /logout                 - Logout action
//!
//! # Account (requires sign-in)
//! GET  /account                - Profile
//! GET  /dashboard              - Sales dashboard (admin users)
//! GET  /customer-dashboard     - Order history
//!
//! # Pages
//! GET  /how-we-cook            - Cooking process
//! GET  /about                  - Same page as /how-we-cook
//! POST /newsletter             - Newsletter signup (HTMX fragment or redirect)
//!
//! # Back office
//! /admin/*                     - See [`admin`]
//! ```
//!
//! Unknown paths render the 404 page.

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::models::Toast;
use crate::services::toasts;
use crate::state::AppState;
use crate::store::LocalStore;

/// Accept a redirect target only if it stays on this site.
///
/// Returns `None` for absolute URLs, protocol-relative URLs and anything
/// else that does not start with a single `/`.
#[must_use]
pub fn local_path(target: Option<&str>) -> Option<&str> {
    target.filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.starts_with("/\\"))
}

/// Queue a toast for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn notify<S: LocalStore>(store: &S, toast: Toast) -> Result<(), AppError> {
    toasts::push(store, toast).await?;
    Ok(())
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account", get(account::index))
        .route("/dashboard", get(account::dashboard))
        .route("/customer-dashboard", get(account::customer_dashboard))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(pages::health))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::checkout))
        .merge(auth_routes())
        .merge(account_routes())
        .route("/how-we-cook", get(pages::how_we_cook))
        .route("/about", get(pages::how_we_cook))
        .route("/newsletter", post(newsletter::subscribe))
        .nest("/admin", admin::routes())
        .fallback(pages::not_found)
}
