//! Back-office route handlers.
//!
//! ```text
//! GET  /admin/login      - Back-office login page
//! POST /admin/login      - Login action
//! POST /admin/logout     - Logout action
//! GET  /admin/dashboard  - Table counts
//! GET  /admin/orders     - Order log
//! GET  /admin/customers  - Customer list
//! GET  /admin/products   - Product table and form
//! POST /admin/products   - Add product
//! GET  /admin/inventory  - Ingredient table and form
//! POST /admin/inventory  - Add ingredient
//! ```
//!
//! Everything except the login page requires [`RequireAdmin`](crate::middleware::RequireAdmin).

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::models::AdminSession;
use crate::state::AppState;

/// Sidebar entry.
pub struct SidebarLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// Sidebar entries in display order.
pub static SIDEBAR: [SidebarLink; 4] = [
    SidebarLink {
        name: "Orders",
        path: "/admin/orders",
    },
    SidebarLink {
        name: "Inventory",
        path: "/admin/inventory",
    },
    SidebarLink {
        name: "Products",
        path: "/admin/products",
    },
    SidebarLink {
        name: "Customers",
        path: "/admin/customers",
    },
];

/// Layout data for back-office pages.
pub struct AdminLayout {
    pub title: &'static str,
    pub admin: AdminSession,
    pub sidebar: &'static [SidebarLink],
}

impl AdminLayout {
    #[must_use]
    pub fn new(title: &'static str, admin: AdminSession) -> Self {
        Self {
            title,
            admin,
            sidebar: &SIDEBAR,
        }
    }
}

/// Create the back-office router, nested under `/admin`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/admin/dashboard") }))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/orders", get(dashboard::orders))
        .route("/customers", get(dashboard::customers))
        .route("/products", get(products::index).post(products::create))
        .route("/inventory", get(inventory::index).post(inventory::create))
}
