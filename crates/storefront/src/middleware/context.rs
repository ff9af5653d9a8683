//! Per-page template context.
//!
//! Every full page renders the navbar (user menu and cart badge) and any
//! queued toasts, so handlers take a [`PageContext`] and pass it to their
//! template as `ctx`.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use tower_sessions::Session;

use home_harvest_core::User;

use crate::error::AppError;
use crate::models::Toast;
use crate::services::{AuthService, CartService, Latency, toasts};

/// Data shared by every page layout.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Signed-in storefront user.
    pub user: Option<User>,
    /// Units in the cart, for the navbar badge.
    pub cart_count: u32,
    /// Toasts queued by earlier requests. Taking them removes them.
    pub toasts: Vec<Toast>,
    /// Path of the current request, for active nav links.
    pub path: String,
}

impl PageContext {
    /// Whether `prefix` is the current section.
    #[must_use]
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.path == "/"
        } else {
            self.path.starts_with(prefix)
        }
    }

    /// Whether the signed-in user has the admin flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers strip their prefix from `parts.uri`.
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.path())
            .to_string();
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self {
                path,
                ..Self::default()
            });
        };

        let user = AuthService::new(session, Latency::disabled())
            .current_user()
            .await?;
        let cart_count = CartService::new(session).load().await?.item_count();
        let toasts = toasts::take(session).await?;

        Ok(Self {
            user,
            cart_count,
            toasts,
            path,
        })
    }
}
