//! Business logic services for the storefront.
//!
//! Every service is generic over [`LocalStore`](crate::store::LocalStore)
//! so it runs the same against a visitor's session and the in-memory store
//! used by tests.
//!
//! # Services
//!
//! - `auth` - Demo sign-in, registration, and the back-office session
//! - `cart` - Cart persistence around the core cart reducer
//! - `checkout` - Simulated order placement
//! - `newsletter` - Newsletter signup validation
//! - `toasts` - Queue of notifications for the next page
//! - `latency` - Simulated network delays

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod latency;
pub mod newsletter;
pub mod toasts;

pub use auth::{AuthError, AuthService};
pub use cart::{CartService, CartServiceError};
pub use checkout::{CheckoutError, CheckoutService};
pub use latency::{Latency, Pause};
pub use newsletter::{NewsletterError, NewsletterService};
