//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame, referrer, permissions)
//! 5. Session layer (tower-sessions, in-memory store)
//!
//! Extractors for handlers live alongside: [`RequireUser`],
//! [`RequireAdmin`] and [`PageContext`].

pub mod auth;
pub mod context;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{AuthRejection, RequireAdmin, RequireUser};
pub use context::PageContext;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
