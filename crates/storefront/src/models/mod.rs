//! Domain models for the storefront.
//!
//! Values persisted in the visitor's session that have no home in the core
//! crate.

pub mod session;
pub mod toast;

pub use session::AdminSession;
pub use toast::{Toast, ToastVariant};
