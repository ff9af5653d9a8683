//! Home Harvest Core - Shared types and cart logic.
//!
//! This crate provides the domain types used by the storefront:
//! - product catalog entries and their nutrition facts
//! - users and the demo accounts
//! - the shopping cart reducer and its order summary
//! - order receipts produced by checkout
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Everything here can be unit tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, and statuses
//! - [`product`] - Catalog products and categories
//! - [`user`] - Storefront users
//! - [`cart`] - Cart reducer (add, remove, update quantity, clear, totals)
//! - [`order`] - Order receipts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod product;
pub mod types;
pub mod user;

pub use cart::{Cart, CartError, CartItem, OrderSummary};
pub use order::Order;
pub use product::{Category, Nutrition, Product};
pub use types::*;
pub use user::User;
