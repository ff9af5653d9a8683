//! Shopping cart reducer.
//!
//! The cart is an ordered list of [`CartItem`]s keyed by product id. Every
//! operation keeps two invariants:
//!
//! - there is at most one entry per product (adding again increments)
//! - each quantity stays within `1..=product.in_stock`
//!
//! Persistence is the caller's job; the storefront writes the cart back to
//! the visitor's session after every mutation.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Price, ProductId};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Price = Price::new(rust_decimal::Decimal::from_parts(
    50, 0, 0, false, 0,
));

/// Flat shipping fee below the free-shipping threshold ($5.99).
pub const SHIPPING_FEE: Price = Price::new(rust_decimal::Decimal::from_parts(
    599, 0, 0, false, 2,
));

/// Errors produced by cart operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The requested quantity was zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    /// The product has no stock left.
    #[error("{0} is out of stock")]
    OutOfStock(String),
}

/// A product in the cart together with the chosen quantity.
///
/// The product fields are flattened so a persisted item looks like the
/// catalog entry plus a `quantity` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }

    /// Whether the quantity can still be decreased without removing the line.
    #[must_use]
    pub const fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    /// Whether another unit can be added without exceeding stock.
    #[must_use]
    pub const fn can_increment(&self) -> bool {
        self.quantity < self.product.in_stock
    }
}

/// Subtotal, shipping and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute the summary for a subtotal.
    ///
    /// Shipping is only charged on non-empty carts below the threshold.
    #[must_use]
    pub fn for_subtotal(subtotal: Price, is_empty: bool) -> Self {
        let shipping = if is_empty || subtotal >= FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            SHIPPING_FEE
        };

        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Whether shipping is free for this summary.
    #[must_use]
    pub const fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted items, restoring the invariants.
    ///
    /// Duplicate entries are merged and quantities clamped to stock.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            // Zero-stock or zero-quantity leftovers are dropped.
            let _ = cart.add(&item.product, item.quantity);
        }
        cart
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into an existing entry or appends a new one. The resulting
    /// quantity is clamped to the product's stock. Returns the new quantity
    /// of the entry.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ZeroQuantity` if `quantity` is zero and
    /// `CartError::OutOfStock` if the product has no stock.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if !product.is_available() {
            return Err(CartError::OutOfStock(product.name.clone()));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item
                .quantity
                .saturating_add(quantity)
                .min(product.in_stock);
            return Ok(item.quantity);
        }

        let quantity = quantity.min(product.in_stock);
        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
        Ok(quantity)
    }

    /// Remove the entry for `id`. Returns whether an entry was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() != before
    }

    /// Set the quantity of the entry for `id`.
    ///
    /// A quantity of zero or less removes the entry; anything above the
    /// product's stock is clamped. Unknown ids are ignored. Returns the
    /// resulting quantity, or `None` if there is no entry afterwards.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Option<u32> {
        if quantity <= 0 {
            self.remove(id);
            return None;
        }

        let item = self.items.iter_mut().find(|i| i.product.id == id)?;
        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
        item.quantity = requested.clamp(1, item.product.in_stock.max(1));
        Some(item.quantity)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity across all entries.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal, shipping and total.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_subtotal(self.total(), self.is_empty())
    }

    /// Total number of units (sum of quantities).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The entry for `id`, if any.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, returning its entries.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
