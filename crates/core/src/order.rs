//! Order receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem, OrderSummary};
use crate::types::{OrderId, OrderStatus, UserId};

/// An order placed through the simulated checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from the cart contents.
    ///
    /// The cart itself is left untouched; callers clear it once the order
    /// has been accepted.
    #[must_use]
    pub fn from_cart(user_id: UserId, cart: &Cart, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            items: cart.items().to_vec(),
            summary: cart.summary(),
            status: OrderStatus::Pending,
            date: placed_at,
        }
    }

    /// Total number of units in the order.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;
    use crate::types::Price;

    #[test]
    fn test_from_cart_captures_items_and_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1299, 10), 2).unwrap();
        cart.add(&product(2, 999, 10), 1).unwrap();

        let order = Order::from_cart(UserId::new("2"), &cart, Utc::now());

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.summary.subtotal, Price::from_cents(3597));
        assert_eq!(order.summary.total, Price::from_cents(4196));
        // The cart is not consumed.
        assert_eq!(cart.len(), 2);
    }
}
