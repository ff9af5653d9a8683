//! Simulated checkout.
//!
//! There is no payment and nothing is stored: a successful checkout builds
//! an [`Order`] receipt, logs it, and empties the cart.

use thiserror::Error;

use home_harvest_core::{Order, User};

use crate::services::cart::CartService;
use crate::services::latency::{Latency, Pause};
use crate::store::{LocalStore, StoreError, keys};

/// Reasons a checkout does not go through.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Please sign in")]
    SignInRequired,

    #[error("Empty cart")]
    EmptyCart,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CheckoutError {
    /// Longer explanation shown under the toast title.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SignInRequired => "You need to be signed in to checkout.",
            Self::EmptyCart => "Your cart is empty. Add some items before checking out.",
            Self::Store(_) => "Something went wrong. Please try again.",
        }
    }
}

/// Checkout service bound to one visitor's store.
pub struct CheckoutService<'a, S> {
    store: &'a S,
    latency: Latency,
}

impl<'a, S: LocalStore> CheckoutService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Place an order for the current cart.
    ///
    /// The cart is cleared only when the order goes through.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::SignInRequired` without a signed-in user and
    /// `CheckoutError::EmptyCart` when there is nothing to buy.
    pub async fn place_order(&self) -> Result<Order, CheckoutError> {
        let user: User = self
            .store
            .get(keys::USER)
            .await?
            .ok_or(CheckoutError::SignInRequired)?;

        let carts = CartService::new(self.store);
        let cart = carts.load().await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.latency.pause(Pause::Checkout).await;

        let order = Order::from_cart(user.id, &cart, chrono::Utc::now());
        carts.clear().await?;

        tracing::info!(
            order = %order.id.reference(),
            user_id = %order.user_id,
            items = order.item_count(),
            total = %order.summary.total,
            "Order placed"
        );

        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::services::auth::AuthService;
    use crate::store::InMemoryStore;
    use home_harvest_core::{OrderStatus, Price, ProductId};

    async fn fill_cart(store: &InMemoryStore) {
        let catalog = Catalog::load().unwrap();
        let carts = CartService::new(store);
        let bowl = catalog.product(ProductId::new(1)).unwrap();
        let latte = catalog.product(ProductId::new(7)).unwrap();
        carts.add(bowl, 2).await.unwrap();
        carts.add(latte, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_requires_user() {
        let store = InMemoryStore::new();
        fill_cart(&store).await;

        let result = CheckoutService::new(&store, Latency::disabled())
            .place_order()
            .await;
        assert!(matches!(result, Err(CheckoutError::SignInRequired)));
        assert_eq!(CartService::new(&store).load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_requires_items() {
        let store = InMemoryStore::new();
        AuthService::new(&store, Latency::disabled())
            .login("user@example.com", "password")
            .await
            .unwrap();

        let result = CheckoutService::new(&store, Latency::disabled())
            .place_order()
            .await;
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_places_order_and_clears_cart() {
        let store = InMemoryStore::new();
        AuthService::new(&store, Latency::disabled())
            .login("user@example.com", "password")
            .await
            .unwrap();
        fill_cart(&store).await;

        let order = CheckoutService::new(&store, Latency::disabled())
            .place_order()
            .await
            .unwrap();

        assert_eq!(order.user_id.as_str(), "2");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
        // 2 x 12.99 + 5.99 = 31.97, below the free shipping threshold.
        assert_eq!(order.summary.subtotal, Price::from_cents(3197));
        assert_eq!(order.summary.total, Price::from_cents(3796));
        assert!(CartService::new(&store).load().await.unwrap().is_empty());
    }
}
