//! Cart persistence.
//!
//! Loads the cart from the store, applies one reducer operation from
//! [`home_harvest_core::Cart`], and writes the result back immediately.

use thiserror::Error;

use home_harvest_core::{Cart, CartError, CartItem, Product, ProductId};

use crate::store::{LocalStore, StoreError, keys};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cart service bound to one visitor's store.
pub struct CartService<'a, S> {
    store: &'a S,
}

impl<'a, S: LocalStore> CartService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The current cart; empty if nothing is stored.
    ///
    /// Stored items go back through the reducer, so duplicates merge and
    /// quantities are clamped to stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn load(&self) -> Result<Cart, StoreError> {
        let items: Option<Vec<CartItem>> = self.store.get(keys::CART).await?;
        Ok(items.map(Cart::from_items).unwrap_or_default())
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        self.store.insert(keys::CART, cart).await
    }

    /// Add `quantity` units of `product`. Returns the entry's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartServiceError::Cart` if the reducer rejects the add.
    pub async fn add(&self, product: &Product, quantity: u32) -> Result<u32, CartServiceError> {
        let mut cart = self.load().await?;
        let quantity = cart.add(product, quantity)?;
        self.save(&cart).await?;

        tracing::debug!(product_id = %product.id, quantity, "Cart item added");
        Ok(quantity)
    }

    /// Remove the entry for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub async fn remove(&self, id: ProductId) -> Result<Cart, StoreError> {
        let mut cart = self.load().await?;
        if cart.remove(id) {
            self.save(&cart).await?;
        }
        Ok(cart)
    }

    /// Set the quantity of the entry for `id`; zero or less removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub async fn update_quantity(&self, id: ProductId, quantity: i64) -> Result<Cart, StoreError> {
        let mut cart = self.load().await?;
        if cart.get(id).is_some() {
            cart.update_quantity(id, quantity);
            self.save(&cart).await?;
        }
        Ok(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.save(&Cart::new()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::store::InMemoryStore;
    use home_harvest_core::Price;

    fn product(id: i64) -> Product {
        Catalog::load()
            .unwrap()
            .product(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_persists_and_merges() {
        let store = InMemoryStore::new();
        let carts = CartService::new(&store);
        let bowl = product(1);

        assert_eq!(carts.add(&bowl, 1).await.unwrap(), 1);
        assert_eq!(carts.add(&bowl, 2).await.unwrap(), 3);

        let cart = carts.load().await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::from_cents(3897));
    }

    #[tokio::test]
    async fn test_add_clamps_to_stock() {
        let store = InMemoryStore::new();
        let carts = CartService::new(&store);
        let soup = product(5);

        assert_eq!(carts.add(&soup, 100).await.unwrap(), soup.in_stock);
    }

    #[tokio::test]
    async fn test_add_zero_is_rejected() {
        let store = InMemoryStore::new();
        let carts = CartService::new(&store);

        let result = carts.add(&product(1), 0).await;
        assert!(matches!(
            result,
            Err(CartServiceError::Cart(CartError::ZeroQuantity))
        ));
        assert!(!store.contains(keys::CART).await);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let store = InMemoryStore::new();
        let carts = CartService::new(&store);
        carts.add(&product(1), 1).await.unwrap();
        carts.add(&product(2), 1).await.unwrap();

        let cart = carts.update_quantity(ProductId::new(2), 4).await.unwrap();
        assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 4);

        let cart = carts.update_quantity(ProductId::new(2), 0).await.unwrap();
        assert!(cart.get(ProductId::new(2)).is_none());

        let cart = carts.remove(ProductId::new(1)).await.unwrap();
        assert!(cart.is_empty());
        assert!(carts.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_repairs_stored_items() {
        let store = InMemoryStore::new();
        let bowl = product(1);
        let soup = product(5);
        let stored = vec![
            CartItem {
                product: bowl.clone(),
                quantity: 1,
            },
            CartItem {
                product: soup.clone(),
                quantity: soup.in_stock + 50,
            },
            CartItem {
                product: bowl.clone(),
                quantity: 2,
            },
        ];
        store.insert(keys::CART, &stored).await.unwrap();

        let cart = CartService::new(&store).load().await.unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(bowl.id).unwrap().quantity, 3);
        assert_eq!(cart.get(soup.id).unwrap().quantity, soup.in_stock);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryStore::new();
        let carts = CartService::new(&store);
        carts.add(&product(3), 2).await.unwrap();

        carts.clear().await.unwrap();
        let cart = carts.load().await.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }
}
