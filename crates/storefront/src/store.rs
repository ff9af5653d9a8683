//! Per-visitor key-value store.
//!
//! Every piece of visitor state (signed-in user, registered users, cart,
//! admin flag, pending toasts) is a JSON value under a fixed key. In the
//! running server the store is the visitor's `tower-sessions` session; unit
//! tests use [`InMemoryStore`].

use std::collections::HashMap;
use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_sessions::Session;

/// Keys used in the store.
pub mod keys {
    /// The signed-in storefront user.
    pub const USER: &str = "user";

    /// Users registered through the signup page.
    pub const REGISTERED_USERS: &str = "registeredUsers";

    /// Back-office session record.
    pub const ADMIN_AUTH: &str = "adminAuth";

    /// Cart items.
    pub const CART: &str = "cart";

    /// Notifications waiting to be shown on the next page.
    pub const TOASTS: &str = "toasts";
}

/// Errors raised by a [`LocalStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A flat mapping from key to JSON value.
///
/// Writes take effect immediately; there is no batching or transaction.
pub trait LocalStore: Send + Sync {
    /// Read the raw value under `key`.
    fn get_value(&self, key: &str)
    -> impl Future<Output = Result<Option<Value>, StoreError>> + Send;

    /// Replace the raw value under `key`.
    fn insert_value(
        &self,
        key: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Read and deserialize the value under `key`.
    fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<T>, StoreError>> + Send {
        async move {
            let value = self.get_value(key).await?;
            Ok(value.map(serde_json::from_value).transpose()?)
        }
    }

    /// Serialize `value` and store it under `key`.
    fn insert<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        let value = serde_json::to_value(value);
        async move { self.insert_value(key, value?).await }
    }
}

impl LocalStore for Session {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(Self::get_value(self, key).await?)
    }

    async fn insert_value(&self, key: &str, value: Value) -> Result<(), StoreError> {
        Self::insert_value(self, key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.remove_value(key).await?;
        Ok(())
    }
}

/// Store backed by a plain map, for tests and tooling.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently holds a value.
    pub async fn contains(&self, key: &str) -> bool {
        self.values.lock().await.contains_key(key)
    }
}

impl LocalStore for InMemoryStore {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn insert_value(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryStore::new();
        store.insert(keys::CART, &vec![1, 2, 3]).await.unwrap();

        let value: Option<Vec<i32>> = store.get(keys::CART).await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = InMemoryStore::new();
        let value: Option<String> = store.get(keys::USER).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryStore::new();
        store.insert(keys::ADMIN_AUTH, &true).await.unwrap();
        assert!(store.contains(keys::ADMIN_AUTH).await);

        store.remove(keys::ADMIN_AUTH).await.unwrap();
        assert!(!store.contains(keys::ADMIN_AUTH).await);

        // Removing again is fine.
        store.remove(keys::ADMIN_AUTH).await.unwrap();
    }

    #[tokio::test]
    async fn test_type_mismatch_is_serialization_error() {
        let store = InMemoryStore::new();
        store.insert(keys::USER, "not a number").await.unwrap();

        let result: Result<Option<u32>, _> = store.get(keys::USER).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
