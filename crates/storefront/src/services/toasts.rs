//! Notification queue.

use crate::models::Toast;
use crate::store::{LocalStore, StoreError, keys};

/// Queue `toast` for the next rendered page.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub async fn push<S: LocalStore>(store: &S, toast: Toast) -> Result<(), StoreError> {
    let mut toasts: Vec<Toast> = store.get(keys::TOASTS).await?.unwrap_or_default();
    toasts.push(toast);
    store.insert(keys::TOASTS, &toasts).await
}

/// Remove and return every queued toast.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub async fn take<S: LocalStore>(store: &S) -> Result<Vec<Toast>, StoreError> {
    let toasts: Vec<Toast> = store.get(keys::TOASTS).await?.unwrap_or_default();
    if !toasts.is_empty() {
        store.remove(keys::TOASTS).await?;
    }
    Ok(toasts)
}
