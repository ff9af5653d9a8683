//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
///
/// The `Display` text of the user-facing variants is shown verbatim in the
/// error toast.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login form submitted with a blank field.
    #[error("Please enter both email and password.")]
    MissingCredentials,

    /// Signup form submitted with a blank field.
    #[error("Please fill all required fields.")]
    MissingFields,

    /// Invalid email format.
    #[error("Please enter a valid email address.")]
    InvalidEmail(#[from] home_harvest_core::EmailError),

    /// Wrong password or unknown email.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email already used by a demo or registered user.
    #[error("Email already in use")]
    EmailInUse,

    /// Store read or write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Whether the error comes from the visitor's input rather than the server.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
