//! Authentication service.
//!
//! Demo sign-in against two fixed accounts plus any users registered in the
//! visitor's own store. Every account shares one password, nothing is
//! hashed, and sessions never expire. The back office has a separate
//! credential pair and session record.

mod error;

pub use error::AuthError;

use home_harvest_core::{Email, User, UserId};

use crate::config::AdminCredentials;
use crate::models::AdminSession;
use crate::services::latency::{Latency, Pause};
use crate::store::{LocalStore, keys};

/// Password shared by every storefront account.
pub const DEMO_PASSWORD: &str = "password";

/// Demo accounts as `(id, name, email, is_admin)`.
const DEMO_ACCOUNTS: [(&str, &str, &str, bool); 2] = [
    ("1", "Admin User", "admin@example.com", true),
    ("2", "Regular User", "user@example.com", false),
];

/// The two built-in accounts.
#[must_use]
pub fn demo_users() -> Vec<User> {
    DEMO_ACCOUNTS
        .iter()
        .filter_map(|(id, name, email, is_admin)| {
            Some(User {
                id: UserId::new(*id),
                name: (*name).to_string(),
                email: Email::parse(email).ok()?,
                is_admin: *is_admin,
            })
        })
        .collect()
}

/// Authentication service.
pub struct AuthService<'a, S> {
    store: &'a S,
    latency: Latency,
}

impl<'a, S: LocalStore> AuthService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// The signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be read.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.store.get(keys::USER).await?)
    }

    /// Users registered in this store, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be read.
    pub async fn registered_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self
            .store
            .get(keys::REGISTERED_USERS)
            .await?
            .unwrap_or_default())
    }

    // =========================================================================
    // Storefront Accounts
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// The email is matched case-insensitively against the demo accounts
    /// first, then against registered users.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank and
    /// `AuthError::InvalidCredentials` if no account matches.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        self.latency.pause(Pause::Login).await;

        let user = self
            .find_by_email(email)
            .await?
            .filter(|_| password == DEMO_PASSWORD)
            .ok_or(AuthError::InvalidCredentials)?;

        self.store.insert(keys::USER, &user).await?;
        tracing::info!(user_id = %user.id, "User signed in");

        Ok(user)
    }

    /// Register a new account and sign it in.
    ///
    /// The password is required but never stored: every account signs in
    /// with [`DEMO_PASSWORD`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if a field is blank,
    /// `AuthError::InvalidEmail` if the email is malformed, and
    /// `AuthError::EmailInUse` if the email already belongs to an account.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let email = Email::parse(email.trim())?;

        self.latency.pause(Pause::Register).await;

        if self.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::EmailInUse);
        }

        let user = User {
            id: UserId::registered_at(chrono::Utc::now().timestamp_millis()),
            name: name.to_string(),
            email,
            is_admin: false,
        };

        let mut registered = self.registered_users().await?;
        registered.push(user.clone());
        self.store.insert(keys::REGISTERED_USERS, &registered).await?;
        self.store.insert(keys::USER, &user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Sign out. Signing out while signed out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be written.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(keys::USER).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        if let Some(user) = demo_users().into_iter().find(|u| u.email.matches(email)) {
            return Ok(Some(user));
        }
        Ok(self
            .registered_users()
            .await?
            .into_iter()
            .find(|u| u.email.matches(email)))
    }

    // =========================================================================
    // Back Office
    // =========================================================================

    /// The back-office session, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be read.
    pub async fn admin_session(&self) -> Result<Option<AdminSession>, AuthError> {
        let session: Option<AdminSession> = self.store.get(keys::ADMIN_AUTH).await?;
        Ok(session.filter(|s| s.is_admin))
    }

    /// Sign in to the back office.
    ///
    /// Both fields must match `credentials` exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank and
    /// `AuthError::InvalidCredentials` on mismatch.
    pub async fn admin_login(
        &self,
        credentials: &AdminCredentials,
        email: &str,
        password: &str,
    ) -> Result<AdminSession, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !credentials.matches(email, password) {
            tracing::info!("Back-office login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = AdminSession::new(email);
        self.store.insert(keys::ADMIN_AUTH, &session).await?;
        tracing::info!("Back-office session started");

        Ok(session)
    }

    /// Leave the back office.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be written.
    pub async fn admin_logout(&self) -> Result<(), AuthError> {
        self.store.remove(keys::ADMIN_AUTH).await?;
        Ok(())
    }
}
