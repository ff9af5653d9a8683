//! Newsletter signup.
//!
//! Validates the address and pretends to subscribe it. Nothing is stored.

use thiserror::Error;

use home_harvest_core::Email;

use crate::services::latency::{Latency, Pause};

/// Success message shown after subscribing.
pub const SUBSCRIBED_MESSAGE: &str = "You've been added to our newsletter.";

/// Validation failures for the signup form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Newsletter service.
pub struct NewsletterService {
    latency: Latency,
}

impl NewsletterService {
    #[must_use]
    pub const fn new(latency: Latency) -> Self {
        Self { latency }
    }

    /// Subscribe `email` to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns `NewsletterError::MissingEmail` for a blank address and
    /// `NewsletterError::InvalidEmail` for a malformed one.
    pub async fn subscribe(&self, email: &str) -> Result<Email, NewsletterError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(NewsletterError::MissingEmail);
        }
        let email = Email::parse(email).map_err(|_| NewsletterError::InvalidEmail)?;

        self.latency.pause(Pause::Newsletter).await;

        tracing::info!(domain = email.domain(), "Newsletter signup");
        Ok(email)
    }
}
