//! Email addresses for accounts and newsletter signups.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reasons an address is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is blank")]
    Blank,

    #[error("email address contains whitespace")]
    Whitespace,

    /// Not exactly one `@`, or nothing before it.
    #[error("email address needs a name before a single @")]
    Mailbox,

    /// Domain is empty, has no dot, or starts or ends with one.
    #[error("email domain '{0}' is not a valid host name")]
    Domain(String),
}

/// A syntactically plausible email address: `name@host.tld`.
///
/// Stored as entered (trimmed). Account lookups compare with
/// [`Email::matches`], which ignores ASCII case.
///
/// ```
/// use home_harvest_core::Email;
///
/// assert!(Email::parse("sam@homeharvest.com").is_ok());
/// assert!(Email::parse("sam@localhost").is_err());
/// assert!(Email::parse("sam harvest@example.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap an address.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] describing the first problem found.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let address = raw.trim();
        if address.is_empty() {
            return Err(EmailError::Blank);
        }
        if address.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let (mailbox, domain) = address.split_once('@').ok_or(EmailError::Mailbox)?;
        if mailbox.is_empty() || domain.contains('@') {
            return Err(EmailError::Mailbox);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::Domain(domain.to_string()));
        }

        Ok(Self(address.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }

    /// Whether `other` names the same address, ignoring case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for raw in [
            "user@example.com",
            "first.last+meals@homeharvest.co.uk",
            "  padded@example.org  ",
        ] {
            assert!(Email::parse(raw).is_ok(), "{raw}");
        }
        assert_eq!(
            Email::parse("  padded@example.org ").unwrap().as_str(),
            "padded@example.org"
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Email::parse("   "), Err(EmailError::Blank));
        assert_eq!(Email::parse("a b@example.com"), Err(EmailError::Whitespace));
        assert_eq!(Email::parse("no-at-sign"), Err(EmailError::Mailbox));
        assert_eq!(Email::parse("@example.com"), Err(EmailError::Mailbox));
        assert_eq!(Email::parse("a@b@example.com"), Err(EmailError::Mailbox));
        assert_eq!(
            Email::parse("fan@localhost"),
            Err(EmailError::Domain("localhost".to_string()))
        );
        assert!(matches!(Email::parse("fan@"), Err(EmailError::Domain(_))));
        assert!(matches!(Email::parse("fan@example."), Err(EmailError::Domain(_))));
    }

    #[test]
    fn test_domain() {
        let email = Email::parse("chef@homeharvest.com").unwrap();
        assert_eq!(email.domain(), "homeharvest.com");
    }

    #[test]
    fn test_matches_ignores_case() {
        let email = Email::parse("admin@example.com").unwrap();
        assert!(email.matches("Admin@Example.COM"));
        assert!(!email.matches("user@example.com"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Email = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(ok.to_string(), "user@example.com");
        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }
}
