//! Storefront user types.

use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// A storefront user.
///
/// Either one of the demo accounts or a record registered in the visitor's
/// own session. There is no password field: every account signs in with the
/// shared demo password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub is_admin: bool,
}

impl User {
    /// First word of the display name, used in greetings and the navbar.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Label shown on the account page.
    #[must_use]
    pub const fn account_type(&self) -> &'static str {
        if self.is_admin { "Admin" } else { "Customer" }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: &str, is_admin: bool) -> User {
        User {
            id: UserId::new("2"),
            name: name.to_string(),
            email: Email::parse("user@example.com").unwrap(),
            is_admin,
        }
    }

    #[test]
    fn test_first_name() {
        assert_eq!(user("Regular User", false).first_name(), "Regular");
        assert_eq!(user("Cher", false).first_name(), "Cher");
    }

    #[test]
    fn test_account_type() {
        assert_eq!(user("Admin User", true).account_type(), "Admin");
        assert_eq!(user("Regular User", false).account_type(), "Customer");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(user("Regular User", false)).unwrap();
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["id"], "2");
    }
}
