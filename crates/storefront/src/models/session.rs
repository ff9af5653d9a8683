//! Session-related types.

use serde::{Deserialize, Serialize};

/// Back-office session record, stored under the `adminAuth` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub is_admin: bool,
    pub email: String,
    pub name: String,
}

impl AdminSession {
    /// Display name given to every back-office session.
    pub const NAME: &'static str = "Admin User";

    /// Create a session for the given admin email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            email: email.into(),
            name: Self::NAME.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_shape() {
        let session = AdminSession::new("admin@homeharvest.com");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["email"], "admin@homeharvest.com");
        assert_eq!(json["name"], "Admin User");
    }
}
