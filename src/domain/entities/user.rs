//! Booking account entity.

use serde::{Deserialize, Serialize};

use super::Roles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Account identity as returned by the booking API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub roles: Roles,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, roles: Roles) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            roles,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }
}

/// Account fields sent when creating or editing a user.
///
/// Absent fields are left untouched by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Roles>,
}

impl UserDraft {
    /// Draft for a brand new account.
    #[must_use]
    pub fn new_account(email: impl Into<String>, password: impl Into<String>, is_admin: bool) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            roles: Some(Roles::for_admin_flag(is_admin)),
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_admin_flag(mut self, is_admin: bool) -> Self {
        self.roles = Some(Roles::for_admin_flag(is_admin));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.roles.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    #[test]
    fn test_deserialize_identity() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"email":"a@b.com","roles":["ROLE_USER"]}"#).unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.email, "a@b.com");
        assert!(user.roles.contains(Role::User));
        assert!(!user.is_admin());
    }

    #[test]
    fn test_missing_roles_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":7,"email":"x@y.z"}"#).unwrap();
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_update_draft_skips_absent_fields() {
        let draft = UserDraft::default().with_email("new@b.com");
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json, serde_json::json!({ "email": "new@b.com" }));
    }

    #[test]
    fn test_new_account_draft() {
        let draft = UserDraft::new_account("a@b.com", "secret", true);
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.com",
                "password": "secret",
                "roles": ["ROLE_ADMIN", "ROLE_USER"],
            })
        );
    }
}
