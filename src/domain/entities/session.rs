//! Resolved session and login grant.

use super::{Capability, Credential, User};

/// Identity resolved for the current command.
///
/// Derived from the "who am I" endpoint each time a protected view mounts and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn can(&self, capability: Capability) -> bool {
        self.user.roles.can(capability)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

/// Outcome of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    /// Bearer credential to persist.
    pub credential: Credential,
    /// Account the credential belongs to.
    pub user: User,
    /// Server-side confirmation message, if any.
    pub message: Option<String>,
}
