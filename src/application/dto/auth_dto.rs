//! Authentication DTOs.

use crate::domain::entities::User;

/// Which authentication endpoint a request targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    Login,
    /// New account.
    Register,
}

impl AuthMode {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "registration",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            mode: AuthMode::Login,
        }
    }

    /// Creates new registration request.
    #[must_use]
    pub fn register(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode: AuthMode::Register,
            ..Self::login(email, password)
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mode", &self.mode)
            .finish()
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Authenticated user.
    pub user: User,
    /// Server confirmation message.
    pub message: Option<String>,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(user: User, message: Option<String>) -> Self {
        Self { user, message }
    }
}
