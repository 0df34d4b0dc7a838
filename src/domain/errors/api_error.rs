//! Request gateway error types.

use thiserror::Error;

/// Message used when a rejection carries no `error` field.
pub const FALLBACK_REJECTION_MESSAGE: &str = "an error occurred";
/// Message used for every transport-level failure.
pub const CONNECTION_ERROR_MESSAGE: &str = "connection error";
/// Message used when an authenticated call finds no stored credential.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "credential not found";

/// Result of a gateway call: a payload or a human-readable error.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure outcomes of a gateway call.
///
/// `Display` is the message shown to the user. Transport details are kept in
/// `reason` for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No stored credential; the network was never touched.
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// The API answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The call failed before a usable answer came back.
    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    Transport { reason: String },
}

impl ApiError {
    /// Creates rejection error, falling back to the generic message.
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected {
            status,
            message: message.unwrap_or_else(|| FALLBACK_REJECTION_MESSAGE.to_string()),
        }
    }

    /// Creates transport error.
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns the HTTP status of a rejection.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::MissingCredential.to_string(), "credential not found");
        assert_eq!(
            ApiError::transport("dns failure").to_string(),
            "connection error"
        );
        assert_eq!(
            ApiError::rejected(409, Some("slot already taken".into())).to_string(),
            "slot already taken"
        );
        assert_eq!(ApiError::rejected(500, None).to_string(), "an error occurred");
    }

    #[test]
    fn test_classification() {
        let rejected = ApiError::rejected(401, None);
        assert!(rejected.is_rejection());
        assert_eq!(rejected.status(), Some(401));

        let transport = ApiError::transport("reset");
        assert!(transport.is_transport());
        assert_eq!(transport.status(), None);
    }
}
