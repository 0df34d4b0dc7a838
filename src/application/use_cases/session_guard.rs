//! Session guard for protected views.
//!
//! Every protected view mounts behind a guard. The guard reads the stored
//! credential, resolves it with exactly one "who am I" call and only then lets
//! the view render. Rejected credentials are erased; credentials that merely
//! could not be checked because the network failed are kept.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Session;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, CredentialStorePort, NavigatorPort};
use crate::domain::route::Route;

/// Where a guard stands for one mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Check in flight. Only a loading indicator is shown.
    #[default]
    Unknown,
    /// Identity resolved. Children render with this session.
    Authenticated(Session),
    /// No usable session. A redirect to login has been issued.
    Unauthenticated,
}

impl GuardState {
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Gatekeeper placed in front of every protected view.
#[derive(Clone)]
pub struct SessionGuard {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn CredentialStorePort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl SessionGuard {
    #[must_use]
    pub const fn new(
        auth_port: Arc<dyn AuthPort>,
        storage_port: Arc<dyn CredentialStorePort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            auth_port,
            storage_port,
            navigator,
        }
    }

    /// Runs the mount check and returns the terminal state.
    ///
    /// Never fails: every failure ends in `Unauthenticated` plus a redirect.
    pub async fn check(&self) -> GuardState {
        let has_credential = match self.storage_port.has_credential().await {
            Ok(present) => present,
            Err(e) => {
                warn!(error = %e, "Failed to read stored credential");
                false
            }
        };

        if !has_credential {
            debug!("No stored credential, redirecting to login");
            return self.redirect();
        }

        match self.auth_port.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id, roles = %user.roles, "Session resolved");
                GuardState::Authenticated(Session::new(user))
            }
            Err(ApiError::Rejected { status, message }) => {
                warn!(status, %message, "Stored credential rejected, clearing it");
                if let Err(e) = self.storage_port.clear().await {
                    warn!(error = %e, "Failed to clear rejected credential");
                }
                self.redirect()
            }
            Err(ApiError::Transport { reason }) => {
                warn!(%reason, "Could not verify session, keeping credential");
                self.redirect()
            }
            Err(ApiError::MissingCredential) => {
                debug!("Credential disappeared during check");
                self.redirect()
            }
        }
    }

    /// Renders `children` only once the session is resolved.
    ///
    /// Returns `None` when the mount ended in a redirect.
    pub async fn protect<T, F, Fut>(&self, children: F) -> Option<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.check().await {
            GuardState::Authenticated(session) => Some(children(session).await),
            GuardState::Unknown | GuardState::Unauthenticated => None,
        }
    }

    fn redirect(&self) -> GuardState {
        self.navigator.navigate(Route::Login);
        GuardState::Unauthenticated
    }
}
