//! Login, registration and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{AuthMode, LoginRequest, LoginResponse};
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthPort, CredentialStorePort, NavigatorPort};
use crate::domain::route::Route;

/// Handles the authentication workflow and owns writes to the credential.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn CredentialStorePort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
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

    /// Signs in or registers, then stores the issued credential.
    ///
    /// # Errors
    /// Returns `InvalidInput` for blank fields, the API error when the
    /// server refuses, or a storage error if the credential cannot be kept.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        let email = request.email.trim();
        if email.is_empty() || request.password.is_empty() {
            return Err(ClientError::invalid_input("email and password are required"));
        }

        debug!(mode = %request.mode, "Attempting authentication");

        let grant = match request.mode {
            AuthMode::Login => self.auth_port.login(email, &request.password).await,
            AuthMode::Register => self.auth_port.register(email, &request.password).await,
        }
        .inspect_err(|e| warn!(error = %e, mode = %request.mode, "Authentication failed"))?;

        self.storage_port.set(&grant.credential).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist credential");
            e
        })?;

        info!(
            user_id = %grant.user.id,
            credential = %grant.credential.masked(),
            "Successfully authenticated"
        );

        self.navigator.navigate(Route::Dashboard);

        Ok(LoginResponse::new(grant.user, grant.message))
    }

    /// Erases the stored credential and returns to the login view.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        debug!("Deleting stored credential");
        self.storage_port.clear().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to delete stored credential");
            e
        })?;

        info!("Signed out");
        self.navigator.navigate(Route::Login);
        Ok(())
    }
}
