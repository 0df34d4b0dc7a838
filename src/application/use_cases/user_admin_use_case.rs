//! Account administration.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Capability, Session, User, UserDraft, UserId};
use crate::domain::errors::ClientError;
use crate::domain::ports::BookingPort;

#[derive(Clone)]
pub struct UserAdminUseCase {
    booking_port: Arc<dyn BookingPort>,
}

impl UserAdminUseCase {
    #[must_use]
    pub const fn new(booking_port: Arc<dyn BookingPort>) -> Self {
        Self { booking_port }
    }

    /// # Errors
    /// Returns `Forbidden` for non-administrators, or the API error.
    pub async fn users(&self, session: &Session) -> Result<Vec<User>, ClientError> {
        authorize(session)?;
        Ok(self.booking_port.users().await?)
    }

    /// # Errors
    /// Returns `Forbidden` for non-administrators, or the API error.
    pub async fn user(&self, session: &Session, id: UserId) -> Result<User, ClientError> {
        authorize(session)?;
        Ok(self.booking_port.user(id).await?)
    }

    /// Creates an account, optionally with administrator rights.
    ///
    /// # Errors
    /// Returns `Forbidden`, `InvalidInput` for blank fields, or the API error.
    pub async fn create_user(
        &self,
        session: &Session,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, ClientError> {
        authorize(session)?;
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::invalid_input("email and password are required"));
        }

        let user = self
            .booking_port
            .create_user(&UserDraft::new_account(email, password, is_admin))
            .await?;
        info!(user_id = %user.id, is_admin, "User created");
        Ok(user)
    }

    /// Changes the email and/or the administrator flag of an account.
    ///
    /// # Errors
    /// Returns `Forbidden`, `InvalidInput` when nothing changes, or the API error.
    pub async fn update_user(
        &self,
        session: &Session,
        id: UserId,
        email: Option<&str>,
        is_admin: Option<bool>,
    ) -> Result<User, ClientError> {
        authorize(session)?;

        let mut draft = UserDraft::default();
        if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
            draft = draft.with_email(email);
        }
        if let Some(is_admin) = is_admin {
            draft = draft.with_admin_flag(is_admin);
        }
        if draft.is_empty() {
            return Err(ClientError::invalid_input("nothing to update"));
        }

        let user = self.booking_port.update_user(id, &draft).await?;
        info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// # Errors
    /// Returns `Forbidden`, or the API error.
    pub async fn delete_user(&self, session: &Session, id: UserId) -> Result<(), ClientError> {
        authorize(session)?;
        self.booking_port.delete_user(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}

fn authorize(session: &Session) -> Result<(), ClientError> {
    if session.can(Capability::ManageUsers) {
        Ok(())
    } else {
        Err(ClientError::Forbidden)
    }
}
