//! Activity catalog browsing and administration.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Activity, ActivityDraft, ActivityFilter, ActivityId, Capability, Session};
use crate::domain::errors::ClientError;
use crate::domain::ports::BookingPort;

/// Lists activities and, for administrators, edits the catalog.
#[derive(Clone)]
pub struct CatalogUseCase {
    booking_port: Arc<dyn BookingPort>,
}

impl CatalogUseCase {
    #[must_use]
    pub const fn new(booking_port: Arc<dyn BookingPort>) -> Self {
        Self { booking_port }
    }

    /// Lists activities matching `filter`.
    ///
    /// # Errors
    /// Returns the API error.
    pub async fn activities(&self, filter: ActivityFilter) -> Result<Vec<Activity>, ClientError> {
        let activities = self.booking_port.activities().await?;
        Ok(filter.apply(activities))
    }

    /// # Errors
    /// Returns the API error.
    pub async fn activity(&self, id: ActivityId) -> Result<Activity, ClientError> {
        Ok(self.booking_port.activity(id).await?)
    }

    /// # Errors
    /// Returns `Forbidden` for non-administrators, or the API error.
    pub async fn all_activities(&self, session: &Session) -> Result<Vec<Activity>, ClientError> {
        authorize(session)?;
        self.activities(ActivityFilter::All).await
    }

    /// Adds an activity. Name and type are required.
    ///
    /// # Errors
    /// Returns `Forbidden`, `InvalidInput`, or the API error.
    pub async fn create_activity(
        &self,
        session: &Session,
        draft: &ActivityDraft,
    ) -> Result<Activity, ClientError> {
        authorize(session)?;
        if draft.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(ClientError::invalid_input("activity name is required"));
        }
        if draft.activity_type.is_none() {
            return Err(ClientError::invalid_input("activity type is required"));
        }

        let activity = self.booking_port.create_activity(draft).await?;
        info!(activity_id = %activity.id, "Activity created");
        Ok(activity)
    }

    /// # Errors
    /// Returns `Forbidden`, `InvalidInput` for an empty draft, or the API error.
    pub async fn update_activity(
        &self,
        session: &Session,
        id: ActivityId,
        draft: &ActivityDraft,
    ) -> Result<Activity, ClientError> {
        authorize(session)?;
        if draft.is_empty() {
            return Err(ClientError::invalid_input("nothing to update"));
        }

        let activity = self.booking_port.update_activity(id, draft).await?;
        info!(activity_id = %id, "Activity updated");
        Ok(activity)
    }

    /// # Errors
    /// Returns `Forbidden`, or the API error.
    pub async fn delete_activity(&self, session: &Session, id: ActivityId) -> Result<(), ClientError> {
        authorize(session)?;
        self.booking_port.delete_activity(id).await?;
        info!(activity_id = %id, "Activity deleted");
        Ok(())
    }
}

fn authorize(session: &Session) -> Result<(), ClientError> {
    if session.can(Capability::ManageActivities) {
        Ok(())
    } else {
        Err(ClientError::Forbidden)
    }
}
