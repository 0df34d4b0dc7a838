//! Booking data port for activities, reservations and users.

use async_trait::async_trait;

use crate::domain::entities::{
    Activity, ActivityDraft, ActivityId, Reservation, ReservationId, User, UserDraft, UserId,
};
use crate::domain::errors::ApiResult;

/// Port for the bearer-authenticated booking endpoints.
#[async_trait]
pub trait BookingPort: Send + Sync {
    /// Fetches the whole activity catalog.
    async fn activities(&self) -> ApiResult<Vec<Activity>>;

    /// Fetches one activity.
    async fn activity(&self, id: ActivityId) -> ApiResult<Activity>;

    /// Creates an activity.
    async fn create_activity(&self, draft: &ActivityDraft) -> ApiResult<Activity>;

    /// Replaces fields of an activity.
    async fn update_activity(&self, id: ActivityId, draft: &ActivityDraft) -> ApiResult<Activity>;

    /// Deletes an activity.
    async fn delete_activity(&self, id: ActivityId) -> ApiResult<()>;

    /// Fetches the caller's reservations.
    async fn reservations(&self) -> ApiResult<Vec<Reservation>>;

    /// Fetches one reservation.
    async fn reservation(&self, id: ReservationId) -> ApiResult<Reservation>;

    /// Reserves a slot of an activity.
    async fn create_reservation(
        &self,
        activity_id: ActivityId,
        date_time: &str,
    ) -> ApiResult<Reservation>;

    /// Cancels a reservation.
    async fn cancel_reservation(&self, id: ReservationId) -> ApiResult<Reservation>;

    /// Fetches every account.
    async fn users(&self) -> ApiResult<Vec<User>>;

    /// Fetches one account.
    async fn user(&self, id: UserId) -> ApiResult<User>;

    /// Creates an account.
    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User>;

    /// Edits an account.
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> ApiResult<User>;

    /// Deletes an account.
    async fn delete_user(&self, id: UserId) -> ApiResult<()>;
}
