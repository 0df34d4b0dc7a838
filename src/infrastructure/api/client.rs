//! Booking API client.

use async_trait::async_trait;
use tracing::{debug, info};

use super::dto::{AuthResponse, CredentialsBody, NewReservationBody};
use super::gateway::{ApiRequest, RequestGateway};
use crate::domain::entities::{
    Activity, ActivityDraft, ActivityId, AuthGrant, Credential, Reservation, ReservationId, User,
    UserDraft, UserId,
};
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{AuthPort, BookingPort};

/// Typed access to every booking endpoint.
#[derive(Clone)]
pub struct BookingClient {
    gateway: RequestGateway,
}

impl BookingClient {
    #[must_use]
    pub const fn new(gateway: RequestGateway) -> Self {
        Self { gateway }
    }

    async fn authenticate(&self, path: &str, email: &str, password: &str) -> ApiResult<AuthGrant> {
        let request = ApiRequest::post(path).json(&CredentialsBody { email, password })?;
        let response: AuthResponse = self.gateway.send(request).await?;

        let credential = Credential::new(response.token)
            .ok_or_else(|| ApiError::transport("authentication response carried an empty token"))?;

        info!(user_id = %response.user.id, "Authenticated against booking API");

        Ok(AuthGrant {
            credential,
            user: response.user,
            message: response.message,
        })
    }
}

#[async_trait]
impl AuthPort for BookingClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthGrant> {
        debug!("Logging in");
        self.authenticate("/api/auth/login", email, password).await
    }

    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthGrant> {
        debug!("Registering new account");
        self.authenticate("/api/auth/register", email, password)
            .await
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.gateway
            .send_authenticated(ApiRequest::get("/api/auth/me"))
            .await
    }
}

#[async_trait]
impl BookingPort for BookingClient {
    async fn activities(&self) -> ApiResult<Vec<Activity>> {
        self.gateway
            .send_authenticated(ApiRequest::get("/api/activities"))
            .await
    }

    async fn activity(&self, id: ActivityId) -> ApiResult<Activity> {
        self.gateway
            .send_authenticated(ApiRequest::get(format!("/api/activities/{id}")))
            .await
    }

    async fn create_activity(&self, draft: &ActivityDraft) -> ApiResult<Activity> {
        let request = ApiRequest::post("/api/activities").json(draft)?;
        self.gateway.send_authenticated(request).await
    }

    async fn update_activity(&self, id: ActivityId, draft: &ActivityDraft) -> ApiResult<Activity> {
        let request = ApiRequest::put(format!("/api/activities/{id}")).json(draft)?;
        self.gateway.send_authenticated(request).await
    }

    async fn delete_activity(&self, id: ActivityId) -> ApiResult<()> {
        self.gateway
            .send_authenticated::<serde_json::Value>(ApiRequest::delete(format!(
                "/api/activities/{id}"
            )))
            .await
            .map(drop)
    }

    async fn reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.gateway
            .send_authenticated(ApiRequest::get("/api/reservations"))
            .await
    }

    async fn reservation(&self, id: ReservationId) -> ApiResult<Reservation> {
        self.gateway
            .send_authenticated(ApiRequest::get(format!("/api/reservations/{id}")))
            .await
    }

    async fn create_reservation(
        &self,
        activity_id: ActivityId,
        date_time: &str,
    ) -> ApiResult<Reservation> {
        let request = ApiRequest::post("/api/reservations").json(&NewReservationBody {
            activity_id,
            date_time,
        })?;
        self.gateway.send_authenticated(request).await
    }

    async fn cancel_reservation(&self, id: ReservationId) -> ApiResult<Reservation> {
        self.gateway
            .send_authenticated(ApiRequest::put(format!("/api/reservations/{id}/cancel")))
            .await
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        self.gateway
            .send_authenticated(ApiRequest::get("/api/users"))
            .await
    }

    async fn user(&self, id: UserId) -> ApiResult<User> {
        self.gateway
            .send_authenticated(ApiRequest::get(format!("/api/users/{id}")))
            .await
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User> {
        let request = ApiRequest::post("/api/users").json(draft)?;
        self.gateway.send_authenticated(request).await
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> ApiResult<User> {
        let request = ApiRequest::put(format!("/api/users/{id}")).json(draft)?;
        self.gateway.send_authenticated(request).await
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        self.gateway
            .send_authenticated::<serde_json::Value>(ApiRequest::delete(format!(
                "/api/users/{id}"
            )))
            .await
            .map(drop)
    }
}
