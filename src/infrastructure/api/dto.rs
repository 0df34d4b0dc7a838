use serde::{Deserialize, Serialize};

use crate::domain::entities::{ActivityId, User};

/// Login and registration request body.
#[derive(Debug, Serialize)]
pub struct CredentialsBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login and registration response body.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reservation creation request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservationBody<'a> {
    pub activity_id: ActivityId,
    pub date_time: &'a str,
}
