//! Reservation entity.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityId, ActivityType};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub u64);

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReservationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Activity summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedActivity {
    pub id: ActivityId,
    pub name: String,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub activity: ReservedActivity,
    pub date_time: String,
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Reservation {
    /// Parses the slot start time.
    ///
    /// Offsets are honoured; timestamps without one are read as UTC.
    #[must_use]
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        parse_slot_time(&self.date_time)
    }

    /// Only confirmed reservations that have not started yet can be cancelled.
    #[must_use]
    pub fn can_cancel_at(&self, now: DateTime<Utc>) -> bool {
        self.status == ReservationStatus::Confirmed
            && self.scheduled_at().is_some_and(|at| at > now)
    }
}

/// Parses a slot time as sent by the API.
#[must_use]
pub fn parse_slot_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    fn reservation(status: ReservationStatus, date_time: &str) -> Reservation {
        Reservation {
            id: ReservationId(5),
            activity: ReservedActivity {
                id: ActivityId(1),
                name: "Kayak discovery".to_string(),
                activity_type: ActivityType::Kayak,
                location: "Lyon".to_string(),
                price: "20.00".to_string(),
            },
            date_time: date_time.to_string(),
            status,
            created_at: None,
            updated_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap()
    }

    #[test_case(ReservationStatus::Confirmed, "2030-06-02T09:00:00+00:00", true ; "confirmed_future")]
    #[test_case(ReservationStatus::Confirmed, "2030-05-30T09:00:00+00:00", false ; "confirmed_past")]
    #[test_case(ReservationStatus::Pending, "2030-06-02T09:00:00+00:00", false ; "pending_future")]
    #[test_case(ReservationStatus::Cancelled, "2030-06-02T09:00:00+00:00", false ; "cancelled_future")]
    #[test_case(ReservationStatus::Confirmed, "2030-06-01 12:30:00", true ; "naive_future")]
    #[test_case(ReservationStatus::Confirmed, "not a date", false ; "unparseable")]
    fn test_can_cancel(status: ReservationStatus, date_time: &str, expected: bool) {
        assert_eq!(reservation(status, date_time).can_cancel_at(now()), expected);
    }

    #[test]
    fn test_offset_is_honoured() {
        let parsed = parse_slot_time("2030-06-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, now());
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": 9,
            "activity": {"id": 2, "name": "Canoe", "activityType": "canoe", "location": "Vienne", "price": "30.00"},
            "dateTime": "2030-06-02T09:00:00+00:00",
            "status": "confirmed",
            "createdAt": "2030-01-01T00:00:00+00:00",
            "updatedAt": "2030-01-01T00:00:00+00:00"
        }"#;

        let parsed: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, ReservationStatus::Confirmed);
        assert_eq!(parsed.activity.activity_type, ActivityType::Canoe);
    }
}
