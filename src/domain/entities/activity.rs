//! Water activity entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub u64);

impl ActivityId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActivityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Kind of outing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Kayak,
    Paddle,
    Canoe,
    #[serde(rename = "croisiere")]
    Cruise,
}

impl ActivityType {
    pub const ALL: [Self; 4] = [Self::Kayak, Self::Paddle, Self::Canoe, Self::Cruise];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kayak => "Kayak",
            Self::Paddle => "Paddle",
            Self::Canoe => "Canoe",
            Self::Cruise => "Cruise",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kayak" => Ok(Self::Kayak),
            "paddle" => Ok(Self::Paddle),
            "canoe" => Ok(Self::Canoe),
            "cruise" | "croisiere" => Ok(Self::Cruise),
            other => Err(format!(
                "unknown activity type '{other}' (expected kayak, paddle, canoe or cruise)"
            )),
        }
    }
}

/// An activity offered by the booking service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub location: String,
    /// Slot start times, as sent back when reserving.
    #[serde(default)]
    pub available_slots: Vec<String>,
    /// Decimal price, kept as the API formats it.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    /// Can go negative when the service overbooks.
    pub remaining_spots: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Activity {
    /// Returns whether any spot is left.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.remaining_spots > 0
    }

    /// Slots a visitor may pick. Empty once the activity is fully booked.
    #[must_use]
    pub fn reservable_slots(&self) -> &[String] {
        if self.is_bookable() {
            &self.available_slots
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn offers_slot(&self, slot: &str) -> bool {
        self.reservable_slots().iter().any(|s| s == slot)
    }
}

/// Type filter for the activity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityFilter {
    #[default]
    All,
    Only(ActivityType),
}

impl ActivityFilter {
    #[must_use]
    pub fn matches(self, activity: &Activity) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => activity.activity_type == kind,
        }
    }

    #[must_use]
    pub fn apply(self, activities: Vec<Activity>) -> Vec<Activity> {
        activities.into_iter().filter(|a| self.matches(a)).collect()
    }
}

impl From<Option<ActivityType>> for ActivityFilter {
    fn from(value: Option<ActivityType>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// Activity fields sent when creating or editing an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_spots: Option<i64>,
}

impl ActivityDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
