use std::fmt;

use super::entities::ActivityId;

/// A view the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Activities,
    Activity(ActivityId),
    Reserve(ActivityId),
    Reservations,
    AdminActivities,
    AdminUsers,
}

impl Route {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Login => "/auth".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Activities => "/activities".to_string(),
            Self::Activity(id) => format!("/activities/{id}"),
            Self::Reserve(id) => format!("/activities/{id}/reserve"),
            Self::Reservations => "/reservations".to_string(),
            Self::AdminActivities => "/admin/activities".to_string(),
            Self::AdminUsers => "/admin/users".to_string(),
        }
    }

    /// Whether the view sits behind the session guard.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
