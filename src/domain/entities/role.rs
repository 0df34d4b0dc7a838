use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something a session may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Browse the activity catalog.
    BrowseActivities,
    /// Create and cancel own reservations.
    ManageReservations,
    /// Create, edit and delete activities.
    ManageActivities,
    /// Create, edit and delete user accounts.
    ManageUsers,
}

/// Account role as issued by the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Regular customer.
    User,
    /// Back-office administrator.
    Admin,
}

impl Role {
    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Administrator",
        }
    }

    #[must_use]
    pub const fn grants(self, capability: Capability) -> bool {
        match capability {
            Capability::BrowseActivities | Capability::ManageReservations => true,
            Capability::ManageActivities | Capability::ManageUsers => {
                matches!(self, Self::Admin)
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Set of roles attached to an account.
///
/// Serialized as the API's list of role names. Unknown names are dropped on
/// decode so a new server-side role never breaks identity resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roles(Vec<Role>);

impl Roles {
    #[must_use]
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.sort_unstable_by(|a, b| b.cmp(a));
        roles.dedup();
        Self(roles)
    }

    /// Role set assigned by the user-administration form.
    #[must_use]
    pub fn for_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Self::new([Role::Admin, Role::User])
        } else {
            Self::new([Role::User])
        }
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin)
    }

    /// Returns whether any held role grants the capability.
    #[must_use]
    pub fn can(&self, capability: Capability) -> bool {
        self.0.iter().any(|role| role.grants(capability))
    }

    /// Label of the most privileged role.
    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        if self.is_admin() {
            Role::Admin.label()
        } else {
            Role::User.label()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Roles {
    fn from(names: Vec<String>) -> Self {
        Self::new(names.iter().filter_map(|name| match name.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                warn!(error = %e, "Ignoring unrecognized role");
                None
            }
        }))
    }
}

impl From<Roles> for Vec<String> {
    fn from(roles: Roles) -> Self {
        roles.0.iter().map(|role| role.as_str().to_string()).collect()
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|role| role.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Role::User, Capability::BrowseActivities, true ; "user_browses")]
    #[test_case(Role::User, Capability::ManageReservations, true ; "user_reserves")]
    #[test_case(Role::User, Capability::ManageActivities, false ; "user_cannot_manage_catalog")]
    #[test_case(Role::User, Capability::ManageUsers, false ; "user_cannot_manage_users")]
    #[test_case(Role::Admin, Capability::ManageActivities, true ; "admin_manages_catalog")]
    #[test_case(Role::Admin, Capability::ManageUsers, true ; "admin_manages_users")]
    fn test_role_grants(role: Role, capability: Capability, expected: bool) {
        assert_eq!(role.grants(capability), expected);
    }

    #[test]
    fn test_unknown_roles_are_dropped() {
        let roles: Roles =
            serde_json::from_str(r#"["ROLE_USER", "ROLE_SUPERVISOR", "ROLE_ADMIN"]"#).unwrap();

        assert!(roles.is_admin());
        assert_eq!(roles.iter().count(), 2);
    }

    #[test]
    fn test_roles_serialize_as_names() {
        let json = serde_json::to_string(&Roles::for_admin_flag(true)).unwrap();
        assert_eq!(json, r#"["ROLE_ADMIN","ROLE_USER"]"#);

        let json = serde_json::to_string(&Roles::for_admin_flag(false)).unwrap();
        assert_eq!(json, r#"["ROLE_USER"]"#);
    }

    #[test]
    fn test_empty_roles_grant_nothing() {
        let roles = Roles::default();
        assert!(!roles.can(Capability::BrowseActivities));
        assert_eq!(roles.primary_label(), "User");
    }
}
