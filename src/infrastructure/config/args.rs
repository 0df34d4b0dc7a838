use super::app_config::LogLevel;
use crate::domain::entities::{ActivityDraft, ActivityType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "aquarhone",
    version,
    about = "A terminal client for the Aquarhone water-activity booking service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "AQUARHONE_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Booking API base address.
    #[arg(long, value_name = "URL", env = "AQUARHONE_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in and store the credential.
    Login(CredentialsArgs),

    /// Create an account and sign in.
    Register(CredentialsArgs),

    /// Forget the stored credential.
    Logout,

    /// Show the signed-in account.
    Whoami,

    /// Show the dashboard.
    Dashboard,

    /// List activities.
    Activities {
        /// Only show one kind of activity.
        #[arg(long = "type", value_name = "TYPE")]
        activity_type: Option<ActivityType>,
    },

    /// Show one activity and its free slots.
    Activity { id: u64 },

    /// Reserve a slot of an activity.
    Reserve {
        activity_id: u64,

        /// Slot start time, as listed by `activity`.
        #[arg(long, value_name = "DATETIME")]
        slot: Option<String>,
    },

    /// List your reservations.
    Reservations,

    /// Cancel one of your reservations.
    Cancel { id: u64 },

    /// Administration commands.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum AdminCommand {
    /// List every activity.
    Activities,

    /// Add an activity to the catalog.
    CreateActivity(ActivityArgs),

    /// Edit an activity.
    UpdateActivity {
        id: u64,
        #[command(flatten)]
        fields: ActivityArgs,
    },

    /// Remove an activity.
    DeleteActivity { id: u64 },

    /// List every account.
    Users,

    /// Show one account.
    User { id: u64 },

    /// Create an account.
    CreateUser {
        email: String,

        #[arg(long, env = "AQUARHONE_PASSWORD", hide_env_values = true)]
        password: String,

        /// Grant administrator rights.
        #[arg(long)]
        admin: bool,
    },

    /// Edit an account.
    UpdateUser {
        id: u64,

        #[arg(long)]
        email: Option<String>,

        /// Grant or revoke administrator rights.
        #[arg(long)]
        admin: Option<bool>,
    },

    /// Delete an account.
    DeleteUser { id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CredentialsArgs {
    pub email: String,

    #[arg(long, env = "AQUARHONE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ActivityArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub activity_type: Option<ActivityType>,

    #[arg(long)]
    pub location: Option<String>,

    /// Bookable slot start time. Repeat for several slots.
    #[arg(long = "slot", value_name = "DATETIME")]
    pub slots: Vec<String>,

    /// Decimal price, e.g. 25.00.
    #[arg(long)]
    pub price: Option<String>,

    /// Number of free spots.
    #[arg(long)]
    pub spots: Option<i64>,
}

impl From<ActivityArgs> for ActivityDraft {
    fn from(args: ActivityArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            activity_type: args.activity_type,
            location: args.location,
            available_slots: (!args.slots.is_empty()).then_some(args.slots),
            price: args.price,
            remaining_spots: args.spots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reserve() {
        let args = CliArgs::parse_from([
            "aquarhone",
            "reserve",
            "4",
            "--slot",
            "2030-06-01T09:00:00+00:00",
        ]);

        assert_eq!(
            args.command,
            Command::Reserve {
                activity_id: 4,
                slot: Some("2030-06-01T09:00:00+00:00".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_activity_type_filter() {
        let args = CliArgs::parse_from(["aquarhone", "activities", "--type", "croisiere"]);

        assert_eq!(
            args.command,
            Command::Activities {
                activity_type: Some(ActivityType::Cruise),
            }
        );
    }

    #[test]
    fn test_unknown_activity_type_is_rejected() {
        assert!(CliArgs::try_parse_from(["aquarhone", "activities", "--type", "surf"]).is_err());
    }

    #[test]
    fn test_parse_admin_create_activity() {
        let args = CliArgs::parse_from([
            "aquarhone",
            "admin",
            "create-activity",
            "--name",
            "Evening canoe",
            "--type",
            "canoe",
            "--slot",
            "2030-06-01T18:00:00+00:00",
            "--slot",
            "2030-06-02T18:00:00+00:00",
            "--spots",
            "6",
        ]);

        let Command::Admin(AdminCommand::CreateActivity(fields)) = args.command else {
            panic!("expected create-activity");
        };
        let draft = ActivityDraft::from(fields);

        assert_eq!(draft.name.as_deref(), Some("Evening canoe"));
        assert_eq!(draft.activity_type, Some(ActivityType::Canoe));
        assert_eq!(draft.available_slots.map(|s| s.len()), Some(2));
        assert_eq!(draft.remaining_spots, Some(6));
        assert!(draft.price.is_none());
    }

    #[test]
    fn test_activity_args_without_slots_leave_slots_untouched() {
        let draft = ActivityDraft::from(ActivityArgs {
            price: Some("30.00".to_string()),
            ..ActivityArgs::default()
        });

        assert!(draft.available_slots.is_none());
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_parse_login_password_flag() {
        let args = CliArgs::parse_from(["aquarhone", "login", "a@b.com", "--password", "pw"]);

        assert_eq!(
            args.command,
            Command::Login(CredentialsArgs {
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            })
        );
    }
}
