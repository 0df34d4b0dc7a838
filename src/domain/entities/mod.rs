//! Domain entity definitions.

mod activity;
mod credential;
mod reservation;
mod role;
mod session;
mod user;

pub use activity::{Activity, ActivityDraft, ActivityFilter, ActivityId, ActivityType};
pub use credential::Credential;
pub use reservation::{Reservation, ReservationId, ReservationStatus, ReservedActivity};
pub use role::{Capability, Role, Roles};
pub use session::{AuthGrant, Session};
pub use user::{User, UserDraft, UserId};
