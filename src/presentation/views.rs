//! Plain-text views.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::application::{GuardState, LoginResponse};
use crate::domain::entities::{Activity, ActivityFilter, Reservation, Session, User};
use crate::domain::route::Route;

/// Shown while a protected view waits for its session check.
pub const LOADING: &str = "Checking session...";

/// Neutral placeholder for a guard that has not resolved yet.
#[must_use]
pub const fn guard_placeholder(state: &GuardState) -> Option<&'static str> {
    match state {
        GuardState::Unknown => Some(LOADING),
        GuardState::Authenticated(_) | GuardState::Unauthenticated => None,
    }
}

/// Tells the user which command leads to `route`.
#[must_use]
pub fn route_hint(route: Route) -> String {
    let command = match route {
        Route::Login => "aquarhone login <email> --password <password>".to_string(),
        Route::Dashboard => "aquarhone dashboard".to_string(),
        Route::Activities => "aquarhone activities".to_string(),
        Route::Activity(id) => format!("aquarhone activity {id}"),
        Route::Reserve(id) => format!("aquarhone reserve {id} --slot <datetime>"),
        Route::Reservations => "aquarhone reservations".to_string(),
        Route::AdminActivities => "aquarhone admin activities".to_string(),
        Route::AdminUsers => "aquarhone admin users".to_string(),
    };
    format!("Next: {command}")
}

#[must_use]
pub fn signed_in(response: &LoginResponse) -> String {
    let mut out = format!("Signed in as {}", response.user.email);
    if let Some(message) = &response.message {
        let _ = write!(out, " ({message})");
    }
    out
}

#[must_use]
pub fn signed_out() -> String {
    "Signed out.".to_string()
}

#[must_use]
pub fn whoami(session: &Session) -> String {
    let user = session.user();
    format!("{} #{} [{}]", user.email, user.id, user.roles)
}

#[must_use]
pub fn dashboard(session: &Session) -> String {
    let user = session.user();
    let mut out = String::new();

    let _ = writeln!(out, "Welcome, {}", user.email);
    let _ = writeln!(out, "Role: {}", user.roles.primary_label());
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", route_hint(Route::Activities));
    let _ = writeln!(out, "  {}", route_hint(Route::Reservations));

    if session.is_admin() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Administration");
        let _ = writeln!(out, "  {}", route_hint(Route::AdminActivities));
        let _ = writeln!(out, "  {}", route_hint(Route::AdminUsers));
    }

    out
}

fn spots(activity: &Activity) -> String {
    match activity.remaining_spots {
        ..=0 => "fully booked".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{n} spots left"),
    }
}

#[must_use]
pub fn activity_list(activities: &[Activity], filter: ActivityFilter) -> String {
    if activities.is_empty() {
        return match filter {
            ActivityFilter::All => "No activities available.".to_string(),
            ActivityFilter::Only(kind) => format!("No {} activities available.", kind.label()),
        };
    }

    let mut out = String::new();
    for activity in activities {
        let _ = writeln!(
            out,
            "#{:<4} {:<8} {:<32} {:>8} EUR  {}",
            activity.id,
            activity.activity_type.label(),
            activity.name,
            activity.price,
            spots(activity)
        );
    }
    out
}

#[must_use]
pub fn activity_detail(activity: &Activity) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", activity.name, activity.activity_type.label());
    if !activity.location.is_empty() {
        let _ = writeln!(out, "Location: {}", activity.location);
    }
    let _ = writeln!(out, "Price: {} EUR", activity.price);
    if !activity.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", activity.description);
    }

    let slots = activity.reservable_slots();
    if slots.is_empty() {
        let _ = writeln!(out, "Fully booked.");
        return out;
    }

    let _ = writeln!(out, "Available slots ({}):", spots(activity));
    for slot in slots {
        let _ = writeln!(out, "  {slot}");
    }
    let _ = writeln!(out, "{}", route_hint(Route::Reserve(activity.id)));
    out
}

#[must_use]
pub fn reservation(reservation: &Reservation) -> String {
    format!(
        "#{} {} on {} [{}]",
        reservation.id,
        reservation.activity.name,
        reservation.date_time,
        reservation.status.label()
    )
}

/// Lists reservations. Only those still cancellable at `now` get a cancel hint.
#[must_use]
pub fn reservation_list(reservations: &[Reservation], now: DateTime<Utc>) -> String {
    if reservations.is_empty() {
        return "You have no reservations.".to_string();
    }

    let mut out = String::new();
    for item in reservations {
        let _ = write!(out, "{}", reservation(item));
        if item.can_cancel_at(now) {
            let _ = write!(out, "  (cancel: aquarhone cancel {})", item.id);
        }
        out.push('\n');
    }
    out
}

#[must_use]
pub fn user_detail(user: &User) -> String {
    format!("#{:<4} {:<32} {}", user.id, user.email, user.roles.primary_label())
}

#[must_use]
pub fn user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users.".to_string();
    }

    users.iter().map(user_detail).collect::<Vec<_>>().join("\n")
}
