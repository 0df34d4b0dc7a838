//! Command dispatcher.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::navigator::TerminalNavigator;
use super::views;
use crate::application::{
    CatalogUseCase, GuardState, LoginRequest, LoginUseCase, ReservationUseCase, SessionGuard,
    UserAdminUseCase,
};
use crate::domain::entities::{ActivityFilter, ActivityId, ReservationId, Session, UserId};
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthPort, BookingPort, CredentialStorePort};
use crate::domain::route::Route;
use crate::infrastructure::config::{AdminCommand, Command};

/// Runs one CLI command and renders its view.
pub struct App {
    login: LoginUseCase,
    guard: SessionGuard,
    catalog: CatalogUseCase,
    reservations: ReservationUseCase,
    users: UserAdminUseCase,
    navigator: Arc<TerminalNavigator>,
}

impl App {
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        booking_port: Arc<dyn BookingPort>,
        storage_port: Arc<dyn CredentialStorePort>,
    ) -> Self {
        let navigator = Arc::new(TerminalNavigator::new());

        Self {
            login: LoginUseCase::new(auth_port.clone(), storage_port.clone(), navigator.clone()),
            guard: SessionGuard::new(auth_port, storage_port, navigator.clone()),
            catalog: CatalogUseCase::new(booking_port.clone()),
            reservations: ReservationUseCase::new(booking_port.clone()),
            users: UserAdminUseCase::new(booking_port),
            navigator,
        }
    }

    /// Hint for the view the last command navigated to.
    #[must_use]
    pub fn next_step(&self) -> Option<String> {
        self.navigator.take().map(views::route_hint)
    }

    /// Executes `command` and returns the rendered output.
    ///
    /// Protected commands write a loading line to `status` while the session
    /// is checked.
    ///
    /// # Errors
    /// Returns `Unauthenticated` when the session guard redirected, or the
    /// command's own failure.
    pub async fn run(
        &self,
        command: Command,
        status: &mut (dyn Write + Send),
    ) -> Result<String, ClientError> {
        match command {
            Command::Login(args) => {
                let response = self
                    .login
                    .execute(LoginRequest::login(args.email, args.password))
                    .await?;
                Ok(views::signed_in(&response))
            }
            Command::Register(args) => {
                let response = self
                    .login
                    .execute(LoginRequest::register(args.email, args.password))
                    .await?;
                Ok(views::signed_in(&response))
            }
            Command::Logout => {
                self.login.logout().await?;
                Ok(views::signed_out())
            }
            Command::Whoami => {
                self.mount(Route::Dashboard, status, |session| async move {
                    Ok(views::whoami(&session))
                })
                .await
            }
            Command::Dashboard => {
                self.mount(Route::Dashboard, status, |session| async move {
                    Ok(views::dashboard(&session))
                })
                .await
            }
            Command::Activities { activity_type } => {
                let filter = ActivityFilter::from(activity_type);
                self.mount(Route::Activities, status, |_| async move {
                    let activities = self.catalog.activities(filter).await?;
                    Ok(views::activity_list(&activities, filter))
                })
                .await
            }
            Command::Activity { id } => {
                let id = ActivityId(id);
                self.mount(Route::Activity(id), status, |_| async move {
                    let activity = self.catalog.activity(id).await?;
                    Ok(views::activity_detail(&activity))
                })
                .await
            }
            Command::Reserve { activity_id, slot } => {
                let activity_id = ActivityId(activity_id);
                self.mount(Route::Reserve(activity_id), status, |_| async move {
                    let reservation = self
                        .reservations
                        .reserve(activity_id, slot.as_deref())
                        .await?;
                    Ok(format!("Reserved: {}", views::reservation(&reservation)))
                })
                .await
            }
            Command::Reservations => {
                self.mount(Route::Reservations, status, |_| async move {
                    let reservations = self.reservations.reservations().await?;
                    Ok(views::reservation_list(&reservations, Utc::now()))
                })
                .await
            }
            Command::Cancel { id } => {
                self.mount(Route::Reservations, status, |_| async move {
                    let reservation = self.reservations.cancel(ReservationId(id)).await?;
                    Ok(format!("Cancelled: {}", views::reservation(&reservation)))
                })
                .await
            }
            Command::Admin(command) => {
                let route = admin_route(&command);
                self.mount(route, status, |session| self.admin(command, session))
                    .await
            }
        }
    }

    /// Places `children` behind the session guard.
    async fn mount<F, Fut>(
        &self,
        route: Route,
        status: &mut (dyn Write + Send),
        children: F,
    ) -> Result<String, ClientError>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<String, ClientError>>,
    {
        debug!(%route, "Mounting protected view");
        if let Some(placeholder) = views::guard_placeholder(&GuardState::Unknown) {
            let _ = writeln!(status, "{placeholder}");
        }

        self.guard
            .protect(children)
            .await
            .unwrap_or(Err(ClientError::Unauthenticated))
    }

    async fn admin(&self, command: AdminCommand, session: Session) -> Result<String, ClientError> {
        match command {
            AdminCommand::Activities => {
                let activities = self.catalog.all_activities(&session).await?;
                Ok(views::activity_list(&activities, ActivityFilter::All))
            }
            AdminCommand::CreateActivity(fields) => {
                let activity = self
                    .catalog
                    .create_activity(&session, &fields.into())
                    .await?;
                Ok(views::activity_detail(&activity))
            }
            AdminCommand::UpdateActivity { id, fields } => {
                let activity = self
                    .catalog
                    .update_activity(&session, ActivityId(id), &fields.into())
                    .await?;
                Ok(views::activity_detail(&activity))
            }
            AdminCommand::DeleteActivity { id } => {
                self.catalog
                    .delete_activity(&session, ActivityId(id))
                    .await?;
                Ok(format!("Deleted activity #{id}"))
            }
            AdminCommand::Users => {
                let users = self.users.users(&session).await?;
                Ok(views::user_list(&users))
            }
            AdminCommand::User { id } => {
                let user = self.users.user(&session, UserId(id)).await?;
                Ok(views::user_detail(&user))
            }
            AdminCommand::CreateUser {
                email,
                password,
                admin,
            } => {
                let user = self
                    .users
                    .create_user(&session, &email, &password, admin)
                    .await?;
                Ok(views::user_detail(&user))
            }
            AdminCommand::UpdateUser { id, email, admin } => {
                let user = self
                    .users
                    .update_user(&session, UserId(id), email.as_deref(), admin)
                    .await?;
                Ok(views::user_detail(&user))
            }
            AdminCommand::DeleteUser { id } => {
                self.users.delete_user(&session, UserId(id)).await?;
                Ok(format!("Deleted user #{id}"))
            }
        }
    }
}

const fn admin_route(command: &AdminCommand) -> Route {
    match command {
        AdminCommand::Activities
        | AdminCommand::CreateActivity(_)
        | AdminCommand::UpdateActivity { .. }
        | AdminCommand::DeleteActivity { .. } => Route::AdminActivities,
        AdminCommand::Users
        | AdminCommand::User { .. }
        | AdminCommand::CreateUser { .. }
        | AdminCommand::UpdateUser { .. }
        | AdminCommand::DeleteUser { .. } => Route::AdminUsers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpMethod;
    use crate::domain::ports::mocks::{MockCredentialStore, MockTransport};
    use crate::infrastructure::api::test_support::{ACTIVITY_JSON, FULL_ACTIVITY_JSON, client};
    use crate::infrastructure::config::{CliArgs, CredentialsArgs};
    use clap::Parser;

    const ME: &str = r#"{"id": 1, "email": "a@b.com", "roles": ["ROLE_USER"]}"#;
    const ADMIN_ME: &str = r#"{"id": 2, "email": "root@b.com", "roles": ["ROLE_ADMIN", "ROLE_USER"]}"#;

    fn app(
        transport: MockTransport,
        store: MockCredentialStore,
    ) -> (App, Arc<MockTransport>, Arc<MockCredentialStore>) {
        let (client, transport, store) = client(transport, store);
        let client = Arc::new(client);
        (App::new(client.clone(), client, store.clone()), transport, store)
    }

    fn command(args: &[&str]) -> Command {
        CliArgs::parse_from(std::iter::once("aquarhone").chain(args.iter().copied())).command
    }

    #[tokio::test]
    async fn test_protected_command_without_credential() {
        let (app, transport, _) = app(MockTransport::new(), MockCredentialStore::new());
        let mut status = Vec::new();

        let err = app.run(Command::Dashboard, &mut status).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthenticated));
        assert_eq!(transport.call_count(), 0);
        assert_eq!(String::from_utf8(status).unwrap().trim(), views::LOADING);
        assert_eq!(app.next_step(), Some(views::route_hint(Route::Login)));
    }

    #[tokio::test]
    async fn test_dashboard_renders_after_session_check() {
        let (app, transport, _) = app(
            MockTransport::new().reply(200, ME),
            MockCredentialStore::with_credential("tok"),
        );

        let output = app.run(Command::Dashboard, &mut std::io::sink()).await.unwrap();

        assert!(output.contains("Welcome, a@b.com"));
        assert_eq!(transport.call_count(), 1);
        assert!(app.next_step().is_none());
    }

    #[tokio::test]
    async fn test_login_then_next_step_is_dashboard() {
        let (app, _, store) = app(
            MockTransport::new().reply(
                200,
                r#"{"token": "jwt", "user": {"id": 1, "email": "a@b.com", "roles": ["ROLE_USER"]}, "message": "ok"}"#,
            ),
            MockCredentialStore::new(),
        );

        let output = app
            .run(
                Command::Login(CredentialsArgs {
                    email: "a@b.com".into(),
                    password: "pw".into(),
                }),
                &mut std::io::sink(),
            )
            .await
            .unwrap();

        assert_eq!(output, "Signed in as a@b.com (ok)");
        assert_eq!(store.stored().await.as_deref(), Some("jwt"));
        assert_eq!(app.next_step(), Some(views::route_hint(Route::Dashboard)));
    }

    #[tokio::test]
    async fn test_logout_never_calls_api() {
        let (app, transport, store) = app(
            MockTransport::new(),
            MockCredentialStore::with_credential("tok"),
        );

        app.run(Command::Logout, &mut std::io::sink()).await.unwrap();

        assert!(store.stored().await.is_none());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_filtered_activities() {
        let body = format!("[{ACTIVITY_JSON}, {FULL_ACTIVITY_JSON}]");
        let (app, _, _) = app(
            MockTransport::new().reply(200, ME).reply(200, &body),
            MockCredentialStore::with_credential("tok"),
        );

        let output = app
            .run(command(&["activities", "--type", "kayak"]), &mut std::io::sink())
            .await
            .unwrap();

        assert!(output.contains("Morning kayak"));
        assert!(!output.contains("Sold-out cruise"));
    }

    #[tokio::test]
    async fn test_admin_view_denied_for_regular_user() {
        let (app, transport, store) = app(
            MockTransport::new().reply(200, ME),
            MockCredentialStore::with_credential("tok"),
        );

        let err = app
            .run(command(&["admin", "users"]), &mut std::io::sink())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "access denied");
        assert_eq!(transport.call_count(), 1);
        assert_eq!(store.stored().await.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_admin_lists_users() {
        let (app, transport, _) = app(
            MockTransport::new()
                .reply(200, ADMIN_ME)
                .reply(200, &format!("[{ADMIN_ME}, {ME}]")),
            MockCredentialStore::with_credential("tok"),
        );

        let output = app
            .run(command(&["admin", "users"]), &mut std::io::sink())
            .await
            .unwrap();

        assert_eq!(output.lines().count(), 2);
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://booking.test/api/users"
        );
    }

    #[tokio::test]
    async fn test_reserving_fully_booked_activity_only_reads() {
        let (app, transport, _) = app(
            MockTransport::new().reply(200, ME).reply(200, FULL_ACTIVITY_JSON),
            MockCredentialStore::with_credential("tok"),
        );

        let err = app
            .run(
                command(&["reserve", "5", "--slot", "2030-06-01T09:00:00+00:00"]),
                &mut std::io::sink(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::FullyBooked));
        assert!(
            transport
                .requests()
                .iter()
                .all(|request| request.method == HttpMethod::Get)
        );
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_before_view() {
        let (app, transport, store) = app(
            MockTransport::new().reply(401, r#"{"error": "Expired JWT Token"}"#),
            MockCredentialStore::with_credential("expired"),
        );

        let err = app
            .run(Command::Reservations, &mut std::io::sink())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Unauthenticated));
        assert_eq!(transport.call_count(), 1);
        assert!(store.stored().await.is_none());
    }
}
