//! Use case implementations.

mod catalog_use_case;
mod login_use_case;
mod reservation_use_case;
mod session_guard;
mod user_admin_use_case;

pub use catalog_use_case::CatalogUseCase;
pub use login_use_case::LoginUseCase;
pub use reservation_use_case::ReservationUseCase;
pub use session_guard::{GuardState, SessionGuard};
pub use user_admin_use_case::UserAdminUseCase;
