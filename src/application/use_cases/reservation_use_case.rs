//! Reservation flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::entities::{ActivityId, Reservation, ReservationId};
use crate::domain::errors::ClientError;
use crate::domain::ports::BookingPort;

/// Reserves, lists and cancels the caller's bookings.
#[derive(Clone)]
pub struct ReservationUseCase {
    booking_port: Arc<dyn BookingPort>,
}

impl ReservationUseCase {
    #[must_use]
    pub const fn new(booking_port: Arc<dyn BookingPort>) -> Self {
        Self { booking_port }
    }

    /// Books `slot` of an activity.
    ///
    /// The slot must be one the activity currently offers. A fully booked
    /// activity offers none.
    ///
    /// # Errors
    /// Returns `InvalidInput` without a usable slot, `FullyBooked` when no
    /// spot is left, or the API error.
    pub async fn reserve(
        &self,
        activity_id: ActivityId,
        slot: Option<&str>,
    ) -> Result<Reservation, ClientError> {
        let slot = slot.map(str::trim).unwrap_or_default();
        if slot.is_empty() {
            return Err(ClientError::invalid_input("select a slot"));
        }

        let activity = self.booking_port.activity(activity_id).await?;

        if !activity.is_bookable() {
            debug!(%activity_id, "Activity is fully booked");
            return Err(ClientError::FullyBooked);
        }
        if !activity.offers_slot(slot) {
            return Err(ClientError::invalid_input(format!(
                "slot {slot} is not offered for {}",
                activity.name
            )));
        }

        let reservation = self
            .booking_port
            .create_reservation(activity_id, slot)
            .await?;

        info!(reservation_id = %reservation.id, %activity_id, slot, "Reservation created");
        Ok(reservation)
    }

    /// Lists the caller's reservations.
    ///
    /// # Errors
    /// Returns the API error.
    pub async fn reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        Ok(self.booking_port.reservations().await?)
    }

    /// Cancels a reservation that has not started yet.
    ///
    /// # Errors
    /// Returns `NotCancellable` for past or non-confirmed reservations, or the
    /// API error.
    pub async fn cancel(&self, id: ReservationId) -> Result<Reservation, ClientError> {
        self.cancel_at(id, Utc::now()).await
    }

    async fn cancel_at(
        &self,
        id: ReservationId,
        now: DateTime<Utc>,
    ) -> Result<Reservation, ClientError> {
        let reservation = self.booking_port.reservation(id).await?;

        if !reservation.can_cancel_at(now) {
            debug!(reservation_id = %id, status = ?reservation.status, "Reservation not cancellable");
            return Err(ClientError::NotCancellable);
        }

        let cancelled = self.booking_port.cancel_reservation(id).await?;
        info!(reservation_id = %id, "Reservation cancelled");
        Ok(cancelled)
    }
}
