use chrono::{DateTime, Utc};
use tracing::instrument;

use hotelman_booking::{derived_room_status, is_available, Booking, BookingView, StayPeriod};
use hotelman_core::{BookingId, GuestId, RoomId};

use super::error::{ServiceError, ServiceResult};
use crate::store::{EntityStore, StoreError};

/// Input for [`BookingService::create_booking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BookingService<S> {
    store: S,
}

impl<S> BookingService<S>
where
    S: EntityStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read-only availability check against the room's current bookings.
    ///
    /// Advisory: only [`Self::create_booking`] decides, atomically.
    #[instrument(skip(self), fields(room_id = %room_id), err)]
    pub fn is_room_available(
        &self,
        room_id: RoomId,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> ServiceResult<bool> {
        let candidate = StayPeriod::new(check_in, check_out)?;
        if self.store.get_room(room_id)?.is_none() {
            return Err(ServiceError::not_found(format!("room {room_id}")));
        }
        let bookings = self.store.bookings_for_room(room_id)?;
        Ok(is_available(&bookings, room_id, &candidate))
    }

    /// Validate, reserve atomically and refresh the room's stored status.
    ///
    /// `today` is the day the status refresh is evaluated against.
    #[instrument(
        skip(self, request),
        fields(
            room_id = %request.room_id,
            guest_id = %request.guest_id,
            check_in = %request.check_in,
            check_out = %request.check_out,
        ),
        err
    )]
    pub fn create_booking(&self, request: BookingRequest, today: DateTime<Utc>) -> ServiceResult<Booking> {
        let stay = StayPeriod::new(request.check_in, request.check_out)?;
        if self.store.get_room(request.room_id)?.is_none() {
            tracing::warn!("room not found");
            return Err(ServiceError::not_found(format!("room {}", request.room_id)));
        }
        if self.store.get_guest(request.guest_id)?.is_none() {
            tracing::warn!("guest not found");
            return Err(ServiceError::not_found(format!("guest {}", request.guest_id)));
        }

        let booking = Booking::new(request.room_id, request.guest_id, stay);
        match self.store.reserve(booking.clone()) {
            Ok(()) => {}
            Err(StoreError::Conflict(msg)) => {
                tracing::warn!(reason = %msg, "reservation rejected");
                return Err(ServiceError::Conflict(msg));
            }
            Err(e) => return Err(e.into()),
        }
        tracing::info!(booking_id = %booking.id_typed(), nights = stay.nights(), "booking reserved");

        self.refresh_status(request.room_id, today)?;
        Ok(booking)
    }

    pub fn get_booking(&self, booking_id: BookingId) -> ServiceResult<Booking> {
        self.store
            .get_booking(booking_id)?
            .ok_or_else(|| ServiceError::not_found(format!("booking {booking_id}")))
    }

    /// Every booking across hotels, ordered by check-in.
    pub fn list_bookings(&self) -> ServiceResult<Vec<BookingView>> {
        Ok(self.store.booking_views(None)?)
    }

    #[instrument(skip(self), fields(booking_id = %booking_id), err)]
    pub fn delete_booking(&self, booking_id: BookingId, today: DateTime<Utc>) -> ServiceResult<()> {
        let booking = self.get_booking(booking_id)?;
        self.store.delete_booking(booking_id)?;
        tracing::info!("booking deleted");
        self.refresh_status(booking.room_id(), today)
    }

    fn refresh_status(&self, room_id: RoomId, today: DateTime<Utc>) -> ServiceResult<()> {
        // Room may have been removed concurrently; nothing to refresh then.
        let Some(room) = self.store.get_room(room_id)? else {
            return Ok(());
        };
        let bookings = self.store.bookings_for_room(room_id)?;
        let status = derived_room_status(&room, &bookings, today);
        if status != room.status() {
            self.store.update_room_status(room_id, status)?;
            tracing::info!(%room_id, %status, "room status changed");
        }
        Ok(())
    }
}
