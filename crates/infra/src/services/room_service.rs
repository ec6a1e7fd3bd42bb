use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::instrument;

use hotelman_booking::{derived_room_status, next_room_number, Room, RoomStatus, RoomType};
use hotelman_core::{HotelId, RoomId};

use super::error::{ServiceError, ServiceResult};
use crate::store::EntityStore;

/// Room lifecycle: numbering, creation, status upkeep, deletion.
#[derive(Debug, Clone)]
pub struct RoomService<S> {
    store: S,
}

impl<S> RoomService<S>
where
    S: EntityStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Number the next room of the hotel would get from the floor allocator.
    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn next_room_number(&self, hotel_id: HotelId) -> ServiceResult<u32> {
        let hotel = self
            .store
            .get_hotel(hotel_id)?
            .ok_or_else(|| ServiceError::not_found(format!("hotel {hotel_id}")))?;
        let existing = self.store.rooms_for_hotel(hotel_id)?.len();
        Ok(next_room_number(hotel.rooms_per_floor(), existing)?)
    }

    /// Add a room numbered by the floor allocator.
    ///
    /// If the allocated number was already taken manually the store answers
    /// `Conflict`; pick a number explicitly with [`Self::add_room_numbered`].
    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn add_room(
        &self,
        hotel_id: HotelId,
        room_type: RoomType,
        price_per_night: Decimal,
    ) -> ServiceResult<Room> {
        let number = self.next_room_number(hotel_id)?;
        self.add_room_numbered(hotel_id, number, room_type, price_per_night)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn add_room_numbered(
        &self,
        hotel_id: HotelId,
        number: u32,
        room_type: RoomType,
        price_per_night: Decimal,
    ) -> ServiceResult<Room> {
        let room = Room::new(hotel_id, number, room_type, price_per_night)?;
        if let Err(e) = self.store.insert_room(room.clone()) {
            tracing::warn!(number, error = %e, "room rejected");
            return Err(e.into());
        }
        tracing::info!(room_id = %room.id_typed(), number, "room added");
        Ok(room)
    }

    pub fn get_room(&self, room_id: RoomId) -> ServiceResult<Room> {
        self.store.get_room(room_id)?.ok_or_else(|| {
            tracing::warn!(%room_id, "room not found");
            ServiceError::not_found(format!("room {room_id}"))
        })
    }

    /// Removes the room with its bookings.
    #[instrument(skip(self), fields(room_id = %room_id), err)]
    pub fn delete_room(&self, room_id: RoomId) -> ServiceResult<()> {
        self.store.delete_room(room_id)?;
        tracing::info!("room deleted");
        Ok(())
    }

    /// Whether a booking of the room covers the calendar day of `today`.
    pub fn is_room_currently_booked(&self, room_id: RoomId, today: DateTime<Utc>) -> ServiceResult<bool> {
        self.get_room(room_id)?;
        Ok(self
            .store
            .bookings_for_room(room_id)?
            .iter()
            .any(|b| b.stay().covers_day(today)))
    }

    /// Recompute the stored status from today's bookings.
    ///
    /// `Maintenance` is never overwritten.
    #[instrument(skip(self), fields(room_id = %room_id), err)]
    pub fn refresh_room_status(&self, room_id: RoomId, today: DateTime<Utc>) -> ServiceResult<RoomStatus> {
        let room = self.get_room(room_id)?;
        let bookings = self.store.bookings_for_room(room_id)?;
        let status = derived_room_status(&room, &bookings, today);
        if status != room.status() {
            self.store.update_room_status(room_id, status)?;
            tracing::info!(from = %room.status(), to = %status, "room status changed");
        }
        Ok(status)
    }

    /// Put a room in or out of maintenance.
    ///
    /// Leaving maintenance sets `Available`; run [`Self::refresh_room_status`]
    /// afterwards to pick up current bookings.
    #[instrument(skip(self), fields(room_id = %room_id), err)]
    pub fn set_maintenance(&self, room_id: RoomId, on: bool) -> ServiceResult<()> {
        self.get_room(room_id)?;
        let status = if on {
            RoomStatus::Maintenance
        } else {
            RoomStatus::Available
        };
        self.store.update_room_status(room_id, status)?;
        tracing::info!(%status, "room status set");
        Ok(())
    }
}
