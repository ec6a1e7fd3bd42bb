use std::sync::Arc;

use thiserror::Error;

use hotelman_booking::{Booking, BookingView, Guest, Hotel, Room, RoomStatus};
use hotelman_core::{BookingId, GuestId, HotelId, RoomId};

/// Entity store operation error.
///
/// These are storage-boundary outcomes, as opposed to the pure validation the
/// domain performs before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness rule was violated (overlapping stay, duplicate room number,
    /// guest still referenced by bookings).
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One hotel with its rooms and booking views, read at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelSnapshot {
    pub hotel: Hotel,
    /// Ordered by room number.
    pub rooms: Vec<Room>,
    /// Ordered by check-in ascending.
    pub bookings: Vec<BookingView>,
}

/// Storage boundary for hotels, rooms, guests and bookings.
///
/// Lookups return `Ok(None)` for unknown ids; mutations of unknown ids return
/// `StoreError::NotFound`.
///
/// ## Uniqueness guarantees
///
/// Implementations must enforce, atomically with the write:
/// - room numbers are unique within a hotel (`insert_room`)
/// - bookings of one room never overlap (`reserve`), using the same half-open
///   rule as [`hotelman_booking::is_available`]
///
/// A service may call the read-only availability check first to give a
/// friendly answer, but only `reserve` decides. Two callers racing for the same
/// room and dates get one success and one `Conflict`.
///
/// ## Ordering
///
/// - `list_hotels`: by name
/// - `list_guests`: by name
/// - `rooms_for_hotel`: by room number
/// - `bookings_for_room`, `booking_views`: by check-in ascending; bookings with
///   the same check-in keep insertion order
pub trait EntityStore: Send + Sync {
    fn insert_hotel(&self, hotel: Hotel) -> Result<(), StoreError>;
    fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, StoreError>;
    fn list_hotels(&self) -> Result<Vec<Hotel>, StoreError>;
    /// Removes the hotel together with its rooms and their bookings.
    fn delete_hotel(&self, id: HotelId) -> Result<(), StoreError>;

    /// Fails with `NotFound` for an unknown hotel and `Conflict` when the
    /// number is already taken in that hotel.
    fn insert_room(&self, room: Room) -> Result<(), StoreError>;
    fn get_room(&self, id: RoomId) -> Result<Option<Room>, StoreError>;
    fn rooms_for_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, StoreError>;
    fn update_room_status(&self, id: RoomId, status: RoomStatus) -> Result<(), StoreError>;
    /// Removes the room together with its bookings.
    fn delete_room(&self, id: RoomId) -> Result<(), StoreError>;

    fn insert_guest(&self, guest: Guest) -> Result<(), StoreError>;
    fn get_guest(&self, id: GuestId) -> Result<Option<Guest>, StoreError>;
    fn list_guests(&self) -> Result<Vec<Guest>, StoreError>;
    /// Fails with `Conflict` while any booking references the guest.
    fn delete_guest(&self, id: GuestId) -> Result<(), StoreError>;

    /// Overlap check and insert as one atomic step.
    fn reserve(&self, booking: Booking) -> Result<(), StoreError>;
    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, StoreError>;
    fn bookings_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError>;
    /// Bookings joined with guest and room, optionally scoped to one hotel.
    fn booking_views(&self, hotel_id: Option<HotelId>) -> Result<Vec<BookingView>, StoreError>;
    fn delete_booking(&self, id: BookingId) -> Result<(), StoreError>;

    /// Hotel, rooms and booking views read consistently (no write can land
    /// between the three). `Ok(None)` for an unknown hotel.
    fn hotel_snapshot(&self, hotel_id: HotelId) -> Result<Option<HotelSnapshot>, StoreError>;
}

impl<S> EntityStore for Arc<S>
where
    S: EntityStore + ?Sized,
{
    fn insert_hotel(&self, hotel: Hotel) -> Result<(), StoreError> {
        (**self).insert_hotel(hotel)
    }

    fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, StoreError> {
        (**self).get_hotel(id)
    }

    fn list_hotels(&self) -> Result<Vec<Hotel>, StoreError> {
        (**self).list_hotels()
    }

    fn delete_hotel(&self, id: HotelId) -> Result<(), StoreError> {
        (**self).delete_hotel(id)
    }

    fn insert_room(&self, room: Room) -> Result<(), StoreError> {
        (**self).insert_room(room)
    }

    fn get_room(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        (**self).get_room(id)
    }

    fn rooms_for_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, StoreError> {
        (**self).rooms_for_hotel(hotel_id)
    }

    fn update_room_status(&self, id: RoomId, status: RoomStatus) -> Result<(), StoreError> {
        (**self).update_room_status(id, status)
    }

    fn delete_room(&self, id: RoomId) -> Result<(), StoreError> {
        (**self).delete_room(id)
    }

    fn insert_guest(&self, guest: Guest) -> Result<(), StoreError> {
        (**self).insert_guest(guest)
    }

    fn get_guest(&self, id: GuestId) -> Result<Option<Guest>, StoreError> {
        (**self).get_guest(id)
    }

    fn list_guests(&self) -> Result<Vec<Guest>, StoreError> {
        (**self).list_guests()
    }

    fn delete_guest(&self, id: GuestId) -> Result<(), StoreError> {
        (**self).delete_guest(id)
    }

    fn reserve(&self, booking: Booking) -> Result<(), StoreError> {
        (**self).reserve(booking)
    }

    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        (**self).get_booking(id)
    }

    fn bookings_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError> {
        (**self).bookings_for_room(room_id)
    }

    fn booking_views(&self, hotel_id: Option<HotelId>) -> Result<Vec<BookingView>, StoreError> {
        (**self).booking_views(hotel_id)
    }

    fn delete_booking(&self, id: BookingId) -> Result<(), StoreError> {
        (**self).delete_booking(id)
    }

    fn hotel_snapshot(&self, hotel_id: HotelId) -> Result<Option<HotelSnapshot>, StoreError> {
        (**self).hotel_snapshot(hotel_id)
    }
}
