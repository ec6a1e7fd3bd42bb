//! Occupancy: which bookings are active on a given day, the capacity-proxy
//! guest total, and which rooms are free.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use hotelman_core::{HotelId, RoomId};

use crate::booking::Booking;
use crate::capacity::RoomTypeCapacity;
use crate::room::{Room, RoomStatus};
use crate::view::BookingView;

/// Bookings of `hotel_id` whose stay covers the day of `as_of` (inclusive).
pub fn active_bookings(
    bookings: &[BookingView],
    hotel_id: HotelId,
    as_of: DateTime<Utc>,
) -> Vec<BookingView> {
    bookings
        .iter()
        .filter(|b| b.hotel_id() == hotel_id && b.stay.covers_day(as_of))
        .cloned()
        .collect()
}

/// Capacity-proxy guest total over already-filtered active bookings.
///
/// Saturates at `u32::MAX` instead of wrapping.
pub fn guest_total(active: &[BookingView], capacity: &RoomTypeCapacity) -> u32 {
    active
        .iter()
        .map(|b| capacity.capacity_of(&b.room.room_type))
        .fold(0u32, u32::saturating_add)
}

/// Sum of room-type capacities over the hotel's active bookings.
///
/// This approximates occupants from room types; it is not a head count.
pub fn current_guest_count(
    bookings: &[BookingView],
    hotel_id: HotelId,
    as_of: DateTime<Utc>,
    capacity: &RoomTypeCapacity,
) -> u32 {
    guest_total(&active_bookings(bookings, hotel_id, as_of), capacity)
}

/// Rooms of `hotel_id` not held by any active booking and stored as `Available`.
pub fn available_rooms(
    rooms: &[Room],
    bookings: &[BookingView],
    hotel_id: HotelId,
    as_of: DateTime<Utc>,
) -> Vec<Room> {
    free_rooms(rooms, &active_bookings(bookings, hotel_id, as_of), hotel_id)
}

/// Rooms of `hotel_id` not referenced by `active` and stored as `Available`.
pub fn free_rooms(rooms: &[Room], active: &[BookingView], hotel_id: HotelId) -> Vec<Room> {
    let occupied: HashSet<RoomId> = active.iter().map(|b| b.room.id).collect();
    rooms
        .iter()
        .filter(|r| {
            r.hotel_id() == hotel_id
                && !occupied.contains(&r.id_typed())
                && r.status() == RoomStatus::Available
        })
        .cloned()
        .collect()
}

/// Status a room should carry on the day of `today`.
///
/// Rooms under maintenance keep that status; otherwise the room is `Booked`
/// when one of its bookings covers the day and `Available` when none does.
pub fn derived_room_status(room: &Room, bookings: &[Booking], today: DateTime<Utc>) -> RoomStatus {
    if room.status() == RoomStatus::Maintenance {
        return RoomStatus::Maintenance;
    }
    let booked = bookings
        .iter()
        .any(|b| b.room_id() == room.id_typed() && b.stay().covers_day(today));
    if booked {
        RoomStatus::Booked
    } else {
        RoomStatus::Available
    }
}
