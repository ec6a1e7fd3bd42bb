//! Read models: bookings joined with the guest and room they reference.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use hotelman_core::{BookingId, GuestId, HotelId, RoomId};

use crate::booking::{Booking, StayPeriod};
use crate::guest::Guest;
use crate::room::{Room, RoomStatus, RoomType};

/// Minified guest reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestSummary {
    pub id: GuestId,
    pub name: String,
}

/// Minified room reference (carries what the aggregations need).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub number: u32,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id_typed(),
            hotel_id: room.hotel_id(),
            number: room.number(),
            room_type: room.room_type().clone(),
            price_per_night: room.price_per_night(),
            status: room.status(),
        }
    }
}

/// Booking with its guest and room resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub id: BookingId,
    #[serde(flatten)]
    pub stay: StayPeriod,
    pub status: String,
    pub guest: GuestSummary,
    pub room: RoomSummary,
}

impl BookingView {
    pub fn new(booking: &Booking, guest: &Guest, room: &Room) -> Self {
        Self {
            id: booking.id_typed(),
            stay: *booking.stay(),
            status: booking.status().to_string(),
            guest: GuestSummary {
                id: guest.id_typed(),
                name: guest.name().to_string(),
            },
            room: RoomSummary::from(room),
        }
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.stay.check_in()
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.stay.check_out()
    }

    pub fn hotel_id(&self) -> HotelId {
        self.room.hotel_id
    }
}

/// Recent-activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentBooking {
    pub id: BookingId,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guest_name: String,
    pub room_number: u32,
}

impl From<&BookingView> for RecentBooking {
    fn from(view: &BookingView) -> Self {
        Self {
            id: view.id,
            check_in: view.check_in(),
            check_out: view.check_out(),
            guest_name: view.guest.name.clone(),
            room_number: view.room.number,
        }
    }
}
