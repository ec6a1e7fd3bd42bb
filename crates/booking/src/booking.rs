use chrono::{DateTime, Utc};
use serde::Serialize;

use hotelman_core::{BookingId, DomainError, DomainResult, Entity, GuestId, RoomId, ValueObject};

/// Status label given to bookings created through the reservation workflow.
pub const CONFIRMED: &str = "Confirmed";

/// Stay period `[check_in, check_out)`.
///
/// Construction enforces `check_in < check_out`, so every period in the system
/// spans a positive duration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StayPeriod {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl ValueObject for StayPeriod {}

impl StayPeriod {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> DomainResult<Self> {
        if check_in >= check_out {
            return Err(DomainError::invalid_argument(format!(
                "check_in ({check_in}) must be before check_out ({check_out})"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Half-open overlap: sharing only a boundary instant is not a conflict.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Whether the stay covers the calendar day of `as_of`, both ends inclusive.
    ///
    /// Time of day is ignored, so a guest checking out this morning still
    /// counts as present today.
    pub fn covers_day(&self, as_of: DateTime<Utc>) -> bool {
        let day = as_of.date_naive();
        self.check_in.date_naive() <= day && day <= self.check_out.date_naive()
    }

    /// Whole nights between check-in and check-out (partial days truncate).
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Booking: one guest in one room for one stay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    id: BookingId,
    room_id: RoomId,
    guest_id: GuestId,
    stay: StayPeriod,
    status: String,
}

impl Booking {
    /// Create a `Confirmed` booking.
    pub fn new(room_id: RoomId, guest_id: GuestId, stay: StayPeriod) -> Self {
        Self::with_id(BookingId::new(), room_id, guest_id, stay)
    }

    pub fn with_id(id: BookingId, room_id: RoomId, guest_id: GuestId, stay: StayPeriod) -> Self {
        Self {
            id,
            room_id,
            guest_id,
            stay,
            status: CONFIRMED.to_string(),
        }
    }

    /// Replace the free-text lifecycle label (e.g. "Cancelled").
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn id_typed(&self) -> BookingId {
        self.id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    pub fn stay(&self) -> &StayPeriod {
        &self.stay
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.stay.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.stay.check_out
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
