//! Hotel booking domain module.
//!
//! This crate contains the business rules for hotels, rooms, guests and
//! bookings, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). Every aggregation takes the records it needs as slices plus an
//! explicit `as_of` instant, so callers decide what "now" means.

pub mod availability;
pub mod booking;
pub mod capacity;
pub mod dashboard;
pub mod guest;
pub mod hotel;
pub mod numbering;
pub mod occupancy;
pub mod recent;
pub mod revenue;
pub mod room;
pub mod view;

pub use availability::{ensure_available, find_conflict, is_available};
pub use booking::{Booking, StayPeriod, CONFIRMED};
pub use capacity::RoomTypeCapacity;
pub use dashboard::{compose_dashboard, DashboardData, DashboardOptions, DEFAULT_RECENT_COUNT};
pub use guest::{guests_of_hotel, Guest, GuestWithBookings};
pub use hotel::Hotel;
pub use numbering::next_room_number;
pub use occupancy::{active_bookings, available_rooms, current_guest_count, derived_room_status};
pub use recent::recent_bookings;
pub use revenue::monthly_revenue;
pub use room::{Room, RoomStatus, RoomType};
pub use view::{BookingView, GuestSummary, RecentBooking, RoomSummary};
