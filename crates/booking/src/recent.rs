use hotelman_core::HotelId;

use crate::view::{BookingView, RecentBooking};

/// The `count` most recent bookings of `hotel_id`, newest check-in first.
///
/// Ties keep their input order (the sort is stable). `count == 0` yields an
/// empty list.
pub fn recent_bookings(
    bookings: &[BookingView],
    hotel_id: HotelId,
    count: usize,
) -> Vec<RecentBooking> {
    let mut ranked: Vec<&BookingView> = bookings
        .iter()
        .filter(|b| b.hotel_id() == hotel_id)
        .collect();
    ranked.sort_by(|a, b| b.check_in().cmp(&a.check_in()));
    ranked.into_iter().take(count).map(RecentBooking::from).collect()
}
