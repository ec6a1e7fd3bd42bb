use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use hotelman_core::{DomainError, DomainResult, HotelId};

use crate::view::BookingView;

/// Revenue of `hotel_id` for the calendar month of `as_of`.
///
/// A booking counts when its check-in falls in the same month number as
/// `as_of`. The year is deliberately not compared: May bookings from earlier
/// years are included in this May's figure. Each booking contributes
/// `price_per_night * nights`, nights being whole days.
///
/// Fails with `InvalidArgument` when the total exceeds the `Decimal` range.
pub fn monthly_revenue(
    bookings: &[BookingView],
    hotel_id: HotelId,
    as_of: DateTime<Utc>,
) -> DomainResult<Decimal> {
    let month = as_of.month();
    bookings
        .iter()
        .filter(|b| b.hotel_id() == hotel_id && b.check_in().month() == month)
        .try_fold(Decimal::ZERO, |total, b| {
            b.room
                .price_per_night
                .checked_mul(Decimal::from(b.stay.nights()))
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(|| {
                    DomainError::invalid_argument(format!(
                        "revenue of booking {} overflows the decimal range",
                        b.id
                    ))
                })
        })
}
