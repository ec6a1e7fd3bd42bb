//! Room availability: half-open interval overlap against existing bookings.
//!
//! These functions only answer the question for the booking set they are
//! given. They do not reserve anything; a check followed by a separate insert
//! is racy unless the store performs both under one lock or transaction.

use hotelman_core::{DomainError, DomainResult, RoomId};

use crate::booking::{Booking, StayPeriod};

/// First booking on `room_id` whose stay overlaps `candidate`.
pub fn find_conflict<'a, I>(bookings: I, room_id: RoomId, candidate: &StayPeriod) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .find(|b| b.room_id() == room_id && b.stay().overlaps(candidate))
}

/// `true` iff no booking on `room_id` overlaps `candidate`.
pub fn is_available<'a, I>(bookings: I, room_id: RoomId, candidate: &StayPeriod) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    find_conflict(bookings, room_id, candidate).is_none()
}

/// Like [`is_available`], but reports the clash as a `Conflict` error.
///
/// Used on the write path, where an overlap must reject the booking rather
/// than merely answer `false`.
pub fn ensure_available<'a, I>(bookings: I, room_id: RoomId, candidate: &StayPeriod) -> DomainResult<()>
where
    I: IntoIterator<Item = &'a Booking>,
{
    match find_conflict(bookings, room_id, candidate) {
        Some(existing) => Err(DomainError::conflict(format!(
            "room {room_id} is already booked from {} to {} (booking {})",
            existing.check_in(),
            existing.check_out(),
            existing.id_typed()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use hotelman_core::GuestId;
    use proptest::prelude::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn day(offset: i64) -> DateTime<Utc> {
        base() + Duration::days(offset)
    }

    fn period(from: i64, to: i64) -> StayPeriod {
        StayPeriod::new(day(from), day(to)).unwrap()
    }

    fn booking(room_id: RoomId, from: i64, to: i64) -> Booking {
        Booking::new(room_id, GuestId::new(), period(from, to))
    }

    #[test]
    fn empty_room_is_available() {
        let room = RoomId::new();
        let existing: Vec<Booking> = Vec::new();
        assert!(is_available(&existing, room, &period(0, 2)));
    }

    #[test]
    fn checkout_day_can_be_next_check_in() {
        let room = RoomId::new();
        let existing = vec![booking(room, 0, 2)];
        assert!(is_available(&existing, room, &period(2, 4)));
        assert!(is_available(&existing, room, &period(-3, 0)));
    }

    #[test]
    fn overlapping_stay_is_unavailable() {
        let room = RoomId::new();
        let existing = vec![booking(room, 0, 3)];
        assert!(!is_available(&existing, room, &period(2, 5)));
        assert!(!is_available(&existing, room, &period(-1, 1)));
        assert!(!is_available(&existing, room, &period(1, 2)));
        assert!(!is_available(&existing, room, &period(-5, 10)));
    }

    #[test]
    fn bookings_on_other_rooms_are_ignored() {
        let room = RoomId::new();
        let other = RoomId::new();
        let existing = vec![booking(other, 0, 3)];
        assert!(is_available(&existing, room, &period(0, 3)));
    }

    #[test]
    fn ensure_available_reports_conflict() {
        let room = RoomId::new();
        let existing = vec![booking(room, 0, 3)];
        let err = ensure_available(&existing, room, &period(1, 2)).unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains(&room.to_string()) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert!(ensure_available(&existing, room, &period(3, 4)).is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            max_global_rejects: 8192,
            ..ProptestConfig::default()
        })]

        /// Property: disjoint (or touching) stays never report a conflict.
        #[test]
        fn disjoint_stays_are_available(
            start in -100i64..100,
            len_a in 1i64..30,
            gap in 0i64..30,
            len_b in 1i64..30,
            a_first in any::<bool>(),
        ) {
            let room = RoomId::new();
            let (a, b) = (
                (start, start + len_a),
                (start + len_a + gap, start + len_a + gap + len_b),
            );
            let (existing, candidate) = if a_first { (a, b) } else { (b, a) };
            let bookings = vec![booking(room, existing.0, existing.1)];
            prop_assert!(is_available(&bookings, room, &period(candidate.0, candidate.1)));
        }

        /// Property: [a,b) and [c,d) with a<d and c<b always conflict.
        #[test]
        fn overlapping_stays_are_unavailable(
            a in -100i64..100,
            len_ab in 1i64..30,
            c in -100i64..100,
            len_cd in 1i64..30,
        ) {
            let (b, d) = (a + len_ab, c + len_cd);
            prop_assume!(a < d && c < b);
            let room = RoomId::new();
            let bookings = vec![booking(room, a, b)];
            prop_assert!(!is_available(&bookings, room, &period(c, d)));
        }
    }
}
