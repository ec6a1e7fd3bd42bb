//! Per-hotel dashboard read model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use hotelman_core::DomainResult;

use crate::capacity::RoomTypeCapacity;
use crate::hotel::Hotel;
use crate::occupancy::{active_bookings, free_rooms, guest_total};
use crate::recent::recent_bookings;
use crate::revenue::monthly_revenue;
use crate::room::Room;
use crate::view::{BookingView, RecentBooking};

/// Length of the recent-activity list when nothing else is configured.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Knobs for [`compose_dashboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub capacity: RoomTypeCapacity,
    pub recent_count: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            capacity: RoomTypeCapacity::standard(),
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub hotel_name: String,
    pub total_guests: u32,
    pub available_rooms: Vec<Room>,
    pub active_bookings: Vec<BookingView>,
    pub monthly_revenue: Decimal,
    pub recent_bookings: Vec<RecentBooking>,
}

impl DashboardData {
    pub fn available_room_count(&self) -> usize {
        self.available_rooms.len()
    }

    pub fn active_booking_count(&self) -> usize {
        self.active_bookings.len()
    }
}

/// Compose occupancy, revenue and recent activity for one hotel as of `as_of`.
///
/// `rooms` and `bookings` may contain records of other hotels; each
/// aggregation filters by the hotel's id. Fails only when the revenue total
/// overflows.
pub fn compose_dashboard(
    hotel: &Hotel,
    rooms: &[Room],
    bookings: &[BookingView],
    as_of: DateTime<Utc>,
    options: &DashboardOptions,
) -> DomainResult<DashboardData> {
    let hotel_id = hotel.id_typed();
    let active = active_bookings(bookings, hotel_id, as_of);

    Ok(DashboardData {
        hotel_name: hotel.name().to_string(),
        total_guests: guest_total(&active, &options.capacity),
        available_rooms: free_rooms(rooms, &active, hotel_id),
        monthly_revenue: monthly_revenue(bookings, hotel_id, as_of)?,
        recent_bookings: recent_bookings(bookings, hotel_id, options.recent_count),
        active_bookings: active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{Booking, StayPeriod};
    use crate::guest::Guest;
    use crate::occupancy::{available_rooms, current_guest_count};
    use crate::room::RoomType;
    use chrono::{Duration, TimeZone};

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap()
    }

    fn stay(from: i64, to: i64) -> StayPeriod {
        let noon = Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap();
        StayPeriod::new(noon + Duration::days(from), noon + Duration::days(to)).unwrap()
    }

    fn view(room: &Room, guest: &Guest, from: i64, to: i64) -> BookingView {
        let booking = Booking::new(room.id_typed(), guest.id_typed(), stay(from, to));
        BookingView::new(&booking, guest, room)
    }

    #[test]
    fn single_and_suite_active_today() {
        let hotel = Hotel::new("Harbour", "2 Quay", "Varna", "hi@harbour.test", 10).unwrap();
        let r1 = Room::new(hotel.id_typed(), 101, RoomType::Single, Decimal::from(100)).unwrap();
        let r2 = Room::new(hotel.id_typed(), 102, RoomType::Suite, Decimal::from(150)).unwrap();
        let r3 = Room::new(hotel.id_typed(), 103, RoomType::Double, Decimal::from(120)).unwrap();
        let guest = Guest::new("Ivo", "ivo@example.test", "1").unwrap();

        let rooms = vec![r1.clone(), r2.clone(), r3.clone()];
        let views = vec![view(&r1, &guest, -1, 2), view(&r2, &guest, 0, 1)];

        assert_eq!(
            current_guest_count(&views, hotel.id_typed(), today(), &RoomTypeCapacity::standard()),
            5
        );
        let free = available_rooms(&rooms, &views, hotel.id_typed(), today());
        assert_eq!(free, vec![r3.clone()]);

        let dashboard =
            compose_dashboard(&hotel, &rooms, &views, today(), &DashboardOptions::default())
                .unwrap();
        assert_eq!(dashboard.hotel_name, "Harbour");
        assert_eq!(dashboard.total_guests, 5);
        assert_eq!(dashboard.available_rooms, vec![r3]);
        assert_eq!(dashboard.active_booking_count(), 2);
        // 3 nights * 100 + 1 night * 150, both checked in during May
        assert_eq!(dashboard.monthly_revenue, Decimal::from(450));
        assert_eq!(dashboard.recent_bookings.len(), 2);
        assert_eq!(dashboard.recent_bookings[0].room_number, 102);
    }

    #[test]
    fn recent_count_is_configurable() {
        let hotel = Hotel::new("Harbour", "2 Quay", "Varna", "hi@harbour.test", 10).unwrap();
        let room = Room::new(hotel.id_typed(), 101, RoomType::Single, Decimal::from(100)).unwrap();
        let guest = Guest::new("Ivo", "ivo@example.test", "1").unwrap();
        let views: Vec<BookingView> = (0..8)
            .map(|i| view(&room, &guest, -20 + 2 * i, -19 + 2 * i))
            .collect();

        let options = DashboardOptions {
            recent_count: 3,
            ..DashboardOptions::default()
        };
        let dashboard = compose_dashboard(&hotel, &[room], &views, today(), &options).unwrap();
        assert_eq!(dashboard.recent_bookings.len(), 3);

        let dashboard =
            compose_dashboard(&hotel, &[], &views, today(), &DashboardOptions::default())
                .unwrap();
        assert_eq!(dashboard.recent_bookings.len(), DEFAULT_RECENT_COUNT);
    }

    #[test]
    fn dashboard_serializes_to_json() {
        let hotel = Hotel::new("Harbour", "2 Quay", "Varna", "hi@harbour.test", 10).unwrap();
        let dashboard =
            compose_dashboard(&hotel, &[], &[], today(), &DashboardOptions::default()).unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["hotel_name"], "Harbour");
        assert_eq!(json["total_guests"], 0);
        assert!(json["recent_bookings"].as_array().unwrap().is_empty());
    }
}
