//! Integration tests for the full store + services flow.
//!
//! Verifies:
//! - Bookings created through the services drive the dashboard figures
//! - Overlapping reservations are rejected, back-to-back ones accepted
//! - Concurrent reservations of one room yield exactly one winner
//! - Cascading deletes keep the read side consistent

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    use hotelman_booking::{Hotel, Room, RoomStatus, RoomType};
    use hotelman_core::HotelId;

    use crate::config::HotelManagerConfig;
    use crate::services::{BookingRequest, HotelManager, ServiceError};
    use crate::store::InMemoryEntityStore;

    type Manager = HotelManager<Arc<InMemoryEntityStore>>;

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap()
    }

    fn noon(offset_days: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap() + Duration::days(offset_days)
    }

    fn setup() -> Manager {
        let config =
            HotelManagerConfig::from_vars([("HOTELMAN_LOG", "hotelman_infra=debug")]).unwrap();
        config.init_logging();
        HotelManager::new(Arc::new(InMemoryEntityStore::new()), &config)
    }

    fn hotel_with_rooms(m: &Manager) -> (Hotel, Room, Room, Room) {
        let hotel = m
            .hotels
            .register_hotel("Harbour", "2 Quay", "Varna", "hi@harbour.test", 10)
            .unwrap();
        let single = m
            .rooms
            .add_room(hotel.id_typed(), RoomType::Single, Decimal::from(100))
            .unwrap();
        let suite = m
            .rooms
            .add_room(hotel.id_typed(), RoomType::Suite, Decimal::from(150))
            .unwrap();
        let double = m
            .rooms
            .add_room(hotel.id_typed(), RoomType::Double, Decimal::from(120))
            .unwrap();
        (hotel, single, suite, double)
    }

    fn request(m: &Manager, room: &Room, guest_name: &str, from: i64, to: i64) -> BookingRequest {
        let guest = m
            .guests
            .register_guest(guest_name, "guest@example.test", "555")
            .unwrap();
        BookingRequest {
            guest_id: guest.id_typed(),
            room_id: room.id_typed(),
            check_in: noon(from),
            check_out: noon(to),
        }
    }

    #[test]
    fn dashboard_reflects_bookings_made_through_services() {
        let m = setup();
        let (hotel, single, suite, double) = hotel_with_rooms(&m);
        assert_eq!(
            (single.number(), suite.number(), double.number()),
            (101, 102, 103)
        );

        m.bookings
            .create_booking(request(&m, &single, "Ivo", -1, 2), today())
            .unwrap();
        m.bookings
            .create_booking(request(&m, &suite, "Maria", 0, 1), today())
            .unwrap();

        let dashboard = m.hotels.build_dashboard(hotel.id_typed(), today()).unwrap();
        assert_eq!(dashboard.hotel_name, "Harbour");
        assert_eq!(dashboard.total_guests, 5);
        assert_eq!(dashboard.active_booking_count(), 2);
        assert_eq!(dashboard.available_room_count(), 1);
        assert_eq!(dashboard.available_rooms[0].id_typed(), double.id_typed());
        assert_eq!(dashboard.monthly_revenue, Decimal::from(450));
        assert_eq!(dashboard.recent_bookings[0].guest_name, "Maria");

        assert_eq!(
            m.rooms.get_room(single.id_typed()).unwrap().status(),
            RoomStatus::Booked
        );

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["total_guests"], 5);
        assert_eq!(json["active_bookings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn recent_bookings_are_newest_first() {
        let m = setup();
        let (hotel, single, suite, double) = hotel_with_rooms(&m);
        m.bookings
            .create_booking(request(&m, &single, "A", 0, 1), today())
            .unwrap();
        m.bookings
            .create_booking(request(&m, &suite, "B", 2, 3), today())
            .unwrap();
        m.bookings
            .create_booking(request(&m, &double, "C", 5, 6), today())
            .unwrap();

        let recent = m.hotels.recent_bookings(hotel.id_typed(), Some(2)).unwrap();
        let names: Vec<&str> = recent.iter().map(|r| r.guest_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn overlap_is_conflict_and_back_to_back_succeeds() {
        let m = setup();
        let (_hotel, single, _, _) = hotel_with_rooms(&m);

        m.bookings
            .create_booking(request(&m, &single, "First", 0, 3), today())
            .unwrap();
        let err = m
            .bookings
            .create_booking(request(&m, &single, "Second", 2, 4), today())
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        m.bookings
            .create_booking(request(&m, &single, "Third", 3, 5), today())
            .unwrap();
    }

    #[test]
    fn concurrent_reservations_of_one_room_have_a_single_winner() {
        let m = setup();
        let (_hotel, single, _, _) = hotel_with_rooms(&m);
        let requests: Vec<BookingRequest> = (0..8)
            .map(|i| request(&m, &single, &format!("Racer {i}"), 1, 3))
            .collect();

        let results: Vec<Result<_, ServiceError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = requests
                .iter()
                .map(|req| {
                    let bookings = &m.bookings;
                    scope.spawn(move || bookings.create_booking(*req, today()))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        let winners = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(ServiceError::Conflict(_))))
            .count();
        assert_eq!(winners, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(m.bookings.list_bookings().unwrap().len(), 1);
    }

    #[test]
    fn unknown_hotel_is_not_found_everywhere() {
        let m = setup();
        let missing = HotelId::new();
        assert!(matches!(
            m.hotels.build_dashboard(missing, today()),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            m.rooms.add_room(missing, RoomType::Single, Decimal::from(10)),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            m.guests.guests_of_hotel(missing),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn deleting_a_hotel_cascades_and_frees_guests() {
        let m = setup();
        let (hotel, single, _, _) = hotel_with_rooms(&m);
        let req = request(&m, &single, "Leaving", 0, 1);
        m.bookings.create_booking(req, today()).unwrap();

        assert!(matches!(
            m.guests.delete_guest(req.guest_id),
            Err(ServiceError::Conflict(_))
        ));

        m.hotels.delete_hotel(hotel.id_typed()).unwrap();
        assert!(m.bookings.list_bookings().unwrap().is_empty());
        assert!(matches!(
            m.rooms.get_room(single.id_typed()),
            Err(ServiceError::NotFound(_))
        ));
        m.guests.delete_guest(req.guest_id).unwrap();
    }

    #[test]
    fn configured_recent_count_and_capacity_flow_into_dashboard() {
        let config = HotelManagerConfig::from_vars([
            ("HOTELMAN_RECENT_BOOKINGS", "1"),
            ("HOTELMAN_CAPACITY_SUITE", "6"),
        ])
        .unwrap();
        let m = HotelManager::new(Arc::new(InMemoryEntityStore::new()), &config);
        let (hotel, single, suite, _) = hotel_with_rooms(&m);
        m.bookings
            .create_booking(request(&m, &single, "A", 0, 1), today())
            .unwrap();
        m.bookings
            .create_booking(request(&m, &suite, "B", 0, 2), today())
            .unwrap();

        let dashboard = m.hotels.build_dashboard(hotel.id_typed(), today()).unwrap();
        assert_eq!(dashboard.total_guests, 7);
        assert_eq!(dashboard.recent_bookings.len(), 1);
    }
}
