use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hotelman_booking::{ensure_available, Booking, BookingView, Guest, Hotel, Room, RoomStatus};
use hotelman_core::{BookingId, DomainError, GuestId, HotelId, RoomId};

use super::r#trait::{EntityStore, HotelSnapshot, StoreError};

#[derive(Debug, Default)]
struct Tables {
    hotels: HashMap<HotelId, Hotel>,
    rooms: HashMap<RoomId, Room>,
    guests: HashMap<GuestId, Guest>,
    // insertion order, so equal check-ins keep a stable order
    bookings: Vec<Booking>,
}

impl Tables {
    fn views(&self, hotel_id: Option<HotelId>) -> Vec<BookingView> {
        let mut views: Vec<BookingView> = self
            .bookings
            .iter()
            .filter_map(|b| {
                let room = self.rooms.get(&b.room_id())?;
                if hotel_id.is_some_and(|h| room.hotel_id() != h) {
                    return None;
                }
                let guest = self.guests.get(&b.guest_id())?;
                Some(BookingView::new(b, guest, room))
            })
            .collect();
        views.sort_by_key(|v| v.check_in());
        views
    }

    fn rooms_of(&self, hotel_id: HotelId) -> Vec<Room> {
        let mut rooms: Vec<Room> = self
            .rooms
            .values()
            .filter(|r| r.hotel_id() == hotel_id)
            .cloned()
            .collect();
        rooms.sort_by_key(Room::number);
        rooms
    }
}

/// In-memory entity store.
///
/// Intended for tests/dev. Every write takes the single table lock, which is
/// what makes `reserve` (overlap check + insert) and room-number uniqueness
/// atomic.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    tables: RwLock<Tables>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl EntityStore for InMemoryEntityStore {
    fn insert_hotel(&self, hotel: Hotel) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let id = hotel.id_typed();
        if tables.hotels.contains_key(&id) {
            return Err(StoreError::Conflict(format!("hotel {id} already exists")));
        }
        tables.hotels.insert(id, hotel);
        Ok(())
    }

    fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, StoreError> {
        Ok(self.read()?.hotels.get(&id).cloned())
    }

    fn list_hotels(&self) -> Result<Vec<Hotel>, StoreError> {
        let mut hotels: Vec<Hotel> = self.read()?.hotels.values().cloned().collect();
        hotels.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(hotels)
    }

    fn delete_hotel(&self, id: HotelId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if tables.hotels.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("hotel {id}")));
        }
        tables.rooms.retain(|_, room| room.hotel_id() != id);
        let Tables {
            rooms, bookings, ..
        } = &mut *tables;
        bookings.retain(|b| rooms.contains_key(&b.room_id()));
        Ok(())
    }

    fn insert_room(&self, room: Room) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let hotel_id = room.hotel_id();
        if !tables.hotels.contains_key(&hotel_id) {
            return Err(StoreError::NotFound(format!("hotel {hotel_id}")));
        }
        let taken = tables
            .rooms
            .values()
            .any(|r| r.hotel_id() == hotel_id && r.number() == room.number());
        if taken {
            return Err(StoreError::Conflict(format!(
                "room number {} already exists in hotel {hotel_id}",
                room.number()
            )));
        }
        tables.rooms.insert(room.id_typed(), room);
        Ok(())
    }

    fn get_room(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.read()?.rooms.get(&id).cloned())
    }

    fn rooms_for_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, StoreError> {
        Ok(self.read()?.rooms_of(hotel_id))
    }

    fn update_room_status(&self, id: RoomId, status: RoomStatus) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let room = tables
            .rooms
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("room {id}")))?;
        room.set_status(status);
        Ok(())
    }

    fn delete_room(&self, id: RoomId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if tables.rooms.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("room {id}")));
        }
        tables.bookings.retain(|b| b.room_id() != id);
        Ok(())
    }

    fn insert_guest(&self, guest: Guest) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let id = guest.id_typed();
        if tables.guests.contains_key(&id) {
            return Err(StoreError::Conflict(format!("guest {id} already exists")));
        }
        tables.guests.insert(id, guest);
        Ok(())
    }

    fn get_guest(&self, id: GuestId) -> Result<Option<Guest>, StoreError> {
        Ok(self.read()?.guests.get(&id).cloned())
    }

    fn list_guests(&self) -> Result<Vec<Guest>, StoreError> {
        let mut guests: Vec<Guest> = self.read()?.guests.values().cloned().collect();
        guests.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(guests)
    }

    fn delete_guest(&self, id: GuestId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if !tables.guests.contains_key(&id) {
            return Err(StoreError::NotFound(format!("guest {id}")));
        }
        let referenced = tables.bookings.iter().filter(|b| b.guest_id() == id).count();
        if referenced > 0 {
            return Err(StoreError::Conflict(format!(
                "guest {id} is referenced by {referenced} booking(s)"
            )));
        }
        tables.guests.remove(&id);
        Ok(())
    }

    fn reserve(&self, booking: Booking) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let room_id = booking.room_id();
        if !tables.rooms.contains_key(&room_id) {
            return Err(StoreError::NotFound(format!("room {room_id}")));
        }
        if !tables.guests.contains_key(&booking.guest_id()) {
            return Err(StoreError::NotFound(format!("guest {}", booking.guest_id())));
        }
        if tables.bookings.iter().any(|b| b.id_typed() == booking.id_typed()) {
            return Err(StoreError::Conflict(format!(
                "booking {} already exists",
                booking.id_typed()
            )));
        }

        ensure_available(&tables.bookings, room_id, booking.stay()).map_err(|e| match e {
            DomainError::Conflict(msg) => StoreError::Conflict(msg),
            other => StoreError::Conflict(other.to_string()),
        })?;

        tables.bookings.push(booking);
        Ok(())
    }

    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .read()?
            .bookings
            .iter()
            .find(|b| b.id_typed() == id)
            .cloned())
    }

    fn bookings_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError> {
        let mut bookings: Vec<Booking> = self
            .read()?
            .bookings
            .iter()
            .filter(|b| b.room_id() == room_id)
            .cloned()
            .collect();
        bookings.sort_by_key(Booking::check_in);
        Ok(bookings)
    }

    fn booking_views(&self, hotel_id: Option<HotelId>) -> Result<Vec<BookingView>, StoreError> {
        Ok(self.read()?.views(hotel_id))
    }

    fn delete_booking(&self, id: BookingId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.id_typed() != id);
        if tables.bookings.len() == before {
            return Err(StoreError::NotFound(format!("booking {id}")));
        }
        Ok(())
    }

    fn hotel_snapshot(&self, hotel_id: HotelId) -> Result<Option<HotelSnapshot>, StoreError> {
        let tables = self.read()?;
        let Some(hotel) = tables.hotels.get(&hotel_id).cloned() else {
            return Ok(None);
        };
        Ok(Some(HotelSnapshot {
            hotel,
            rooms: tables.rooms_of(hotel_id),
            bookings: tables.views(Some(hotel_id)),
        }))
    }
}
