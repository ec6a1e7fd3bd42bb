use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::instrument;

use hotelman_booking::{
    active_bookings, available_rooms, compose_dashboard, current_guest_count, monthly_revenue,
    recent_bookings, BookingView, DashboardData, DashboardOptions, Hotel, RecentBooking, Room,
};
use hotelman_core::HotelId;

use super::error::{ServiceError, ServiceResult};
use crate::store::{EntityStore, HotelSnapshot};

/// Hotel registration plus the per-hotel read side (occupancy, revenue,
/// recent activity, dashboard).
///
/// Every hotel-scoped query resolves the hotel first, so an unknown id is
/// `NotFound` rather than an empty result.
#[derive(Debug, Clone)]
pub struct HotelService<S> {
    store: S,
    options: DashboardOptions,
}

impl<S> HotelService<S>
where
    S: EntityStore,
{
    pub fn new(store: S, options: DashboardOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    #[instrument(skip(self, address, email), err)]
    pub fn register_hotel(
        &self,
        name: &str,
        address: &str,
        city: &str,
        email: &str,
        rooms_per_floor: u32,
    ) -> ServiceResult<Hotel> {
        let hotel = Hotel::new(name, address, city, email, rooms_per_floor)?;
        self.store.insert_hotel(hotel.clone())?;
        tracing::info!(hotel_id = %hotel.id_typed(), "hotel registered");
        Ok(hotel)
    }

    pub fn get_hotel(&self, hotel_id: HotelId) -> ServiceResult<Hotel> {
        self.store.get_hotel(hotel_id)?.ok_or_else(|| {
            tracing::warn!(%hotel_id, "hotel not found");
            ServiceError::not_found(format!("hotel {hotel_id}"))
        })
    }

    pub fn list_hotels(&self) -> ServiceResult<Vec<Hotel>> {
        Ok(self.store.list_hotels()?)
    }

    /// Removes the hotel with its rooms and their bookings.
    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn delete_hotel(&self, hotel_id: HotelId) -> ServiceResult<()> {
        self.store.delete_hotel(hotel_id)?;
        tracing::info!("hotel deleted");
        Ok(())
    }

    pub fn rooms_per_floor(&self, hotel_id: HotelId) -> ServiceResult<u32> {
        Ok(self.get_hotel(hotel_id)?.rooms_per_floor())
    }

    /// Rooms of the hotel ordered by number.
    pub fn rooms(&self, hotel_id: HotelId) -> ServiceResult<Vec<Room>> {
        self.get_hotel(hotel_id)?;
        Ok(self.store.rooms_for_hotel(hotel_id)?)
    }

    /// All bookings of the hotel, newest check-in first.
    pub fn bookings(&self, hotel_id: HotelId) -> ServiceResult<Vec<BookingView>> {
        self.get_hotel(hotel_id)?;
        let mut views = self.store.booking_views(Some(hotel_id))?;
        views.sort_by(|a, b| b.check_in().cmp(&a.check_in()));
        Ok(views)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn active_bookings(
        &self,
        hotel_id: HotelId,
        as_of: DateTime<Utc>,
    ) -> ServiceResult<Vec<BookingView>> {
        let snapshot = self.snapshot(hotel_id)?;
        let active = active_bookings(&snapshot.bookings, hotel_id, as_of);
        tracing::debug!(count = active.len(), "active bookings");
        Ok(active)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn current_guest_count(&self, hotel_id: HotelId, as_of: DateTime<Utc>) -> ServiceResult<u32> {
        let snapshot = self.snapshot(hotel_id)?;
        let total = current_guest_count(&snapshot.bookings, hotel_id, as_of, &self.options.capacity);
        tracing::debug!(total, "current guest count");
        Ok(total)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn available_rooms(&self, hotel_id: HotelId, as_of: DateTime<Utc>) -> ServiceResult<Vec<Room>> {
        let snapshot = self.snapshot(hotel_id)?;
        let free = available_rooms(&snapshot.rooms, &snapshot.bookings, hotel_id, as_of);
        tracing::debug!(count = free.len(), "available rooms");
        Ok(free)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn monthly_revenue(&self, hotel_id: HotelId, as_of: DateTime<Utc>) -> ServiceResult<Decimal> {
        let snapshot = self.snapshot(hotel_id)?;
        let revenue = monthly_revenue(&snapshot.bookings, hotel_id, as_of)?;
        tracing::debug!(%revenue, "monthly revenue");
        Ok(revenue)
    }

    /// The `count` newest bookings; `None` uses the configured dashboard count.
    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn recent_bookings(
        &self,
        hotel_id: HotelId,
        count: Option<usize>,
    ) -> ServiceResult<Vec<RecentBooking>> {
        let snapshot = self.snapshot(hotel_id)?;
        let count = count.unwrap_or(self.options.recent_count);
        Ok(recent_bookings(&snapshot.bookings, hotel_id, count))
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn build_dashboard(&self, hotel_id: HotelId, as_of: DateTime<Utc>) -> ServiceResult<DashboardData> {
        let HotelSnapshot {
            hotel,
            rooms,
            bookings,
        } = self.snapshot(hotel_id)?;
        let dashboard = compose_dashboard(&hotel, &rooms, &bookings, as_of, &self.options)?;
        tracing::debug!(
            total_guests = dashboard.total_guests,
            available_rooms = dashboard.available_room_count(),
            active_bookings = dashboard.active_booking_count(),
            monthly_revenue = %dashboard.monthly_revenue,
            "dashboard built"
        );
        Ok(dashboard)
    }

    fn snapshot(&self, hotel_id: HotelId) -> ServiceResult<HotelSnapshot> {
        self.store.hotel_snapshot(hotel_id)?.ok_or_else(|| {
            tracing::warn!(%hotel_id, "hotel not found");
            ServiceError::not_found(format!("hotel {hotel_id}"))
        })
    }
}
