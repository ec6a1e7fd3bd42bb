use tracing::instrument;

use hotelman_booking::{guests_of_hotel, Guest, GuestWithBookings};
use hotelman_core::{GuestId, HotelId};

use super::error::{ServiceError, ServiceResult};
use crate::store::EntityStore;

#[derive(Debug, Clone)]
pub struct GuestService<S> {
    store: S,
}

impl<S> GuestService<S>
where
    S: EntityStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self, email, phone), err)]
    pub fn register_guest(&self, name: &str, email: &str, phone: &str) -> ServiceResult<Guest> {
        let guest = Guest::new(name, email, phone)?;
        self.store.insert_guest(guest.clone())?;
        tracing::info!(guest_id = %guest.id_typed(), "guest registered");
        Ok(guest)
    }

    pub fn get_guest(&self, guest_id: GuestId) -> ServiceResult<Guest> {
        self.store.get_guest(guest_id)?.ok_or_else(|| {
            tracing::warn!(%guest_id, "guest not found");
            ServiceError::not_found(format!("guest {guest_id}"))
        })
    }

    /// All guests ordered by name.
    pub fn list_guests(&self) -> ServiceResult<Vec<Guest>> {
        Ok(self.store.list_guests()?)
    }

    /// Guests who stayed in the hotel, each with their stays there.
    #[instrument(skip(self), fields(hotel_id = %hotel_id), err)]
    pub fn guests_of_hotel(&self, hotel_id: HotelId) -> ServiceResult<Vec<GuestWithBookings>> {
        if self.store.get_hotel(hotel_id)?.is_none() {
            return Err(ServiceError::not_found(format!("hotel {hotel_id}")));
        }
        let guests = self.store.list_guests()?;
        let views = self.store.booking_views(Some(hotel_id))?;
        let out = guests_of_hotel(&guests, &views, hotel_id);
        tracing::debug!(count = out.len(), "guests of hotel");
        Ok(out)
    }

    /// Fails with `Conflict` while bookings still reference the guest.
    #[instrument(skip(self), fields(guest_id = %guest_id), err)]
    pub fn delete_guest(&self, guest_id: GuestId) -> ServiceResult<()> {
        if let Err(e) = self.store.delete_guest(guest_id) {
            tracing::warn!(error = %e, "guest not deleted");
            return Err(e.into());
        }
        tracing::info!("guest deleted");
        Ok(())
    }
}
