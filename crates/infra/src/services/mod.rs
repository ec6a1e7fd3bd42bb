//! Application services over an [`EntityStore`].
//!
//! Each service loads snapshots from the store, hands them to the pure
//! functions in `hotelman-booking`, and maps every failure into
//! [`ServiceError`].

pub mod booking_service;
pub mod error;
pub mod guest_service;
pub mod hotel_service;
pub mod room_service;

pub use booking_service::{BookingRequest, BookingService};
pub use error::{ServiceError, ServiceResult};
pub use guest_service::GuestService;
pub use hotel_service::HotelService;
pub use room_service::RoomService;

use crate::config::HotelManagerConfig;
use crate::store::EntityStore;

/// All services wired to one shared store.
///
/// `S` is usually an `Arc` around a concrete store, so each service holds a
/// cheap clone of the same handle.
#[derive(Debug, Clone)]
pub struct HotelManager<S> {
    pub hotels: HotelService<S>,
    pub rooms: RoomService<S>,
    pub guests: GuestService<S>,
    pub bookings: BookingService<S>,
}

impl<S> HotelManager<S>
where
    S: EntityStore + Clone,
{
    pub fn new(store: S, config: &HotelManagerConfig) -> Self {
        tracing::info!(
            recent_bookings = config.recent_bookings,
            "hotel manager initialized"
        );
        Self {
            hotels: HotelService::new(store.clone(), config.dashboard_options()),
            rooms: RoomService::new(store.clone()),
            guests: GuestService::new(store.clone()),
            bookings: BookingService::new(store),
        }
    }
}
