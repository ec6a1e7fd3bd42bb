//! Infrastructure layer: entity store, application services, configuration.

pub mod config;
pub mod services;
pub mod store;

mod integration_tests;

pub use config::{ConfigError, HotelManagerConfig};
pub use services::{
    BookingRequest, BookingService, GuestService, HotelManager, HotelService, RoomService,
    ServiceError, ServiceResult,
};
pub use store::{EntityStore, InMemoryEntityStore, StoreError};
