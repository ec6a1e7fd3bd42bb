//! `hotelman-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the hotel booking
//! modules (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BookingId, GuestId, HotelId, RoomId};
pub use value_object::ValueObject;
