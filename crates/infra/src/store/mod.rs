//! Entity store boundary.
//!
//! The domain crates never touch storage; services read snapshots through
//! [`EntityStore`] and hand them to the pure aggregations.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryEntityStore;
pub use r#trait::{EntityStore, HotelSnapshot, StoreError};
