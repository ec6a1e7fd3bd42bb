//! Room-type capacity policy.
//!
//! The dashboard's guest total is not a head count: each active booking
//! contributes the nominal capacity of its room type. This table is the single
//! place that policy lives.

use std::collections::HashMap;

use crate::room::RoomType;

/// Per-room-type guest capacity. Types missing from the table count as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTypeCapacity {
    // keyed by lowercase room-type label
    table: HashMap<String, u32>,
}

impl RoomTypeCapacity {
    /// An empty policy: every room type counts as 0.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Single = 1, Double = 2, Suite = 4.
    pub fn standard() -> Self {
        Self::empty()
            .with_capacity(&RoomType::Single, 1)
            .with_capacity(&RoomType::Double, 2)
            .with_capacity(&RoomType::Suite, 4)
    }

    /// Add or override the capacity of a room type.
    pub fn with_capacity(mut self, room_type: &RoomType, guests: u32) -> Self {
        self.table.insert(key(room_type), guests);
        self
    }

    pub fn capacity_of(&self, room_type: &RoomType) -> u32 {
        self.table.get(&key(room_type)).copied().unwrap_or(0)
    }
}

impl Default for RoomTypeCapacity {
    fn default() -> Self {
        Self::standard()
    }
}

fn key(room_type: &RoomType) -> String {
    room_type.label().to_ascii_lowercase()
}
