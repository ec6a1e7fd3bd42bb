use serde::Serialize;

use hotelman_core::{DomainError, DomainResult, Entity, HotelId};

/// Hotel: the owner of rooms and the unit every dashboard aggregates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    id: HotelId,
    name: String,
    address: String,
    city: String,
    email: String,
    rooms_per_floor: u32,
}

impl Hotel {
    /// Register a new hotel.
    ///
    /// `rooms_per_floor` drives floor-grouped room numbering and must be positive.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
        rooms_per_floor: u32,
    ) -> DomainResult<Self> {
        Self::with_id(HotelId::new(), name, address, city, email, rooms_per_floor)
    }

    pub fn with_id(
        id: HotelId,
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
        rooms_per_floor: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("hotel name must not be empty"));
        }
        if rooms_per_floor == 0 {
            return Err(DomainError::invalid_argument(
                "rooms_per_floor must be positive",
            ));
        }

        Ok(Self {
            id,
            name,
            address: address.into(),
            city: city.into(),
            email: email.into(),
            rooms_per_floor,
        })
    }

    pub fn id_typed(&self) -> HotelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn rooms_per_floor(&self) -> u32 {
        self.rooms_per_floor
    }
}

impl Entity for Hotel {
    type Id = HotelId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
