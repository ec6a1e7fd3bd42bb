use serde::Serialize;

use hotelman_core::{DomainError, DomainResult, Entity, GuestId, HotelId};

use crate::view::BookingView;

/// Guest: referenced by bookings, owned by none of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    id: GuestId,
    name: String,
    email: String,
    phone: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_id(GuestId::new(), name, email, phone)
    }

    pub fn with_id(
        id: GuestId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("guest name must not be empty"));
        }
        Ok(Self {
            id,
            name,
            email: email.into(),
            phone: phone.into(),
        })
    }

    pub fn id_typed(&self) -> GuestId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl Entity for Guest {
    type Id = GuestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A guest together with their stays in one hotel, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestWithBookings {
    pub guest: Guest,
    pub bookings: Vec<BookingView>,
}

/// Guests who have at least one booking in `hotel_id`, ordered by name.
pub fn guests_of_hotel(
    guests: &[Guest],
    bookings: &[BookingView],
    hotel_id: HotelId,
) -> Vec<GuestWithBookings> {
    let mut out: Vec<GuestWithBookings> = guests
        .iter()
        .filter_map(|guest| {
            let mut stays: Vec<BookingView> = bookings
                .iter()
                .filter(|b| b.hotel_id() == hotel_id && b.guest.id == guest.id)
                .cloned()
                .collect();
            if stays.is_empty() {
                return None;
            }
            stays.sort_by(|a, b| b.check_in().cmp(&a.check_in()));
            Some(GuestWithBookings {
                guest: guest.clone(),
                bookings: stays,
            })
        })
        .collect();

    out.sort_by(|a, b| a.guest.name.cmp(&b.guest.name));
    out
}
