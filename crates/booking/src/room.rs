use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hotelman_core::{DomainError, DomainResult, Entity, HotelId, RoomId};

/// Room category.
///
/// The three standard categories are recognised case-insensitively; any other
/// label is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Other(String),
}

impl RoomType {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("single") {
            Self::Single
        } else if label.eq_ignore_ascii_case("double") {
            Self::Double
        } else if label.eq_ignore_ascii_case("suite") {
            Self::Suite
        } else {
            Self::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Suite => "Suite",
            Self::Other(label) => label,
        }
    }
}

impl core::fmt::Display for RoomType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for RoomType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.label().to_string()
    }
}

/// Stored room status.
///
/// This is an administrative label; whether a room is occupied *today* is
/// computed from bookings (see [`crate::occupancy`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoomStatus {
    Available,
    Booked,
    Maintenance,
}

impl core::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(DomainError::invalid_argument(format!(
                "unknown room status '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for RoomStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomStatus> for String {
    fn from(value: RoomStatus) -> Self {
        value.to_string()
    }
}

/// Room: belongs to exactly one hotel; `number` is unique within that hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    hotel_id: HotelId,
    number: u32,
    room_type: RoomType,
    price_per_night: Decimal,
    status: RoomStatus,
}

impl Room {
    /// Create an `Available` room.
    pub fn new(
        hotel_id: HotelId,
        number: u32,
        room_type: RoomType,
        price_per_night: Decimal,
    ) -> DomainResult<Self> {
        Self::with_id(RoomId::new(), hotel_id, number, room_type, price_per_night)
    }

    pub fn with_id(
        id: RoomId,
        hotel_id: HotelId,
        number: u32,
        room_type: RoomType,
        price_per_night: Decimal,
    ) -> DomainResult<Self> {
        if price_per_night < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "price_per_night must not be negative",
            ));
        }

        Ok(Self {
            id,
            hotel_id,
            number,
            room_type,
            price_per_night,
            status: RoomStatus::Available,
        })
    }

    pub fn id_typed(&self) -> RoomId {
        self.id
    }

    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    pub fn price_per_night(&self) -> Decimal {
        self.price_per_night
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_room_types_parse_case_insensitively() {
        assert_eq!(RoomType::from_label("single"), RoomType::Single);
        assert_eq!(RoomType::from_label(" DOUBLE "), RoomType::Double);
        assert_eq!(RoomType::from_label("Suite"), RoomType::Suite);
        assert_eq!(
            RoomType::from_label("Penthouse"),
            RoomType::Other("Penthouse".to_string())
        );
    }

    #[test]
    fn room_type_serializes_as_label() {
        let json = serde_json::to_string(&RoomType::Suite).unwrap();
        assert_eq!(json, "\"Suite\"");
        let parsed: RoomType = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(parsed, RoomType::Double);
    }

    #[test]
    fn room_status_accepts_lowercase_labels() {
        assert_eq!("available".parse::<RoomStatus>().unwrap(), RoomStatus::Available);
        assert_eq!("Booked".parse::<RoomStatus>().unwrap(), RoomStatus::Booked);
        assert!("closed".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn room_status_serializes_as_display_label() {
        let json = serde_json::to_string(&RoomStatus::Available).unwrap();
        assert_eq!(json, "\"Available\"");
        assert_eq!(json, format!("\"{}\"", RoomStatus::Available));

        let parsed: RoomStatus = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(parsed, RoomStatus::Available);
        let parsed: RoomStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(parsed, RoomStatus::Maintenance);
        assert!(serde_json::from_str::<RoomStatus>("\"closed\"").is_err());
    }

    #[test]
    fn new_room_starts_available() {
        let room = Room::new(HotelId::new(), 101, RoomType::Single, Decimal::from(100)).unwrap();
        assert_eq!(room.status(), RoomStatus::Available);
        assert_eq!(room.number(), 101);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Room::new(HotelId::new(), 101, RoomType::Single, Decimal::from(-1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn free_room_is_allowed() {
        let room = Room::new(HotelId::new(), 101, RoomType::Single, Decimal::ZERO).unwrap();
        assert_eq!(room.price_per_night(), Decimal::ZERO);
    }
}
