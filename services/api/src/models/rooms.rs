//! Room models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
            RoomType::Deluxe => "DELUXE",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SINGLE" => Ok(RoomType::Single),
            "DOUBLE" => Ok(RoomType::Double),
            "SUITE" => Ok(RoomType::Suite),
            "DELUXE" => Ok(RoomType::Deluxe),
            _ => Err(UnknownVariant {
                kind: "room type",
                value: value.to_string(),
                expected: "SINGLE, DOUBLE, SUITE, DELUXE",
            }),
        }
    }
}

/// Occupancy state, owned by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Booked,
    Maintenance,
}

/// Room creation and update payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_number: String,
    pub room_type: RoomType,
    pub price: f64,
}

/// Room as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_request_wire_format() {
        let request = RoomRequest {
            room_number: "101".to_string(),
            room_type: RoomType::Deluxe,
            price: 250.0,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"roomNumber": "101", "roomType": "DELUXE", "price": 250.0})
        );
    }

    #[test]
    fn test_room_decodes_server_shape() {
        let room: Room = serde_json::from_value(json!({
            "id": 3,
            "roomNumber": "204",
            "roomType": "SUITE",
            "price": 320.5,
            "status": "MAINTENANCE"
        }))
        .unwrap();
        assert_eq!(room.room_type, RoomType::Suite);
        assert_eq!(room.status, RoomStatus::Maintenance);
    }

    #[test]
    fn test_room_type_from_str() {
        assert_eq!("double".parse::<RoomType>().unwrap(), RoomType::Double);
        assert!("PENTHOUSE".parse::<RoomType>().is_err());
    }
}
