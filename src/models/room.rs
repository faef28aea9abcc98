use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomType {
    /// Parses a free-form label such as "Deluxe" or "presidential".
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace(' ', "_").as_str() {
            "standard" => Some(Self::Standard),
            "deluxe" => Some(Self::Deluxe),
            "suite" => Some(Self::Suite),
            "presidential" => Some(Self::Presidential),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_number: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub price_per_night: f64,
    pub max_guests: i64,
    pub amenities: Json<Vec<String>>,
    pub created_at: chrono::NaiveDateTime,
}

impl Room {
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            number: self.room_number.clone(),
            room_type: self.room_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub hotel_id: i64,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: Option<RoomStatus>,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    #[validate(range(min = 1))]
    pub max_guests: Option<i64>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomStatus {
    pub status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_labels_are_normalised() {
        assert_eq!(RoomType::from_label("Deluxe"), Some(RoomType::Deluxe));
        assert_eq!(RoomType::from_label(" SUITE "), Some(RoomType::Suite));
        assert_eq!(RoomType::from_label("presidential"), Some(RoomType::Presidential));
        assert_eq!(RoomType::from_label("penthouse"), None);
        assert_eq!(RoomType::from_label(""), None);
    }

    #[test]
    fn room_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&RoomStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
        let parsed: RoomStatus = serde_json::from_str("\"reserved\"").unwrap();
        assert_eq!(parsed, RoomStatus::Reserved);
    }
}
