use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub total_rooms: i64,
    pub owner_id: i64,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub total_rooms: i64,
    pub owner_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    pub owner_id: i64,
}
