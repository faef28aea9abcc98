use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub hotel_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    // receptionist, housekeeper, maintenance, security, manager
    pub position: String,
    pub department: String,
    pub salary: Option<f64>,
    pub hire_date: NaiveDateTime,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub hotel_id: i64,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    pub hire_date: DateTime<Utc>,
    pub is_active: Option<bool>,
}

impl NewStaff {
    pub fn hire_date(&self) -> NaiveDateTime {
        self.hire_date.naive_utc()
    }
}
