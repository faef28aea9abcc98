use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::room::RoomStatus;
use super::{de, GuestSummary, RoomSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Room status implied by moving a booking into this status, if any.
    ///
    /// The effect does not depend on the previous booking status.
    pub fn room_effect(self) -> Option<RoomStatus> {
        match self {
            Self::CheckedIn => Some(RoomStatus::Occupied),
            Self::CheckedOut | Self::Cancelled => Some(RoomStatus::Available),
            Self::Pending | Self::Confirmed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub number_of_guests: i64,
    pub special_requests: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
}

/// Storage-level insert. Unset statuses default to `pending`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub hotel_id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_amount: f64,
    pub status: Option<BookingStatus>,
    pub number_of_guests: Option<i64>,
    pub special_requests: Option<String>,
    pub payment_status: Option<PaymentStatus>,
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub hotel_id: i64,
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[validate(length(min = 1, message = "Room type is required"))]
    pub room_type: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i64>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

/// A booking joined with summaries of its guest and room.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedBooking {
    #[serde(flatten)]
    pub booking: Booking,
    pub guest: Option<GuestSummary>,
    pub room: Option<RoomSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_occupies_the_room() {
        assert_eq!(BookingStatus::CheckedIn.room_effect(), Some(RoomStatus::Occupied));
    }

    #[test]
    fn check_out_and_cancel_release_the_room() {
        assert_eq!(BookingStatus::CheckedOut.room_effect(), Some(RoomStatus::Available));
        assert_eq!(BookingStatus::Cancelled.room_effect(), Some(RoomStatus::Available));
    }

    #[test]
    fn pending_and_confirmed_leave_the_room_alone() {
        assert_eq!(BookingStatus::Pending.room_effect(), None);
        assert_eq!(BookingStatus::Confirmed.room_effect(), None);
    }

    #[test]
    fn create_booking_accepts_guest_count_as_string() {
        let body = serde_json::json!({
            "hotelId": 1,
            "guestName": "Ada Lovelace",
            "email": "ada@example.com",
            "checkInDate": "2024-03-01",
            "checkOutDate": "2024-03-04",
            "roomType": "deluxe",
            "numberOfGuests": "2",
            "specialRequests": ""
        });
        let req: CreateBooking = serde_json::from_value(body).unwrap();
        assert_eq!(req.number_of_guests, Some(2));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn populated_booking_flattens_the_booking_fields() {
        let booking = Booking {
            id: 7,
            hotel_id: 1,
            room_id: 3,
            guest_id: 4,
            check_in_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            total_amount: 120.0,
            status: BookingStatus::CheckedIn,
            number_of_guests: 1,
            special_requests: None,
            payment_status: PaymentStatus::Paid,
            created_at: NaiveDate::from_ymd_opt(2024, 2, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let value = serde_json::to_value(PopulatedBooking {
            booking,
            guest: None,
            room: None,
        })
        .unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["status"], "checked_in");
        assert_eq!(value["paymentStatus"], "paid");
        assert!(value["guest"].is_null());
        assert!(value["room"].is_null());
    }
}
