pub mod booking;
pub mod guest;
pub mod hotel;
pub mod room;
pub mod staff;
pub mod stats;
pub mod task;
pub mod user;

pub use booking::{Booking, BookingStatus, NewBooking, PaymentStatus, PopulatedBooking};
pub use guest::{Guest, GuestSummary, NewGuest};
pub use hotel::{Hotel, NewHotel};
pub use room::{NewRoom, Room, RoomStatus, RoomSummary, RoomType};
pub use staff::{NewStaff, Staff};
pub use stats::DashboardStats;
pub use task::{NewTask, Task, TaskPriority, TaskStatus};
pub use user::{NewUser, User, UserRole};

/// Deserialization helpers for form-style payloads.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    /// Accepts `2`, `"2"` or `null`. Blank strings read as absent.
    pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::Number(n)) => Ok(Some(n)),
            Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(NumberOrString::Text(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
