//! Persistence behind one interface.
//!
//! [`MemStorage`] keeps every table in process memory; [`SqliteStorage`] maps
//! the same operations onto the relational schema in `migrations/`. Both apply
//! the booking/room status rules in [`Storage::create_booking`] and
//! [`Storage::update_booking_status`].

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::models::*;

mod memory;
mod sqlite;

pub use memory::MemStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, sqlx::Error>;

/// Partial update of a user. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub hotel_id: Option<i64>,
}

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;
    async fn count_users(&self) -> StorageResult<i64>;
    async fn create_user(&self, user: NewUser) -> StorageResult<User>;
    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<Option<User>>;
    async fn update_user_password(&self, id: i64, password: &str) -> StorageResult<Option<User>>;

    // Hotels
    async fn get_hotel(&self, id: i64) -> StorageResult<Option<Hotel>>;
    async fn get_hotels_by_owner(&self, owner_id: i64) -> StorageResult<Vec<Hotel>>;
    async fn create_hotel(&self, hotel: NewHotel) -> StorageResult<Hotel>;

    // Rooms
    async fn get_room(&self, id: i64) -> StorageResult<Option<Room>>;
    async fn get_rooms_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Room>>;
    async fn get_room_by_number(
        &self,
        hotel_id: i64,
        room_number: &str,
    ) -> StorageResult<Option<Room>>;
    async fn create_room(&self, room: NewRoom) -> StorageResult<Room>;
    /// Overwrites the room status. No booking is touched.
    async fn update_room_status(&self, id: i64, status: RoomStatus)
        -> StorageResult<Option<Room>>;

    // Guests
    async fn get_guest(&self, id: i64) -> StorageResult<Option<Guest>>;
    async fn get_guest_by_email(&self, email: &str) -> StorageResult<Option<Guest>>;
    async fn create_guest(&self, guest: NewGuest) -> StorageResult<Guest>;

    // Bookings
    async fn get_booking(&self, id: i64) -> StorageResult<Option<Booking>>;
    async fn get_bookings_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Booking>>;
    /// Newest first, at most `limit` entries.
    async fn get_recent_bookings(&self, hotel_id: i64, limit: usize)
        -> StorageResult<Vec<Booking>>;
    /// Inserts the booking and marks its room `reserved`, whatever the
    /// booking's own status.
    async fn create_booking(&self, booking: NewBooking) -> StorageResult<Booking>;
    /// Sets the booking status and applies [`BookingStatus::room_effect`] to
    /// the booked room. Returns `None` when the booking does not exist.
    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> StorageResult<Option<Booking>>;

    // Staff
    async fn get_staff_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Staff>>;
    async fn create_staff(&self, staff: NewStaff) -> StorageResult<Staff>;

    // Tasks
    async fn get_tasks_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Task>>;
    /// Tasks with a due date in `[from, until)`.
    async fn get_tasks_due_between(
        &self,
        hotel_id: i64,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> StorageResult<Vec<Task>>;
    async fn create_task(&self, task: NewTask) -> StorageResult<Task>;
    /// Sets the task status. Moving to `completed` stamps `completed_at` with
    /// `now` unless it is already set.
    async fn update_task_status(
        &self,
        id: i64,
        status: TaskStatus,
        now: NaiveDateTime,
    ) -> StorageResult<Option<Task>>;
}

/// Per-backend conformance checks, run against both implementations.
#[cfg(test)]
pub(crate) mod conformance {
    use chrono::NaiveDate;

    use super::*;

    pub async fn seed_hotel(store: &dyn Storage) -> (Hotel, Room, Room, Guest) {
        let hotel = store
            .create_hotel(NewHotel {
                name: "Harbour View".into(),
                address: "1 Quay St".into(),
                phone: "+1-555-0100".into(),
                email: "desk@harbour.test".into(),
                total_rooms: 2,
                owner_id: 1,
            })
            .await
            .unwrap();
        let room = |number: &str, status| NewRoom {
            hotel_id: hotel.id,
            room_number: number.into(),
            room_type: RoomType::Standard,
            status: Some(status),
            price_per_night: 120.0,
            max_guests: None,
            amenities: vec!["WiFi".into()],
        };
        let r101 = store.create_room(room("101", RoomStatus::Available)).await.unwrap();
        let r102 = store.create_room(room("102", RoomStatus::Occupied)).await.unwrap();
        let guest = store
            .create_guest(NewGuest::from_display_name("Sarah Johnson", "sarah@example.com"))
            .await
            .unwrap();
        (hotel, r101, r102, guest)
    }

    pub fn new_booking(hotel: &Hotel, room: &Room, guest: &Guest) -> NewBooking {
        NewBooking {
            hotel_id: hotel.id,
            room_id: room.id,
            guest_id: guest.id,
            check_in_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            total_amount: 240.0,
            status: None,
            number_of_guests: None,
            special_requests: None,
            payment_status: None,
        }
    }

    pub async fn booking_lifecycle_drives_room_status(store: &dyn Storage) {
        let (hotel, r101, _, guest) = seed_hotel(store).await;
        assert_eq!(r101.status, RoomStatus::Available);

        let booking = store
            .create_booking(new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.number_of_guests, 1);
        let room = store.get_room(r101.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Reserved);

        let steps = [
            (BookingStatus::Confirmed, RoomStatus::Reserved),
            (BookingStatus::CheckedIn, RoomStatus::Occupied),
            (BookingStatus::CheckedOut, RoomStatus::Available),
            // No legal-transition table: a finished stay can be reopened.
            (BookingStatus::Confirmed, RoomStatus::Available),
            (BookingStatus::CheckedIn, RoomStatus::Occupied),
            (BookingStatus::Cancelled, RoomStatus::Available),
        ];
        for (status, expected_room) in steps {
            let updated = store
                .update_booking_status(booking.id, status)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(updated.status, status);
            let room = store.get_room(r101.id).await.unwrap().unwrap();
            assert_eq!(room.status, expected_room, "after {status:?}");
        }
    }

    pub async fn missing_booking_is_none(store: &dyn Storage) {
        let updated = store
            .update_booking_status(9_999, BookingStatus::CheckedIn)
            .await
            .unwrap();
        assert!(updated.is_none());
        let room = store
            .update_room_status(9_999, RoomStatus::Maintenance)
            .await
            .unwrap();
        assert!(room.is_none());
    }

    pub async fn create_booking_reserves_even_when_confirmed(store: &dyn Storage) {
        let (hotel, _, r102, guest) = seed_hotel(store).await;
        let mut req = new_booking(&hotel, &r102, &guest);
        req.status = Some(BookingStatus::CheckedIn);
        req.payment_status = Some(PaymentStatus::Paid);
        let booking = store.create_booking(req).await.unwrap();
        assert_eq!(booking.status, BookingStatus::CheckedIn);
        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        let room = store.get_room(r102.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Reserved);
    }

    pub async fn room_status_overwrite_leaves_bookings(store: &dyn Storage) {
        let (hotel, r101, _, guest) = seed_hotel(store).await;
        let booking = store
            .create_booking(new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();
        let room = store
            .update_room_status(r101.id, RoomStatus::Maintenance)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
        let unchanged = store.get_booking(booking.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, BookingStatus::Pending);
    }

    pub async fn recent_bookings_are_newest_first(store: &dyn Storage) {
        let (hotel, r101, r102, guest) = seed_hotel(store).await;
        let first = store
            .create_booking(new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();
        let second = store
            .create_booking(new_booking(&hotel, &r102, &guest))
            .await
            .unwrap();
        let third = store
            .create_booking(new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();

        let recent = store.get_recent_bookings(hotel.id, 2).await.unwrap();
        let ids: Vec<i64> = recent.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![third.id, second.id]);

        let all = store.get_recent_bookings(hotel.id, 10).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().map(|b| b.id), Some(first.id));

        assert!(store.get_recent_bookings(hotel.id + 1, 10).await.unwrap().is_empty());
    }

    pub async fn task_completion_is_stamped_once(store: &dyn Storage) {
        let due = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let task = store
            .create_task(NewTask {
                hotel_id: 1,
                title: "Room 205 cleaning".into(),
                description: None,
                assigned_to: Some(3),
                status: None,
                priority: None,
                due_date: Some(due.and_utc()),
            })
            .await
            .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.completed_at.is_none());

        let first = due + chrono::Duration::hours(1);
        let done = store
            .update_task_status(task.id, TaskStatus::Completed, first)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(done.completed_at, Some(first));

        let later = first + chrono::Duration::hours(1);
        let again = store
            .update_task_status(task.id, TaskStatus::Completed, later)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(again.completed_at, Some(first));

        let from = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let until = from + chrono::Duration::days(1);
        let due_today = store.get_tasks_due_between(1, from, until).await.unwrap();
        assert_eq!(due_today.len(), 1);
        let due_tomorrow = store
            .get_tasks_due_between(1, until, until + chrono::Duration::days(1))
            .await
            .unwrap();
        assert!(due_tomorrow.is_empty());
    }

    pub async fn users_update_in_place(store: &dyn Storage) {
        let user = store
            .create_user(NewUser {
                username: "frontdesk".into(),
                password: "secret".into(),
                email: "frontdesk@example.com".into(),
                role: UserRole::Staff,
                hotel_id: None,
            })
            .await
            .unwrap();
        assert_eq!(store.count_users().await.unwrap(), 1);

        let updated = store
            .update_user(
                user.id,
                UserUpdate {
                    email: Some("desk@example.com".into()),
                    hotel_id: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.username, "frontdesk");
        assert_eq!(updated.email, "desk@example.com");
        assert_eq!(updated.hotel_id, Some(4));

        let updated = store
            .update_user_password(user.id, "changed")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.password, "changed");
        assert!(store
            .get_user_by_email("desk@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(store.update_user(9_999, UserUpdate::default()).await.unwrap().is_none());
    }
}
