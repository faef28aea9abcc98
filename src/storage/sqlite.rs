use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;

use super::{Storage, StorageResult, UserUpdate};
use crate::models::*;

#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn count_users(&self) -> StorageResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, email, role, hotel_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user.username)
        .bind(user.password)
        .bind(user.email)
        .bind(user.role)
        .bind(user.hotel_id)
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE(?, username),
                email = COALESCE(?, email),
                hotel_id = COALESCE(?, hotel_id)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(update.username)
        .bind(update.email)
        .bind(update.hotel_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_user_password(&self, id: i64, password: &str) -> StorageResult<Option<User>> {
        sqlx::query_as::<_, User>("UPDATE users SET password = ? WHERE id = ? RETURNING *")
            .bind(password)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_hotel(&self, id: i64) -> StorageResult<Option<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_hotels_by_owner(&self, owner_id: i64) -> StorageResult<Vec<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE owner_id = ? ORDER BY id")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_hotel(&self, hotel: NewHotel) -> StorageResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (name, address, phone, email, total_rooms, owner_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(hotel.name)
        .bind(hotel.address)
        .bind(hotel.phone)
        .bind(hotel.email)
        .bind(hotel.total_rooms)
        .bind(hotel.owner_id)
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_room(&self, id: i64) -> StorageResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_rooms_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE hotel_id = ? ORDER BY id")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_room_by_number(
        &self,
        hotel_id: i64,
        room_number: &str,
    ) -> StorageResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE hotel_id = ? AND room_number = ?")
            .bind(hotel_id)
            .bind(room_number)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_room(&self, room: NewRoom) -> StorageResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (hotel_id, room_number, type, status, price_per_night, max_guests, amenities, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(room.hotel_id)
        .bind(room.room_number)
        .bind(room.room_type)
        .bind(room.status.unwrap_or(RoomStatus::Available))
        .bind(room.price_per_night)
        .bind(room.max_guests.unwrap_or(2))
        .bind(Json(room.amenities))
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_room_status(
        &self,
        id: i64,
        status: RoomStatus,
    ) -> StorageResult<Option<Room>> {
        sqlx::query_as::<_, Room>("UPDATE rooms SET status = ? WHERE id = ? RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_guest(&self, id: i64) -> StorageResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_guest_by_email(&self, email: &str) -> StorageResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE email = ? ORDER BY id LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_guest(&self, guest: NewGuest) -> StorageResult<Guest> {
        sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (first_name, last_name, email, phone, address, id_type, id_number, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(guest.first_name)
        .bind(guest.last_name)
        .bind(guest.email)
        .bind(guest.phone)
        .bind(guest.address)
        .bind(guest.id_type)
        .bind(guest.id_number)
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_booking(&self, id: i64) -> StorageResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_bookings_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE hotel_id = ? ORDER BY id")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_recent_bookings(
        &self,
        hotel_id: i64,
        limit: usize,
    ) -> StorageResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE hotel_id = ? ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(hotel_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
    }

    async fn create_booking(&self, booking: NewBooking) -> StorageResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (hotel_id, room_id, guest_id, check_in_date, check_out_date, total_amount,
                                  status, number_of_guests, special_requests, payment_status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(booking.hotel_id)
        .bind(booking.room_id)
        .bind(booking.guest_id)
        .bind(booking.check_in_date)
        .bind(booking.check_out_date)
        .bind(booking.total_amount)
        .bind(booking.status.unwrap_or(BookingStatus::Pending))
        .bind(booking.number_of_guests.unwrap_or(1))
        .bind(booking.special_requests)
        .bind(booking.payment_status.unwrap_or(PaymentStatus::Pending))
        .bind(now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE rooms SET status = ? WHERE id = ?")
            .bind(RoomStatus::Reserved)
            .bind(created.room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> StorageResult<Option<Booking>> {
        let mut tx = self.pool.begin().await?;

        let Some(booking) =
            sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? RETURNING *")
                .bind(status)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Ok(None);
        };

        if let Some(room_status) = status.room_effect() {
            sqlx::query("UPDATE rooms SET status = ? WHERE id = ?")
                .bind(room_status)
                .bind(booking.room_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(booking))
    }

    async fn get_staff_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Staff>> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE hotel_id = ? ORDER BY id")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_staff(&self, staff: NewStaff) -> StorageResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (hotel_id, first_name, last_name, email, phone, position, department,
                               salary, hire_date, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(staff.hotel_id)
        .bind(&staff.first_name)
        .bind(&staff.last_name)
        .bind(&staff.email)
        .bind(&staff.phone)
        .bind(&staff.position)
        .bind(&staff.department)
        .bind(staff.salary)
        .bind(staff.hire_date())
        .bind(staff.is_active.unwrap_or(true))
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_tasks_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE hotel_id = ? ORDER BY id")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_tasks_due_between(
        &self,
        hotel_id: i64,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> StorageResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE hotel_id = ?
            AND due_date >= ?
            AND due_date < ?
            ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
    }

    async fn create_task(&self, task: NewTask) -> StorageResult<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (hotel_id, title, description, assigned_to, status, priority, due_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(task.hotel_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assigned_to)
        .bind(task.status.unwrap_or(TaskStatus::Pending))
        .bind(task.priority.unwrap_or(TaskPriority::Medium))
        .bind(task.due_date())
        .bind(now())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_task_status(
        &self,
        id: i64,
        status: TaskStatus,
        now: NaiveDateTime,
    ) -> StorageResult<Option<Task>> {
        let completed_at = (status == TaskStatus::Completed).then_some(now);
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = ?, completed_at = COALESCE(completed_at, ?)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(completed_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
