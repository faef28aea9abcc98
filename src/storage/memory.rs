use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::types::Json;

use super::{Storage, StorageResult, UserUpdate};
use crate::models::*;

/// All tables in process memory, sharing one id counter.
#[derive(Default)]
pub struct MemStorage {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: HashMap<i64, User>,
    hotels: HashMap<i64, Hotel>,
    rooms: HashMap<i64, Room>,
    guests: HashMap<i64, Guest>,
    bookings: HashMap<i64, Booking>,
    staff: HashMap<i64, Staff>,
    tasks: HashMap<i64, Task>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Rows whose foreign key equals `key`, ordered by id so listings are stable.
fn select_by<T: Clone>(
    table: &HashMap<i64, T>,
    key: i64,
    key_of: impl Fn(&T) -> i64,
    id_of: impl Fn(&T) -> i64,
) -> Vec<T> {
    let mut rows: Vec<T> = table
        .values()
        .filter(|row| key_of(row) == key)
        .cloned()
        .collect();
    rows.sort_by_key(|row| id_of(row));
    rows
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn count_users(&self) -> StorageResult<i64> {
        Ok(self.tables().users.len() as i64)
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        let mut tables = self.tables();
        let user = User {
            id: tables.next_id(),
            username: user.username,
            password: user.password,
            email: user.email,
            role: user.role,
            hotel_id: user.hotel_id,
            created_at: now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<Option<User>> {
        let mut tables = self.tables();
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hotel_id) = update.hotel_id {
            user.hotel_id = Some(hotel_id);
        }
        Ok(Some(user.clone()))
    }

    async fn update_user_password(&self, id: i64, password: &str) -> StorageResult<Option<User>> {
        let mut tables = self.tables();
        Ok(tables.users.get_mut(&id).map(|user| {
            user.password = password.to_string();
            user.clone()
        }))
    }

    async fn get_hotel(&self, id: i64) -> StorageResult<Option<Hotel>> {
        Ok(self.tables().hotels.get(&id).cloned())
    }

    async fn get_hotels_by_owner(&self, owner_id: i64) -> StorageResult<Vec<Hotel>> {
        Ok(select_by(&self.tables().hotels, owner_id, |h| h.owner_id, |h| h.id))
    }

    async fn create_hotel(&self, hotel: NewHotel) -> StorageResult<Hotel> {
        let mut tables = self.tables();
        let hotel = Hotel {
            id: tables.next_id(),
            name: hotel.name,
            address: hotel.address,
            phone: hotel.phone,
            email: hotel.email,
            total_rooms: hotel.total_rooms,
            owner_id: hotel.owner_id,
            created_at: now(),
        };
        tables.hotels.insert(hotel.id, hotel.clone());
        Ok(hotel)
    }

    async fn get_room(&self, id: i64) -> StorageResult<Option<Room>> {
        Ok(self.tables().rooms.get(&id).cloned())
    }

    async fn get_rooms_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Room>> {
        Ok(select_by(&self.tables().rooms, hotel_id, |r| r.hotel_id, |r| r.id))
    }

    async fn get_room_by_number(
        &self,
        hotel_id: i64,
        room_number: &str,
    ) -> StorageResult<Option<Room>> {
        Ok(self
            .tables()
            .rooms
            .values()
            .find(|r| r.hotel_id == hotel_id && r.room_number == room_number)
            .cloned())
    }

    async fn create_room(&self, room: NewRoom) -> StorageResult<Room> {
        let mut tables = self.tables();
        let room = Room {
            id: tables.next_id(),
            hotel_id: room.hotel_id,
            room_number: room.room_number,
            room_type: room.room_type,
            status: room.status.unwrap_or(RoomStatus::Available),
            price_per_night: room.price_per_night,
            max_guests: room.max_guests.unwrap_or(2),
            amenities: Json(room.amenities),
            created_at: now(),
        };
        tables.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update_room_status(
        &self,
        id: i64,
        status: RoomStatus,
    ) -> StorageResult<Option<Room>> {
        let mut tables = self.tables();
        Ok(tables.rooms.get_mut(&id).map(|room| {
            room.status = status;
            room.clone()
        }))
    }

    async fn get_guest(&self, id: i64) -> StorageResult<Option<Guest>> {
        Ok(self.tables().guests.get(&id).cloned())
    }

    async fn get_guest_by_email(&self, email: &str) -> StorageResult<Option<Guest>> {
        Ok(self
            .tables()
            .guests
            .values()
            .filter(|g| g.email == email)
            .min_by_key(|g| g.id)
            .cloned())
    }

    async fn create_guest(&self, guest: NewGuest) -> StorageResult<Guest> {
        let mut tables = self.tables();
        let guest = Guest {
            id: tables.next_id(),
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            phone: guest.phone,
            address: guest.address,
            id_type: guest.id_type,
            id_number: guest.id_number,
            created_at: now(),
        };
        tables.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn get_booking(&self, id: i64) -> StorageResult<Option<Booking>> {
        Ok(self.tables().bookings.get(&id).cloned())
    }

    async fn get_bookings_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Booking>> {
        Ok(select_by(&self.tables().bookings, hotel_id, |b| b.hotel_id, |b| b.id))
    }

    async fn get_recent_bookings(
        &self,
        hotel_id: i64,
        limit: usize,
    ) -> StorageResult<Vec<Booking>> {
        let mut bookings = select_by(&self.tables().bookings, hotel_id, |b| b.hotel_id, |b| b.id);
        bookings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        bookings.truncate(limit);
        Ok(bookings)
    }

    async fn create_booking(&self, booking: NewBooking) -> StorageResult<Booking> {
        let mut tables = self.tables();
        let booking = Booking {
            id: tables.next_id(),
            hotel_id: booking.hotel_id,
            room_id: booking.room_id,
            guest_id: booking.guest_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            total_amount: booking.total_amount,
            status: booking.status.unwrap_or(BookingStatus::Pending),
            number_of_guests: booking.number_of_guests.unwrap_or(1),
            special_requests: booking.special_requests,
            payment_status: booking.payment_status.unwrap_or(PaymentStatus::Pending),
            created_at: now(),
        };
        tables.bookings.insert(booking.id, booking.clone());
        if let Some(room) = tables.rooms.get_mut(&booking.room_id) {
            room.status = RoomStatus::Reserved;
        }
        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> StorageResult<Option<Booking>> {
        let mut tables = self.tables();
        let Some(booking) = tables.bookings.get_mut(&id) else {
            return Ok(None);
        };
        booking.status = status;
        let booking = booking.clone();

        if let Some(room_status) = status.room_effect() {
            if let Some(room) = tables.rooms.get_mut(&booking.room_id) {
                room.status = room_status;
            }
        }
        Ok(Some(booking))
    }

    async fn get_staff_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Staff>> {
        Ok(select_by(&self.tables().staff, hotel_id, |s| s.hotel_id, |s| s.id))
    }

    async fn create_staff(&self, staff: NewStaff) -> StorageResult<Staff> {
        let mut tables = self.tables();
        let staff = Staff {
            id: tables.next_id(),
            hotel_id: staff.hotel_id,
            hire_date: staff.hire_date(),
            first_name: staff.first_name,
            last_name: staff.last_name,
            email: staff.email,
            phone: staff.phone,
            position: staff.position,
            department: staff.department,
            salary: staff.salary,
            is_active: staff.is_active.unwrap_or(true),
            created_at: now(),
        };
        tables.staff.insert(staff.id, staff.clone());
        Ok(staff)
    }

    async fn get_tasks_by_hotel(&self, hotel_id: i64) -> StorageResult<Vec<Task>> {
        Ok(select_by(&self.tables().tasks, hotel_id, |t| t.hotel_id, |t| t.id))
    }

    async fn get_tasks_due_between(
        &self,
        hotel_id: i64,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> StorageResult<Vec<Task>> {
        let mut tasks = select_by(&self.tables().tasks, hotel_id, |t| t.hotel_id, |t| t.id);
        tasks.retain(|t| t.due_date.is_some_and(|due| due >= from && due < until));
        Ok(tasks)
    }

    async fn create_task(&self, task: NewTask) -> StorageResult<Task> {
        let mut tables = self.tables();
        let task = Task {
            id: tables.next_id(),
            hotel_id: task.hotel_id,
            due_date: task.due_date(),
            title: task.title,
            description: task.description,
            assigned_to: task.assigned_to,
            status: task.status.unwrap_or(TaskStatus::Pending),
            priority: task.priority.unwrap_or(TaskPriority::Medium),
            completed_at: None,
            created_at: now(),
        };
        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update_task_status(
        &self,
        id: i64,
        status: TaskStatus,
        now: NaiveDateTime,
    ) -> StorageResult<Option<Task>> {
        let mut tables = self.tables();
        Ok(tables.tasks.get_mut(&id).map(|task| {
            task.status = status;
            if status == TaskStatus::Completed && task.completed_at.is_none() {
                task.completed_at = Some(now);
            }
            task.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::conformance;
    use super::*;

    #[actix_web::test]
    async fn booking_lifecycle_drives_room_status() {
        conformance::booking_lifecycle_drives_room_status(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn missing_booking_is_none() {
        conformance::missing_booking_is_none(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn create_booking_reserves_even_when_confirmed() {
        conformance::create_booking_reserves_even_when_confirmed(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn room_status_overwrite_leaves_bookings() {
        conformance::room_status_overwrite_leaves_bookings(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn recent_bookings_are_newest_first() {
        conformance::recent_bookings_are_newest_first(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn task_completion_is_stamped_once() {
        conformance::task_completion_is_stamped_once(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn users_update_in_place() {
        conformance::users_update_in_place(&MemStorage::new()).await;
    }

    #[actix_web::test]
    async fn ids_come_from_one_counter() {
        let store = MemStorage::new();
        let guest = store
            .create_guest(NewGuest::from_display_name("A B", "a@example.com"))
            .await
            .unwrap();
        let task = store
            .create_task(NewTask {
                hotel_id: 1,
                title: "Inventory check".into(),
                description: None,
                assigned_to: None,
                status: None,
                priority: None,
                due_date: None,
            })
            .await
            .unwrap();
        assert_eq!(guest.id, 1);
        assert_eq!(task.id, 2);
    }

    #[actix_web::test]
    async fn booking_for_deleted_room_still_updates() {
        let store = MemStorage::new();
        let (hotel, r101, _, guest) = conformance::seed_hotel(&store).await;
        let booking = store
            .create_booking(conformance::new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();
        store.tables().rooms.remove(&r101.id);
        let updated = store
            .update_booking_status(booking.id, BookingStatus::CheckedIn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::CheckedIn);
    }
}
