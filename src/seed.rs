use chrono::{Duration, NaiveTime, Utc};

use crate::error::AppResult;
use crate::models::*;
use crate::services::status;
use crate::storage::{Storage, StorageResult, UserUpdate};

// number, type, price per night, initial status, max guests
const ROOMS: [(&str, RoomType, f64, RoomStatus, i64); 10] = [
    ("101", RoomType::Standard, 120.0, RoomStatus::Available, 2),
    ("102", RoomType::Standard, 120.0, RoomStatus::Available, 2),
    ("103", RoomType::Deluxe, 180.0, RoomStatus::Available, 3),
    ("104", RoomType::Deluxe, 180.0, RoomStatus::Available, 3),
    ("105", RoomType::Suite, 350.0, RoomStatus::Maintenance, 4),
    ("201", RoomType::Standard, 125.0, RoomStatus::Available, 2),
    ("202", RoomType::Standard, 125.0, RoomStatus::Available, 2),
    ("203", RoomType::Deluxe, 185.0, RoomStatus::Available, 3),
    ("204", RoomType::Deluxe, 185.0, RoomStatus::Occupied, 3),
    ("205", RoomType::Suite, 360.0, RoomStatus::Available, 4),
];

const GUESTS: [(&str, &str, &str, &str); 4] = [
    ("John", "Smith", "john.smith@email.com", "+1-555-0101"),
    ("Sarah", "Johnson", "sarah.johnson@email.com", "+1-555-0102"),
    ("Mike", "Wilson", "mike.wilson@email.com", "+1-555-0103"),
    ("Emily", "Brown", "emily.brown@email.com", "+1-555-0104"),
];

// first name, last name, phone, position, department, salary
const STAFF: [(&str, &str, &str, &str, &str, f64); 4] = [
    ("Alice", "Manager", "+1-555-0201", "manager", "management", 65000.0),
    ("Bob", "Receptionist", "+1-555-0202", "receptionist", "front desk", 35000.0),
    ("Carol", "Housekeeper", "+1-555-0203", "housekeeper", "housekeeping", 30000.0),
    ("David", "Maintenance", "+1-555-0204", "maintenance", "maintenance", 40000.0),
];

fn amenities(room_type: RoomType) -> Vec<String> {
    let list: &[&str] = match room_type {
        RoomType::Suite | RoomType::Presidential => {
            &["WiFi", "TV", "Mini Bar", "Balcony", "Kitchen"]
        }
        RoomType::Deluxe => &["WiFi", "TV", "Mini Bar", "Balcony"],
        RoomType::Standard => &["WiFi", "TV"],
    };
    list.iter().map(|s| s.to_string()).collect()
}

async fn room_id(storage: &dyn Storage, hotel_id: i64, number: &str) -> StorageResult<i64> {
    storage
        .get_room_by_number(hotel_id, number)
        .await?
        .map(|r| r.id)
        .ok_or(sqlx::Error::RowNotFound)
}

/// Fills an empty store with a demo hotel. Returns `false` when users
/// already exist and nothing was written.
///
/// Bookings go through the same status rules as live traffic, so rooms 102,
/// 104 and 202 end up reserved or occupied by their bookings.
pub async fn seed_database(storage: &dyn Storage) -> AppResult<bool> {
    if storage.count_users().await? > 0 {
        log::info!("store already has users; skipping seed");
        return Ok(false);
    }
    log::info!("seeding database...");

    let admin = storage
        .create_user(NewUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@grandplaza.com".to_string(),
            role: UserRole::Admin,
            hotel_id: None,
        })
        .await?;

    let hotel = storage
        .create_hotel(NewHotel {
            name: "Grand Plaza Hotel".to_string(),
            address: "123 Downtown Avenue, City Center".to_string(),
            phone: "+1-555-0123".to_string(),
            email: "info@grandplaza.com".to_string(),
            total_rooms: ROOMS.len() as i64,
            owner_id: admin.id,
        })
        .await?;

    storage
        .update_user(
            admin.id,
            UserUpdate {
                hotel_id: Some(hotel.id),
                ..Default::default()
            },
        )
        .await?;

    for (number, room_type, price, room_status, max_guests) in ROOMS {
        storage
            .create_room(NewRoom {
                hotel_id: hotel.id,
                room_number: number.to_string(),
                room_type,
                status: Some(room_status),
                price_per_night: price,
                max_guests: Some(max_guests),
                amenities: amenities(room_type),
            })
            .await?;
    }

    let mut guest_ids = Vec::with_capacity(GUESTS.len());
    for (first, last, email, phone) in GUESTS {
        let guest = storage
            .create_guest(NewGuest {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                ..Default::default()
            })
            .await?;
        guest_ids.push(guest.id);
    }

    let today = Utc::now().date_naive();
    // room, guest index, check-in offset, nights, party size, amount, payment, final status
    let bookings = [
        ("104", 0, 0, 3, 2, 540.0, PaymentStatus::Paid, BookingStatus::Confirmed),
        ("102", 1, -1, 2, 1, 240.0, PaymentStatus::Paid, BookingStatus::CheckedIn),
        ("202", 2, 0, 2, 2, 250.0, PaymentStatus::Pending, BookingStatus::CheckedIn),
    ];
    for (number, guest, offset, nights, party, amount, payment, then) in bookings {
        let check_in = today + Duration::days(offset);
        let booking = storage
            .create_booking(NewBooking {
                hotel_id: hotel.id,
                room_id: room_id(storage, hotel.id, number).await?,
                guest_id: guest_ids[guest],
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(nights),
                total_amount: amount,
                status: Some(BookingStatus::Confirmed),
                number_of_guests: Some(party),
                special_requests: None,
                payment_status: Some(payment),
            })
            .await?;
        if then != BookingStatus::Confirmed {
            status::set_booking_status(storage, booking.id, then).await?;
        }
    }

    let mut staff_ids = Vec::with_capacity(STAFF.len());
    let hired = Utc::now() - Duration::days(365);
    for (first, last, phone, position, department, salary) in STAFF {
        let member = storage
            .create_staff(NewStaff {
                hotel_id: hotel.id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}@grandplaza.com", first.to_lowercase()),
                phone: phone.to_string(),
                position: position.to_string(),
                department: department.to_string(),
                salary: Some(salary),
                hire_date: hired,
                is_active: Some(true),
            })
            .await?;
        staff_ids.push(member.id);
    }

    let noon = (today.and_time(NaiveTime::MIN) + Duration::hours(12)).and_utc();
    let tasks = [
        (
            "Room 205 cleaning",
            "Deep clean and restock room 205",
            TaskStatus::Pending,
            TaskPriority::High,
            2,
            noon,
        ),
        (
            "Fix AC in room 301",
            "Air conditioning unit not working properly",
            TaskStatus::InProgress,
            TaskPriority::Medium,
            3,
            noon,
        ),
        (
            "Inventory check",
            "Weekly inventory check for housekeeping supplies",
            TaskStatus::Pending,
            TaskPriority::Low,
            0,
            noon + Duration::days(1),
        ),
    ];
    for (title, description, task_status, priority, assignee, due) in tasks {
        storage
            .create_task(NewTask {
                hotel_id: hotel.id,
                title: title.to_string(),
                description: Some(description.to_string()),
                assigned_to: Some(staff_ids[assignee]),
                status: Some(task_status),
                priority: Some(priority),
                due_date: Some(due),
            })
            .await?;
    }

    log::info!("database seeded: hotel {} with {} rooms", hotel.id, ROOMS.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stats::compute_dashboard_stats;
    use crate::storage::MemStorage;

    #[actix_web::test]
    async fn seeds_once() {
        let store = MemStorage::new();
        assert!(seed_database(&store).await.unwrap());
        assert!(!seed_database(&store).await.unwrap());

        let admin = store.get_user_by_username("admin").await.unwrap().unwrap();
        let hotel_id = admin.hotel_id.unwrap();
        assert_eq!(store.get_hotels_by_owner(admin.id).await.unwrap().len(), 1);
        assert_eq!(store.get_staff_by_hotel(hotel_id).await.unwrap().len(), 4);
        assert_eq!(store.get_tasks_by_hotel(hotel_id).await.unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn seeded_rooms_follow_their_bookings() {
        let store = MemStorage::new();
        seed_database(&store).await.unwrap();
        let hotel_id = store
            .get_user_by_username("admin")
            .await
            .unwrap()
            .unwrap()
            .hotel_id
            .unwrap();

        for (number, expected) in [
            ("104", RoomStatus::Reserved),
            ("102", RoomStatus::Occupied),
            ("202", RoomStatus::Occupied),
            ("101", RoomStatus::Available),
        ] {
            let room = store
                .get_room_by_number(hotel_id, number)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(room.status, expected, "room {number}");
        }

        let stats = compute_dashboard_stats(&store, hotel_id).await.unwrap();
        assert_eq!(stats.total_rooms, 10);
        assert_eq!(stats.occupied_rooms, 3);
        assert_eq!(stats.reserved_rooms, 1);
        assert_eq!(stats.maintenance_rooms, 1);
        assert_eq!(stats.available_rooms, 5);
        assert_eq!(stats.occupancy_rate, 30);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.revenue, 780.0);
    }
}
