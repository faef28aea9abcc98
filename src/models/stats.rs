use serde::Serialize;

use super::booking::{Booking, PaymentStatus};
use super::room::{Room, RoomStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub occupancy_rate: u32,
    pub revenue: f64,
    pub available_rooms: usize,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub reserved_rooms: usize,
}

impl DashboardStats {
    /// Aggregates one hotel's rooms and bookings.
    ///
    /// Revenue only counts bookings that are fully paid. A hotel without rooms
    /// reports an occupancy rate of 0.
    pub fn from_records(rooms: &[Room], bookings: &[Booking]) -> Self {
        let count = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count();

        let total_rooms = rooms.len();
        let occupied_rooms = count(RoomStatus::Occupied);

        let revenue = bookings
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Paid)
            .map(|b| b.total_amount)
            .sum();

        Self {
            total_bookings: bookings.len(),
            occupancy_rate: occupancy_rate(occupied_rooms, total_rooms),
            revenue,
            available_rooms: count(RoomStatus::Available),
            total_rooms,
            occupied_rooms,
            maintenance_rooms: count(RoomStatus::Maintenance),
            reserved_rooms: count(RoomStatus::Reserved),
        }
    }
}

fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (occupied as f64 / total as f64 * 100.0).round() as u32
}
