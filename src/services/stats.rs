use crate::error::AppResult;
use crate::models::DashboardStats;
use crate::storage::Storage;

/// Recomputes the dashboard figures for one hotel from its full room and
/// booking lists.
pub async fn compute_dashboard_stats(
    storage: &dyn Storage,
    hotel_id: i64,
) -> AppResult<DashboardStats> {
    let rooms = storage.get_rooms_by_hotel(hotel_id).await?;
    let bookings = storage.get_bookings_by_hotel(hotel_id).await?;
    Ok(DashboardStats::from_records(&rooms, &bookings))
}
