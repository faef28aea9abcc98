use crate::error::AppResult;
use crate::models::PopulatedBooking;
use crate::storage::Storage;

pub const DEFAULT_LIMIT: usize = 10;

/// Newest bookings of a hotel with guest and room summaries attached.
///
/// Guest and room are looked up per booking. A missing one leaves its field
/// empty instead of dropping the entry.
pub async fn list_recent_bookings(
    storage: &dyn Storage,
    hotel_id: i64,
    limit: usize,
) -> AppResult<Vec<PopulatedBooking>> {
    let bookings = storage.get_recent_bookings(hotel_id, limit).await?;

    let mut populated = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let guest = storage.get_guest(booking.guest_id).await?;
        let room = storage.get_room(booking.room_id).await?;
        populated.push(PopulatedBooking {
            guest: guest.map(|g| g.summary()),
            room: room.map(|r| r.summary()),
            booking,
        });
    }
    Ok(populated)
}

/// Reads a `limit` query value. Anything that is not a positive integer
/// falls back to [`DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_LIMIT)
}
