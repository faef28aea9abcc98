use crate::error::{AppError, AppResult};
use crate::models::{Booking, BookingStatus, Room, RoomStatus};
use crate::storage::Storage;

/// Moves a booking to `status` and lets the booked room follow.
///
/// Any transition is accepted, including reopening a checked-out stay.
pub async fn set_booking_status(
    storage: &dyn Storage,
    booking_id: i64,
    status: BookingStatus,
) -> AppResult<Booking> {
    let booking = storage
        .update_booking_status(booking_id, status)
        .await?
        .ok_or(AppError::NotFound("Booking"))?;

    match status.room_effect() {
        Some(room_status) => log::info!(
            "booking {} is now {:?}; room {} set to {:?}",
            booking.id,
            status,
            booking.room_id,
            room_status
        ),
        None => log::info!("booking {} is now {:?}", booking.id, status),
    }
    Ok(booking)
}

/// Overwrites a room's status without touching its bookings.
pub async fn set_room_status(
    storage: &dyn Storage,
    room_id: i64,
    status: RoomStatus,
) -> AppResult<Room> {
    let room = storage
        .update_room_status(room_id, status)
        .await?
        .ok_or(AppError::NotFound("Room"))?;
    log::info!("room {} set to {:?}", room.id, status);
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::conformance;
    use crate::storage::MemStorage;

    #[actix_web::test]
    async fn unknown_booking_is_not_found() {
        let store = MemStorage::new();
        let err = set_booking_status(&store, 42, BookingStatus::CheckedIn)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Booking")));
    }

    #[actix_web::test]
    async fn unknown_room_is_not_found() {
        let store = MemStorage::new();
        let err = set_room_status(&store, 42, RoomStatus::Available)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Room")));
    }

    #[actix_web::test]
    async fn check_in_then_check_out() {
        let store = MemStorage::new();
        let (hotel, r101, _, guest) = conformance::seed_hotel(&store).await;
        let booking = store
            .create_booking(conformance::new_booking(&hotel, &r101, &guest))
            .await
            .unwrap();

        set_booking_status(&store, booking.id, BookingStatus::CheckedIn)
            .await
            .unwrap();
        let room = store.get_room(r101.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);

        let done = set_booking_status(&store, booking.id, BookingStatus::CheckedOut)
            .await
            .unwrap();
        assert_eq!(done.status, BookingStatus::CheckedOut);
        let room = store.get_room(r101.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Available);
    }
}
