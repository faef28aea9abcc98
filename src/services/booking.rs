use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::booking::CreateBooking;
use crate::models::{
    Booking, BookingStatus, NewBooking, NewGuest, PaymentStatus, RoomStatus, RoomType,
};
use crate::storage::Storage;

/// Books the first available room of the requested type.
///
/// The room is chosen before anything is written, so a request that cannot
/// be served leaves no guest or booking behind.
pub async fn place_booking(storage: &dyn Storage, req: CreateBooking) -> AppResult<Booking> {
    req.validate()?;

    if req.check_in_date >= req.check_out_date {
        return Err(AppError::BadRequest("Check-out must be after check-in".to_string()));
    }

    let no_room = || AppError::BadRequest("No available rooms of the requested type".to_string());
    let room_type = RoomType::from_label(&req.room_type).ok_or_else(no_room)?;
    let room = storage
        .get_rooms_by_hotel(req.hotel_id)
        .await?
        .into_iter()
        .find(|r| r.room_type == room_type && r.status == RoomStatus::Available)
        .ok_or_else(no_room)?;

    let guest = match storage.get_guest_by_email(&req.email).await? {
        Some(guest) => guest,
        None => {
            let mut new_guest = NewGuest::from_display_name(&req.guest_name, &req.email);
            new_guest.phone = req.phone.clone().unwrap_or_default();
            new_guest.address = req.address.clone().filter(|a| !a.is_empty());
            storage.create_guest(new_guest).await?
        }
    };

    let nights = (req.check_out_date - req.check_in_date).num_days();
    let total_amount = (room.price_per_night * nights as f64 * 100.0).round() / 100.0;

    let booking = storage
        .create_booking(NewBooking {
            hotel_id: req.hotel_id,
            room_id: room.id,
            guest_id: guest.id,
            check_in_date: req.check_in_date,
            check_out_date: req.check_out_date,
            total_amount,
            status: Some(BookingStatus::Confirmed),
            number_of_guests: Some(req.number_of_guests.unwrap_or(1)),
            special_requests: req.special_requests.filter(|s| !s.is_empty()),
            payment_status: Some(PaymentStatus::Pending),
        })
        .await?;

    log::info!(
        "booking {} created: room {} for guest {}, {} night(s), total {:.2}",
        booking.id,
        room.room_number,
        guest.id,
        nights,
        total_amount
    );
    Ok(booking)
}
