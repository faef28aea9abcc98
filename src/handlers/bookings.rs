use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::booking::{CreateBooking, UpdateBookingStatus};
use crate::services::{booking, recent, status};
use crate::storage::Storage;

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<String>,
}

pub async fn create_booking(
    storage: web::Data<dyn Storage>,
    body: web::Json<CreateBooking>,
) -> AppResult<HttpResponse> {
    let booking = booking::place_booking(storage.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(booking))
}

pub async fn get_booking(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match storage.get_booking(id).await? {
        Some(booking) => Ok(HttpResponse::Ok().json(booking)),
        None => Err(AppError::NotFound("Booking")),
    }
}

pub async fn get_hotel_bookings(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let bookings = storage.get_bookings_by_hotel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn get_recent_bookings(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    query: web::Query<RecentQuery>,
) -> AppResult<HttpResponse> {
    let limit = recent::parse_limit(query.limit.as_deref());
    let bookings =
        recent::list_recent_bookings(storage.get_ref(), path.into_inner(), limit).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn update_booking_status(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    body: web::Json<UpdateBookingStatus>,
) -> AppResult<HttpResponse> {
    let booking =
        status::set_booking_status(storage.get_ref(), path.into_inner(), body.status).await?;
    Ok(HttpResponse::Ok().json(booking))
}
