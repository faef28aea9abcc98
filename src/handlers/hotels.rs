use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::models::hotel::HotelSearch;
use crate::storage::Storage;

pub async fn get_hotels(
    storage: web::Data<dyn Storage>,
    params: web::Query<HotelSearch>,
) -> AppResult<HttpResponse> {
    let hotels = storage.get_hotels_by_owner(params.owner_id).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match storage.get_hotel(id).await? {
        Some(hotel) => Ok(HttpResponse::Ok().json(hotel)),
        None => Err(AppError::NotFound("Hotel")),
    }
}
