use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppResult;
use crate::models::room::{NewRoom, UpdateRoomStatus};
use crate::services::status;
use crate::storage::Storage;

pub async fn get_rooms(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let rooms = storage.get_rooms_by_hotel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn create_room(
    storage: web::Data<dyn Storage>,
    body: web::Json<NewRoom>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let room = storage.create_room(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(room))
}

pub async fn update_room_status(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    body: web::Json<UpdateRoomStatus>,
) -> AppResult<HttpResponse> {
    let room = status::set_room_status(storage.get_ref(), path.into_inner(), body.status).await?;
    Ok(HttpResponse::Ok().json(room))
}
