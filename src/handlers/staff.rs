use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppResult;
use crate::models::NewStaff;
use crate::storage::Storage;

pub async fn get_staff(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let staff = storage.get_staff_by_hotel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(staff))
}

pub async fn create_staff(
    storage: web::Data<dyn Storage>,
    body: web::Json<NewStaff>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let staff = storage.create_staff(body.into_inner()).await?;
    log::info!("staff member {} added to hotel {}", staff.id, staff.hotel_id);
    Ok(HttpResponse::Created().json(staff))
}
