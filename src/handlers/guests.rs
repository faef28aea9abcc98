use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::storage::Storage;

pub async fn get_guest(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    match storage.get_guest(path.into_inner()).await? {
        Some(guest) => Ok(HttpResponse::Ok().json(guest)),
        None => Err(AppError::NotFound("Guest")),
    }
}
