use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::models::user::{LoginRequest, SignupRequest};
use crate::services::auth;
use crate::storage::Storage;

pub async fn login(
    storage: web::Data<dyn Storage>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let session = auth::login(storage.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn signup(
    storage: web::Data<dyn Storage>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let session = auth::signup(storage.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(session))
}
