use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::models::user::{ChangePassword, UpdateProfile};
use crate::services::auth;
use crate::storage::Storage;

pub async fn update_profile(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    body: web::Json<UpdateProfile>,
) -> AppResult<HttpResponse> {
    let user =
        auth::update_profile(storage.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn change_password(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    body: web::Json<ChangePassword>,
) -> AppResult<HttpResponse> {
    auth::change_password(storage.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Password changed successfully"
    })))
}
