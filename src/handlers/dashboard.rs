use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::services::stats;
use crate::storage::Storage;

pub async fn get_stats(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let stats = stats::compute_dashboard_stats(storage.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
