use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppResult;
use crate::models::task::UpdateTaskStatus;
use crate::models::NewTask;
use crate::services::tasks;
use crate::storage::Storage;

pub async fn get_today_tasks(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let tasks = tasks::today_tasks(storage.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn get_tasks(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let tasks = storage.get_tasks_by_hotel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn create_task(
    storage: web::Data<dyn Storage>,
    body: web::Json<NewTask>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let task = storage.create_task(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

pub async fn update_task_status(
    storage: web::Data<dyn Storage>,
    path: web::Path<i64>,
    body: web::Json<UpdateTaskStatus>,
) -> AppResult<HttpResponse> {
    let task = tasks::set_task_status(storage.get_ref(), path.into_inner(), body.status).await?;
    Ok(HttpResponse::Ok().json(task))
}
