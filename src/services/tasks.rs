use chrono::{Duration, NaiveDate, Utc};

use crate::error::{AppError, AppResult};
use crate::models::{Task, TaskStatus};
use crate::storage::Storage;

/// Tasks of a hotel due on `day` (UTC). Tasks without a due date are left out.
pub async fn tasks_due_on(
    storage: &dyn Storage,
    hotel_id: i64,
    day: NaiveDate,
) -> AppResult<Vec<Task>> {
    let from = day.and_time(chrono::NaiveTime::MIN);
    let until = from + Duration::days(1);
    Ok(storage.get_tasks_due_between(hotel_id, from, until).await?)
}

pub async fn today_tasks(storage: &dyn Storage, hotel_id: i64) -> AppResult<Vec<Task>> {
    tasks_due_on(storage, hotel_id, Utc::now().date_naive()).await
}

pub async fn set_task_status(
    storage: &dyn Storage,
    task_id: i64,
    status: TaskStatus,
) -> AppResult<Task> {
    storage
        .update_task_status(task_id, status, Utc::now().naive_utc())
        .await?
        .ok_or(AppError::NotFound("Task"))
}
