//! HotelPro: a hotel operations API over rooms, bookings, guests, staff and
//! tasks.
//!
//! Booking status changes drive room status (see [`services::status`]) and
//! the dashboard figures are recomputed per request (see [`services::stats`]).

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

use std::sync::Arc;

use config::{Config, StorageBackend};
use storage::{MemStorage, SqliteStorage, Storage};

/// Opens the configured store, running migrations for SQLite.
pub async fn open_storage(config: &Config) -> Result<Arc<dyn Storage>, sqlx::Error> {
    match config.storage {
        StorageBackend::Memory => {
            log::info!("Using in-memory storage");
            Ok(Arc::new(MemStorage::new()))
        }
        StorageBackend::Sqlite => {
            log::info!("Connecting to database...");
            let pool = db::get_db_pool(config).await?;

            log::info!("Running migrations...");
            db::run_migrations(&pool).await?;

            Ok(Arc::new(SqliteStorage::new(pool)))
        }
    }
}
