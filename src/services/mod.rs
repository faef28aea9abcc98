//! Domain operations over a [`Storage`](crate::storage::Storage).
//!
//! Handlers call these; they own the not-found mapping and logging so both
//! storage backends behave the same at the API.

pub mod auth;
pub mod booking;
pub mod recent;
pub mod stats;
pub mod status;
pub mod tasks;
