//! Persistence layer.
//!
//! Handlers never see a pool directly: they receive a [`Repository`] handle
//! built once at startup by [`init_db`]. Every repository call acquires a
//! pooled connection for its own duration and hands it back when the
//! `PoolConnection` guard drops, whether the call succeeded or not.

use crate::{
    config::Config,
    model::{
        attendance::{Attendance, NewAttendance},
        employee::{Employee, NewEmployee},
    },
};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub mod mysql;
pub mod sqlite;

pub use mysql::MySqlRepository;
pub use sqlite::SqliteRepository;

#[async_trait]
pub trait Repository: Send + Sync {
    /// Create the `employees` and `attendance` tables if they are missing.
    async fn init_schema(&self) -> Result<(), sqlx::Error>;

    /// Insert an employee. A clash on `employee_id` surfaces as a unique
    /// violation from the database.
    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error>;

    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error>;

    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, sqlx::Error>;

    /// Returns the number of deleted rows (0 or 1).
    async fn delete_employee(&self, id: i64) -> Result<u64, sqlx::Error>;

    async fn insert_attendance(&self, new: &NewAttendance) -> Result<Attendance, sqlx::Error>;

    async fn list_attendance(&self, employee_id: i64) -> Result<Vec<Attendance>, sqlx::Error>;
}

/// Connect to the database named by `DATABASE_URL`, picking the backend from
/// the URL scheme.
pub async fn init_db(config: &Config) -> Result<Arc<dyn Repository>> {
    let url = config.database_url.as_str();

    if url.starts_with("mysql:") {
        let pool = sqlx::mysql::MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(url)
            .await
            .context("Failed to connect to MySQL")?;
        info!(backend = "mysql", "Database pool ready");
        Ok(Arc::new(MySqlRepository::new(pool)))
    } else if url.starts_with("sqlite:") {
        let pool = sqlite::connect(url, config.db_max_connections)
            .await
            .context("Failed to open SQLite database")?;
        info!(backend = "sqlite", "Database pool ready");
        Ok(Arc::new(SqliteRepository::new(pool)))
    } else {
        bail!("Unsupported DATABASE_URL scheme, expected mysql:// or sqlite:")
    }
}
