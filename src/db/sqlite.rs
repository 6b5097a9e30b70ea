use super::Repository;
use crate::model::{
    attendance::{Attendance, NewAttendance},
    employee::{Employee, NewEmployee},
};
use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id TEXT NOT NULL UNIQUE,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        department TEXT NOT NULL
    )
"#;

// Deleting an employee deletes their attendance. Cascade was chosen over
// blocking the delete or leaving dangling rows; see DESIGN.md.
const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employees (id) ON DELETE CASCADE,
        date DATE NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('Present', 'Absent'))
    )
"#;

const CREATE_ATTENDANCE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_attendance_employee_id ON attendance (employee_id)";

/// Open a pool on `url`. Foreign keys are switched on for every connection so
/// attendance rows follow their employee on delete.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fresh in-memory database with the schema applied.
    ///
    /// A memory database lives only as long as its connection, so the pool is
    /// pinned to a single connection that is never recycled.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("failed to open in-memory sqlite");

        let repo = Self::new(pool);
        repo.init_schema().await.expect("failed to init schema");
        repo
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_EMPLOYEES).execute(&mut *conn).await?;
        sqlx::query(CREATE_ATTENDANCE).execute(&mut *conn).await?;
        sqlx::query(CREATE_ATTENDANCE_INDEX)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            RETURNING id, employee_id, full_name, email, department
            "#,
        )
        .bind(&new.employee_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .fetch_one(&mut *conn)
        .await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Employee>(
            "SELECT id, employee_id, full_name, email, department FROM employees ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
    }

    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Employee>(
            "SELECT id, employee_id, full_name, email, department FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    async fn delete_employee(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_attendance(&self, new: &NewAttendance) -> Result<Attendance, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES (?, ?, ?)
            RETURNING id, employee_id, date, status
            "#,
        )
        .bind(new.employee_id)
        .bind(new.date)
        .bind(new.status.as_ref())
        .fetch_one(&mut *conn)
        .await
    }

    async fn list_attendance(&self, employee_id: i64) -> Result<Vec<Attendance>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, employee_id, date, status
            FROM attendance
            WHERE employee_id = ?
            ORDER BY id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&mut *conn)
        .await
    }
}
