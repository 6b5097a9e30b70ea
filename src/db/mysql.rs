use super::Repository;
use crate::model::{
    attendance::{Attendance, NewAttendance},
    employee::{Employee, NewEmployee},
};
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

// employee_id compares byte-for-byte (NO PAD binary collation) so "E1",
// "e1" and "E1 " are distinct ids. 768 characters is the widest utf8mb4
// column InnoDB can put a unique index on.
const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        employee_id VARCHAR(768) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        department TEXT NOT NULL,
        UNIQUE KEY uq_employees_employee_id (employee_id)
    ) ENGINE = InnoDB
"#;

// Deleting an employee deletes their attendance. Cascade was chosen over
// blocking the delete or leaving dangling rows; see DESIGN.md.
const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        employee_id BIGINT NOT NULL,
        date DATE NOT NULL,
        status VARCHAR(16) NOT NULL,
        KEY idx_attendance_employee_id (employee_id),
        CONSTRAINT chk_attendance_status CHECK (status IN ('Present', 'Absent')),
        CONSTRAINT fk_attendance_employee FOREIGN KEY (employee_id)
            REFERENCES employees (id) ON DELETE CASCADE
    ) ENGINE = InnoDB
"#;

pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_EMPLOYEES).execute(&mut *conn).await?;
        sqlx::query(CREATE_ATTENDANCE).execute(&mut *conn).await?;
        Ok(())
    }

    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.employee_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_id() as i64;
        debug!(id, "Inserted employee row");

        Ok(Employee {
            id,
            employee_id: new.employee_id.clone(),
            full_name: new.full_name.clone(),
            email: new.email.clone(),
            department: new.department.clone(),
        })
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

        let result = sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(new.employee_id)
        .bind(new.date)
        .bind(new.status.as_ref())
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_id() as i64;
        debug!(id, employee_id = new.employee_id, "Inserted attendance row");

        Ok(Attendance {
            id,
            employee_id: new.employee_id,
            date: new.date,
            status: new.status,
        })
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
