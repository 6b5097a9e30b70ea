use crate::{
    db::Repository,
    error::HrmsError,
    model::attendance::{Attendance, AttendanceStatus, NewAttendance},
    store::employee,
};
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::{debug, info};

/// Record attendance for an employee.
///
/// The employee must exist before `status` is looked at, so an unknown
/// employee is reported as not found even when the status is also bad.
pub async fn mark(
    repo: &dyn Repository,
    employee_id: i64,
    date: NaiveDate,
    status: &str,
) -> Result<Attendance, HrmsError> {
    employee::find(repo, employee_id).await?;

    let status = AttendanceStatus::from_str(status).map_err(|_| {
        debug!(employee_id, status, "Rejected attendance status");
        HrmsError::InvalidStatus
    })?;

    let new = NewAttendance {
        employee_id,
        date,
        status,
    };

    match repo.insert_attendance(&new).await {
        Ok(record) => {
            info!(
                id = record.id,
                employee_id,
                %date,
                status = status.as_ref(),
                "Attendance marked"
            );
            Ok(record)
        }
        // employee removed between the lookup and the insert
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(HrmsError::EmployeeNotFound)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_by_employee(
    repo: &dyn Repository,
    employee_id: i64,
) -> Result<Vec<Attendance>, HrmsError> {
    employee::find(repo, employee_id).await?;
    Ok(repo.list_attendance(employee_id).await?)
}
