use crate::{
    db::Repository,
    error::HrmsError,
    model::employee::{Employee, NewEmployee},
};
use tracing::{debug, info};

/// Persist a new employee. Uniqueness of `employee_id` is left to the
/// database constraint so concurrent creates cannot both succeed.
pub async fn create(repo: &dyn Repository, new: NewEmployee) -> Result<Employee, HrmsError> {
    match repo.insert_employee(&new).await {
        Ok(employee) => {
            info!(id = employee.id, employee_id = %employee.employee_id, "Employee created");
            Ok(employee)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            debug!(employee_id = %new.employee_id, "Rejected duplicate employee_id");
            Err(HrmsError::DuplicateEmployeeId)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_all(repo: &dyn Repository) -> Result<Vec<Employee>, HrmsError> {
    Ok(repo.list_employees().await?)
}

pub async fn find(repo: &dyn Repository, id: i64) -> Result<Employee, HrmsError> {
    repo.find_employee(id)
        .await?
        .ok_or(HrmsError::EmployeeNotFound)
}

pub async fn delete_by_id(repo: &dyn Repository, id: i64) -> Result<(), HrmsError> {
    if repo.delete_employee(id).await? == 0 {
        return Err(HrmsError::EmployeeNotFound);
    }

    info!(id, "Employee deleted");
    Ok(())
}
