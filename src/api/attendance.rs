use crate::{db::Repository, error::HrmsError, model::attendance::Attendance, store};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    /// surrogate id of the employee
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    // kept as text so an unknown value reaches the store and gets its own error
    #[schema(example = "Present")]
    pub status: String,
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Attendance),
        (status = 400, description = "Status is not Present or Absent", body = Object, example = json!({
            "detail": "Status must be Present or Absent"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    repo: web::Data<dyn Repository>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, HrmsError> {
    let MarkAttendance {
        employee_id,
        date,
        status,
    } = payload.into_inner();

    let record = store::attendance::mark(repo.get_ref(), employee_id, date, &status).await?;

    Ok(HttpResponse::Ok().json(record))
}

/// List attendance of one employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Surrogate employee id")
    ),
    responses(
        (status = 200, description = "Attendance records of the employee", body = [Attendance]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    repo: web::Data<dyn Repository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, HrmsError> {
    let records = store::attendance::list_by_employee(repo.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(records))
}
