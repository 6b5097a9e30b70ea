use crate::api::{attendance::MarkAttendance, employee::CreateEmployee};
use crate::model::{
    attendance::{Attendance, AttendanceStatus},
    employee::Employee,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small **Human Resource Management** record-keeper.

### Features
- **Employee Management**
  - Create, list and delete employee records
  - `employee_id` is a caller-chosen business identifier and must be unique
- **Attendance Management**
  - Mark a day as `Present` or `Absent` for an employee
  - List the attendance history of one employee

### Errors
Every error body has the shape `{"detail": "<message>"}`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::index,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance
        )
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
