use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;

/// Closed set of attendance states. Parsing is case-sensitive.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, EnumString, AsRefStr, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl TryFrom<String> for AttendanceStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AttendanceStatus::from_str(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    /// surrogate id of the employee
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[sqlx(try_from = "String")]
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
