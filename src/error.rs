use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

#[derive(Debug, Display)]
pub enum HrmsError {
    #[display(fmt = "Employee ID already exists")]
    DuplicateEmployeeId,

    #[display(fmt = "Employee not found")]
    EmployeeNotFound,

    #[display(fmt = "Status must be Present or Absent")]
    InvalidStatus,

    /// Request body or path failed boundary validation.
    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl std::error::Error for HrmsError {}

impl From<sqlx::Error> for HrmsError {
    fn from(e: sqlx::Error) -> Self {
        HrmsError::Database(e)
    }
}

impl ResponseError for HrmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            HrmsError::DuplicateEmployeeId | HrmsError::InvalidStatus => StatusCode::BAD_REQUEST,
            HrmsError::EmployeeNotFound => StatusCode::NOT_FOUND,
            HrmsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HrmsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let HrmsError::Database(e) = self {
            error!(error = %e, "Database operation failed");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}
