use crate::{
    db::Repository,
    error::HrmsError,
    model::employee::{Employee, NewEmployee},
    store,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "John Doe", value_type = String)]
    pub full_name: String,
    #[schema(example = "john@email.com", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

impl CreateEmployee {
    /// Reject blank fields. Values are stored exactly as sent.
    pub fn validate(self) -> Result<NewEmployee, HrmsError> {
        Ok(NewEmployee {
            employee_id: required("employee_id", self.employee_id)?,
            full_name: required("full_name", self.full_name)?,
            email: required("email", self.email)?,
            department: required("department", self.department)?,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, HrmsError> {
    if value.trim().is_empty() {
        return Err(HrmsError::Validation(format!("{field} must not be empty")));
    }

    Ok(value)
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate employee_id", body = Object, example = json!({
            "detail": "Employee ID already exists"
        })),
        (status = 422, description = "Invalid request body", body = Object, example = json!({
            "detail": "full_name must not be empty"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    repo: web::Data<dyn Repository>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, HrmsError> {
    let new = payload.into_inner().validate()?;
    let employee = store::employee::create(repo.get_ref(), new).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(repo: web::Data<dyn Repository>) -> Result<HttpResponse, HrmsError> {
    let employees = store::employee::list_all(repo.get_ref()).await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Surrogate employee id")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    repo: web::Data<dyn Repository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, HrmsError> {
    store::employee::delete_by_id(repo.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_employee_req, test_app};
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn create_returns_persisted_record() {
        let app = test::init_service(test_app().await).await;

        let resp = test::call_service(
            &app,
            create_employee_req("E1", "A B", "a@x.com", "Eng").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let employee: Employee = test::read_body_json(resp).await;
        assert!(employee.id > 0);
        assert_eq!(employee.employee_id, "E1");
        assert_eq!(employee.full_name, "A B");
        assert_eq!(employee.email, "a@x.com");
        assert_eq!(employee.department, "Eng");

        let req = test::TestRequest::get().uri("/employees").to_request();
        let listed: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![employee]);
    }

    #[actix_web::test]
    async fn list_is_empty_array_initially() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::get().uri("/employees").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn duplicate_employee_id_is_bad_request() {
        let app = test::init_service(test_app().await).await;
        let req = create_employee_req("E1", "A B", "a@x.com", "Eng").to_request();
        test::call_service(&app, req).await;

        let resp = test::call_service(
            &app,
            create_employee_req("E1", "C D", "c@x.com", "Ops").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Employee ID already exists");
    }

    #[actix_web::test]
    async fn blank_or_missing_fields_are_unprocessable() {
        let app = test::init_service(test_app().await).await;

        let resp = test::call_service(
            &app,
            create_employee_req("E1", "   ", "a@x.com", "Eng").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "full_name must not be empty");

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(serde_json::json!({ "employee_id": "E2", "full_name": "A B" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/employees").to_request();
        let listed: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn fields_are_stored_verbatim() {
        let app = test::init_service(test_app().await).await;

        let req = create_employee_req(" E7 ", " Grace Hopper ", "g@x.com ", " Navy").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let employee: Employee = test::read_body_json(resp).await;

        assert_eq!(employee.employee_id, " E7 ");
        assert_eq!(employee.full_name, " Grace Hopper ");
        assert_eq!(employee.email, "g@x.com ");
        assert_eq!(employee.department, " Navy");
    }

    #[actix_web::test]
    async fn padded_business_id_is_distinct_from_bare_one() {
        let app = test::init_service(test_app().await).await;

        let req = create_employee_req("E1", "A B", "a@x.com", "Eng").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = create_employee_req(" E1", "A B", "a@x.com", "Eng").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/employees").to_request();
        let listed: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<&str> = listed.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E1", " E1"]);
    }

    #[actix_web::test]
    async fn delete_removes_employee() {
        let app = test::init_service(test_app().await).await;
        let created: Employee = test::call_and_read_body_json(
            &app,
            create_employee_req("E1", "A B", "a@x.com", "Eng").to_request(),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/employees/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Employee deleted successfully");

        let req = test::TestRequest::get().uri("/employees").to_request();
        let listed: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn delete_unknown_id_is_not_found() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::delete().uri("/employees/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Employee not found");
    }

    #[actix_web::test]
    async fn non_numeric_id_is_unprocessable() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::delete().uri("/employees/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn long_values_are_accepted_unchanged() {
        let app = test::init_service(test_app().await).await;
        let long_id = "E".repeat(65);
        let long_name = "n".repeat(300);

        let req = create_employee_req(&long_id, &long_name, "a@x.com", "Eng").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let employee: Employee = test::read_body_json(resp).await;
        assert_eq!(employee.employee_id, long_id);
        assert_eq!(employee.full_name, long_name);
    }
}
