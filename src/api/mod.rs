use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

pub mod attendance;
pub mod employee;

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "message": "HRMS Lite API Running"
        }))
    ),
    tag = "Health"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "HRMS Lite API Running"
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn index_reports_running() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "HRMS Lite API Running");
    }
}
