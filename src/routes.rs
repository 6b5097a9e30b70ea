use crate::{
    api::{self, attendance, employee},
    db::Repository,
    docs::ApiDoc,
    error::HrmsError,
};
use actix_cors::Cors;
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Logger, NormalizePath},
    web::{self, Data},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The complete application: middleware, Swagger UI and API routes.
pub fn app(
    repo: Data<dyn Repository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(NormalizePath::trim())
        .wrap(Logger::default())
        // any origin, method and header
        .wrap(Cors::permissive())
        .service(
            // the {_:.*} tail also serves the UI's JS and CSS assets
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .app_data(repo)
        .configure(configure)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and path ids are boundary validation failures (422),
    // reported in the same {"detail": ...} shape as every other error.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| HrmsError::Validation(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| HrmsError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(path_config)
        .service(api::index)
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}").route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                // /attendance/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(attendance::list_attendance)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;
    use actix_web::{
        http::{Method, StatusCode, header},
        test,
    };

    #[actix_web::test]
    async fn any_origin_is_allowed() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::get()
            .uri("/employees")
            .insert_header((header::ORIGIN, "http://elsewhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://elsewhere.example")
        );
    }

    #[actix_web::test]
    async fn preflight_allows_any_method() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/employees/1")
            .insert_header((header::ORIGIN, "http://elsewhere.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[actix_web::test]
    async fn trailing_slash_is_ignored() {
        let app = test::init_service(test_app().await).await;

        let req = test::TestRequest::get().uri("/employees/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
