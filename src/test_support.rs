use crate::{
    db::{Repository, SqliteRepository},
    routes,
};
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    test,
    web::Data,
};
use serde_json::json;
use std::sync::Arc;

/// The server's own app over a private in-memory database.
pub async fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let repo: Arc<dyn Repository> = Arc::new(SqliteRepository::in_memory().await);

    routes::app(Data::from(repo))
}

pub fn create_employee_req(
    employee_id: &str,
    full_name: &str,
    email: &str,
    department: &str,
) -> test::TestRequest {
    test::TestRequest::post().uri("/employees").set_json(json!({
        "employee_id": employee_id,
        "full_name": full_name,
        "email": email,
        "department": department
    }))
}
