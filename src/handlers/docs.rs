use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::errors::{AppError, ErrorResponse, MessageResponse};
use crate::handlers::employee;
use crate::models::employee::{Employee, NewEmployee, ReplaceEmployee};

const SWAGGER_UI: &str = include_str!("swagger_ui.html");

#[derive(OpenApi)]
#[openapi(
    info(title = "Employees API", description = "CRUD over the Employees table"),
    paths(
        employee::list_employees,
        employee::get_employee,
        employee::create_employee,
        employee::replace_employee,
        employee::delete_employee,
        employee::employees_by_series,
    ),
    components(schemas(Employee, NewEmployee, ReplaceEmployee, ErrorResponse, MessageResponse)),
    tags((name = "employees", description = "Employee records"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Result<HttpResponse, AppError> {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| AppError::InternalServerError(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(doc))
}

pub async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_UI)
}
