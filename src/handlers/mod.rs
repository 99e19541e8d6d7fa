pub mod docs;
pub mod employee;

use actix_web::web;

use crate::utils::validation::{json_error_handler, path_error_handler};

/// Route table shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bodies sent without a Content-Type are still parsed as JSON.
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(
        web::resource("/employees")
            .route(web::get().to(employee::list_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employees/by-series/{title}")
            .route(web::get().to(employee::employees_by_series)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::replace_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource(["/api-docs", "/api-docs/"]).route(web::get().to(docs::swagger_ui)),
    )
    .service(
        web::resource("/api-docs/openapi.json").route(web::get().to(docs::openapi_json)),
    );
}
