use actix_web::{web, HttpResponse};

use crate::db::EmployeeRepository;
use crate::errors::{AppError, ErrorResponse, MessageResponse};
use crate::models::employee::{Employee, NewEmployee, ReplaceEmployee};
use crate::utils::validation::{validate_payload, EMPLOYEE_NOT_FOUND};

const NO_SERIES_EMPLOYEES: &str = "No employees found for this series";

fn not_found() -> AppError {
    AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
}

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_employees(
    repo: web::Data<dyn EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

// Ids that do not parse as `i32` never reach the database; `path_error_handler`
// answers them with 404 instead of the storage error Postgres would raise.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "No employee with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_employee(
    repo: web::Data<dyn EmployeeRepository>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = repo.find(id.into_inner()).await?.ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_employee(
    repo: web::Data<dyn EmployeeRepository>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let employee = repo.insert(&new_employee).await?;
    log::info!("Created employee {}", employee.id);

    Ok(HttpResponse::Created().json(employee))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = ReplaceEmployee,
    responses(
        (status = 200, description = "Employee replaced; omitted fields are now null", body = Employee),
        (status = 404, description = "No employee with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn replace_employee(
    repo: web::Data<dyn EmployeeRepository>,
    id: web::Path<i32>,
    replacement: web::Json<ReplaceEmployee>,
) -> Result<HttpResponse, AppError> {
    let employee = repo
        .replace(id.into_inner(), &replacement)
        .await?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "No employee with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_employee(
    repo: web::Data<dyn EmployeeRepository>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    if !repo.delete(id).await? {
        return Err(not_found());
    }

    log::info!("Deleted employee {}", id);
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/employees/by-series/{title}",
    tag = "employees",
    params(("title" = String, Path, description = "Series title")),
    responses(
        (status = 200, description = "Employees associated with the series", body = Vec<Employee>),
        (status = 404, description = "No employees for this series", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn employees_by_series(
    repo: web::Data<dyn EmployeeRepository>,
    title: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.by_series(&title).await?;
    if employees.is_empty() {
        return Err(AppError::NoResults(NO_SERIES_EMPLOYEES.to_string()));
    }
    Ok(HttpResponse::Ok().json(employees))
}
