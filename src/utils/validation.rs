use actix_web::error::{JsonPayloadError, PathError};
use actix_web::HttpRequest;
use validator::Validate;

use crate::errors::AppError;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Presence check for creation payloads. Which field failed is not reported.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        log::debug!("Rejected payload: {}", err);
        AppError::BadRequest(MISSING_REQUIRED_FIELDS.to_string())
    })
}

/// Bodies that do not deserialize into the endpoint's input type.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    AppError::BadRequest(INVALID_REQUEST_BODY.to_string()).into()
}

/// An id segment that is not an `i32` cannot name an employee, so it is
/// answered as a missing row (404) rather than surfacing a database error.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path: {}", err);
    AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()).into()
}
