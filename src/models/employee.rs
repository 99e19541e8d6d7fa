use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A row of the `employees` table.
///
/// The text columns are nullable here: a replace writes NULL for every
/// omitted field, and reading such a row back must still succeed.
#[derive(sqlx::FromRow, Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
    pub car_id: Option<i32>,
}

/// Body of `POST /employees`.
#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct NewEmployee {
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub position: Option<String>,
    pub department_id: Option<i32>,
    pub car_id: Option<i32>,
}

/// Body of `PUT /employees/{id}`. Every field is written, absent ones as NULL.
#[derive(Deserialize, ToSchema, Debug)]
pub struct ReplaceEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<i32>,
    pub car_id: Option<i32>,
}
