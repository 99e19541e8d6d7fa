use async_trait::async_trait;
use sqlx::PgPool;

use super::EmployeeRepository;
use crate::models::employee::{Employee, NewEmployee, ReplaceEmployee};

const SELECT_EMPLOYEES: &str =
    "SELECT id, first_name, last_name, position, department_id, car_id FROM employees";

const SELECT_EMPLOYEE: &str =
    "SELECT id, first_name, last_name, position, department_id, car_id FROM employees WHERE id = $1";

const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (first_name, last_name, position, department_id, car_id)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, first_name, last_name, position, department_id, car_id
"#;

const REPLACE_EMPLOYEE: &str = r#"
    UPDATE employees
    SET first_name = $1, last_name = $2, position = $3, department_id = $4, car_id = $5
    WHERE id = $6
    RETURNING id, first_name, last_name, position, department_id, car_id
"#;

const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = $1";

// Employees are tied to series through the employee_series link table.
const SELECT_BY_SERIES: &str = r#"
    SELECT e.id, e.first_name, e.last_name, e.position, e.department_id, e.car_id
    FROM employees e
    JOIN employee_series es ON es.employee_id = e.id
    JOIN series s ON s.id = es.series_id
    WHERE s.title = $1
    ORDER BY e.id
"#;

/// Postgres-backed repository. Every call checks out one connection for the
/// duration of its statement; the connection returns to the pool when the
/// guard drops, on success and on error alike.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Employee>(SELECT_EMPLOYEES)
            .fetch_all(&mut *conn)
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Employee>(SELECT_EMPLOYEE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Employee>(INSERT_EMPLOYEE)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.position)
            .bind(employee.department_id)
            .bind(employee.car_id)
            .fetch_one(&mut *conn)
            .await
    }

    async fn replace(
        &self,
        id: i32,
        employee: &ReplaceEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Employee>(REPLACE_EMPLOYEE)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.position)
            .bind(employee.department_id)
            .bind(employee.car_id)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(DELETE_EMPLOYEE)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn by_series(&self, title: &str) -> Result<Vec<Employee>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Employee>(SELECT_BY_SERIES)
            .bind(title)
            .fetch_all(&mut *conn)
            .await
    }
}
