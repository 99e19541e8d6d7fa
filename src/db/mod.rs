pub mod employee;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::models::employee::{Employee, NewEmployee, ReplaceEmployee};

pub use employee::PgEmployeeRepository;

/// Builds the process-wide pool. Connections are opened on first use, so the
/// server comes up even while the database is unreachable.
pub fn create_pool(config: &Config) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy_with(config.connect_options())
}

/// One method per endpoint, each backed by a single SQL statement.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error>;

    async fn find(&self, id: i32) -> Result<Option<Employee>, sqlx::Error>;

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, sqlx::Error>;

    /// Returns `None` when no row has the given id.
    async fn replace(
        &self,
        id: i32,
        employee: &ReplaceEmployee,
    ) -> Result<Option<Employee>, sqlx::Error>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;

    async fn by_series(&self, title: &str) -> Result<Vec<Employee>, sqlx::Error>;
}
