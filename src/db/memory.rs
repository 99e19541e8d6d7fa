//! In-memory repositories for handler tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use super::EmployeeRepository;
use crate::models::employee::{Employee, NewEmployee, ReplaceEmployee};

#[derive(Default)]
struct Tables {
    next_id: i32,
    employees: BTreeMap<i32, Employee>,
    series: HashMap<String, Vec<i32>>,
}

/// Mirrors the Postgres behavior the handlers depend on: a monotonically
/// increasing id sequence, NULL-overwrite on replace, rows-affected on delete.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    tables: Mutex<Tables>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn link_series(&self, title: &str, employee_id: i32) {
        let mut tables = self.tables.lock().await;
        tables
            .series
            .entry(title.to_string())
            .or_default()
            .push(employee_id);
    }

    pub async fn count(&self) -> usize {
        self.tables.lock().await.employees.len()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Ok(self.tables.lock().await.employees.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self.tables.lock().await.employees.get(&id).cloned())
    }

    async fn insert(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        tables.next_id += 1;
        let employee = Employee {
            id: tables.next_id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            position: new.position.clone(),
            department_id: new.department_id,
            car_id: new.car_id,
        };
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn replace(
        &self,
        id: i32,
        replace: &ReplaceEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables.employees.get_mut(&id).map(|row| {
            row.first_name = replace.first_name.clone();
            row.last_name = replace.last_name.clone();
            row.position = replace.position.clone();
            row.department_id = replace.department_id;
            row.car_id = replace.car_id;
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        Ok(self.tables.lock().await.employees.remove(&id).is_some())
    }

    async fn by_series(&self, title: &str) -> Result<Vec<Employee>, sqlx::Error> {
        let tables = self.tables.lock().await;
        let ids = tables.series.get(title).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| tables.employees.get(id).cloned())
            .collect())
    }
}

/// Every call fails as if the pool could not hand out a connection.
pub struct FailingEmployeeRepository;

#[async_trait]
impl EmployeeRepository for FailingEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find(&self, _id: i32) -> Result<Option<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert(&self, _new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn replace(
        &self,
        _id: i32,
        _replace: &ReplaceEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: i32) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn by_series(&self, _title: &str) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
