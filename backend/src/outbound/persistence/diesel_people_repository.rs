//! PostgreSQL-backed employee and manager repositories.
//!
//! Each role lives in its own table with a unique `email` column; a second
//! registration under the same email surfaces as
//! [`EntityStoreError::DuplicateKey`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeeRepository, EntityStoreError, ManagerRepository};
use crate::domain::{Employee, EmployeeId, Manager, ManagerId, PasswordHash};
use crate::query_optional;
use crate::query_vec;

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{EmployeeProfileUpdate, EmployeeRow, ManagerRow};
use super::pool::DbPool;
use super::schema::{employees, managers};

/// Diesel-backed implementation of [`EmployeeRepository`].
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "row converters share the fallible signature expected by the query macros"
)]
fn row_to_employee(row: EmployeeRow) -> Result<Employee, String> {
    Ok(Employee {
        id: EmployeeId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        password_hash: PasswordHash::new(row.password_hash),
        phone: row.phone,
        address: row.address,
        department: row.department,
        created_at: row.created_at,
    })
}

fn employee_to_row(employee: &Employee) -> EmployeeRow {
    EmployeeRow {
        id: *employee.id.as_uuid(),
        name: employee.name.clone(),
        email: employee.email.clone(),
        password_hash: employee.password_hash.as_str().to_owned(),
        phone: employee.phone.clone(),
        address: employee.address.clone(),
        department: employee.department.clone(),
        created_at: employee.created_at,
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EntityStoreError> {
        query_optional!(
            self,
            employees::table,
            employees::id.eq(id.as_uuid()),
            EmployeeRow,
            row_to_employee
        )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EntityStoreError> {
        query_optional!(
            self,
            employees::table,
            employees::email.eq(email),
            EmployeeRow,
            row_to_employee
        )
    }

    async fn list(&self) -> Result<Vec<Employee>, EntityStoreError> {
        query_vec!(
            self,
            employees::table,
            employees::id.is_not_null(),
            employees::name.asc(),
            EmployeeRow,
            row_to_employee
        )
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(employees::table)
            .values(&employee_to_row(employee))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_profile(&self, employee: &Employee) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = EmployeeProfileUpdate {
            name: &employee.name,
            phone: employee.phone.as_deref(),
            address: employee.address.as_deref(),
            department: employee.department.as_deref(),
        };
        let updated = diesel::update(employees::table.filter(employees::id.eq(employee.id.as_uuid())))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            return Err(EntityStoreError::missing("Employee"));
        }
        Ok(())
    }
}

/// Diesel-backed implementation of [`ManagerRepository`].
#[derive(Clone)]
pub struct DieselManagerRepository {
    pool: DbPool,
}

impl DieselManagerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "row converters share the fallible signature expected by the query macros"
)]
fn row_to_manager(row: ManagerRow) -> Result<Manager, String> {
    Ok(Manager {
        id: ManagerId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        password_hash: PasswordHash::new(row.password_hash),
        created_at: row.created_at,
    })
}

#[async_trait]
impl ManagerRepository for DieselManagerRepository {
    async fn find_by_id(&self, id: &ManagerId) -> Result<Option<Manager>, EntityStoreError> {
        query_optional!(
            self,
            managers::table,
            managers::id.eq(id.as_uuid()),
            ManagerRow,
            row_to_manager
        )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, EntityStoreError> {
        query_optional!(
            self,
            managers::table,
            managers::email.eq(email),
            ManagerRow,
            row_to_manager
        )
    }

    async fn insert(&self, manager: &Manager) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = ManagerRow {
            id: *manager.id.as_uuid(),
            name: manager.name.clone(),
            email: manager.email.clone(),
            password_hash: manager.password_hash.as_str().to_owned(),
            created_at: manager.created_at,
        };
        diesel::insert_into(managers::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
