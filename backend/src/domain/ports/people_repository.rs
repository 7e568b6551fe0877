//! Ports for the employee and manager role tables.
//!
//! Emails are unique within each table. Inserting a second record with the
//! same email fails with [`EntityStoreError::DuplicateKey`].

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Manager, ManagerId};

use super::EntityStoreError;

/// Storage for employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EntityStoreError>;

    /// Fetch an employee by login email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EntityStoreError>;

    /// Every employee, ordered by name.
    async fn list(&self) -> Result<Vec<Employee>, EntityStoreError>;

    /// Insert a new employee.
    async fn insert(&self, employee: &Employee) -> Result<(), EntityStoreError>;

    /// Overwrite the profile fields of an existing employee.
    async fn update_profile(&self, employee: &Employee) -> Result<(), EntityStoreError>;
}

/// Storage for manager records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Fetch a manager by identifier.
    async fn find_by_id(&self, id: &ManagerId) -> Result<Option<Manager>, EntityStoreError>;

    /// Fetch a manager by login email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, EntityStoreError>;

    /// Insert a new manager.
    async fn insert(&self, manager: &Manager) -> Result<(), EntityStoreError>;
}
