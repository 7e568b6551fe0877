//! Identity Directory: employee lookups and listing enrichment.
//!
//! Direct lookups fail with `not_found`. Enrichment never fails: a record
//! whose employee cannot be resolved, or whose lookup errors, is returned
//! with no contact card and the failure is logged.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::warn;

use crate::domain::ports::EmployeeRepository;
use crate::domain::store_errors::map_store_error;
use crate::domain::{ContactCard, Employee, EmployeeId, Error};

/// Message returned whenever an employee reference does not resolve.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Resolves employee references to records and display data.
pub struct IdentityDirectory<E> {
    employees: Arc<E>,
}

impl<E> Clone for IdentityDirectory<E> {
    fn clone(&self) -> Self {
        Self {
            employees: Arc::clone(&self.employees),
        }
    }
}

impl<E> IdentityDirectory<E> {
    /// Wrap an employee repository.
    pub fn new(employees: Arc<E>) -> Self {
        Self { employees }
    }

    /// Underlying repository.
    pub fn employees(&self) -> &Arc<E> {
        &self.employees
    }
}

impl<E> IdentityDirectory<E>
where
    E: EmployeeRepository,
{
    /// Employee by identifier.
    pub async fn employee(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.employees
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }

    /// Employee by login email.
    pub async fn employee_by_email(&self, email: &str) -> Result<Employee, Error> {
        self.employees
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }

    /// Contact card for an optional reference, degrading to `None`.
    pub async fn contact_card(&self, id: Option<EmployeeId>) -> Option<ContactCard> {
        let id = id?;
        match self.employees.find_by_id(&id).await {
            Ok(found) => found.map(|employee| employee.contact_card()),
            Err(error) => {
                warn!(employee_id = %id, error = %error, "enrichment lookup failed");
                None
            }
        }
    }

    /// Contact cards for each reference, looked up concurrently and returned
    /// in input order.
    pub async fn contact_cards<I>(&self, ids: I) -> Vec<Option<ContactCard>>
    where
        I: IntoIterator<Item = Option<EmployeeId>>,
    {
        join_all(ids.into_iter().map(|id| self.contact_card(id))).await
    }
}
