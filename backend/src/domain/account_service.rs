//! Registration, login and profile maintenance for both role tables.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::directory::EMPLOYEE_NOT_FOUND;
use crate::domain::ports::{
    AccountsCommand, CredentialHasher, CredentialHasherError, EmployeeRepository, EntityStoreError,
    ManagerRepository,
};
use crate::domain::store_errors::map_store_error;
use crate::domain::{
    AuthenticatedUser, Employee, EmployeeId, EmployeeProfile, Error, LoginCredentials, Manager,
    ManagerId, PasswordHash, ProfileUpdate, Registration, Role,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Accounts service implementing [`AccountsCommand`].
pub struct AccountService<E, M> {
    employees: Arc<E>,
    managers: Arc<M>,
    hasher: Arc<dyn CredentialHasher>,
    clock: Arc<dyn Clock>,
}

impl<E, M> AccountService<E, M> {
    /// Create the service over both role tables.
    pub fn new(
        employees: Arc<E>,
        managers: Arc<M>,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            managers,
            hasher,
            clock,
        }
    }
}

fn map_hasher_error(error: CredentialHasherError) -> Error {
    Error::internal(format!("credential hasher failed: {error}"))
}

fn already_exists(table: Role) -> Error {
    Error::conflict(format!("{table} already exists"))
}

fn map_insert_error(table: Role) -> impl FnOnce(EntityStoreError) -> Error {
    move |error| match error {
        EntityStoreError::DuplicateKey { .. } => already_exists(table),
        other => map_store_error(other),
    }
}

fn wrong_table(table: Role) -> Error {
    Error::forbidden(format!("Only {table}s can be registered here"))
}

impl<E, M> AccountService<E, M>
where
    E: EmployeeRepository,
    M: ManagerRepository,
{
    fn hash(&self, registration: &Registration) -> Result<PasswordHash, Error> {
        self.hasher
            .hash(registration.credentials().password())
            .map_err(map_hasher_error)
    }

    fn verify(&self, credentials: &LoginCredentials, hash: &PasswordHash) -> Result<(), Error> {
        let matched = self
            .hasher
            .verify(credentials.password(), hash)
            .map_err(map_hasher_error)?;
        if matched {
            Ok(())
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }

    async fn register_employee(
        &self,
        registration: Registration,
    ) -> Result<AuthenticatedUser, Error> {
        let email = registration.credentials().email();
        if self
            .employees
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .is_some()
        {
            return Err(already_exists(Role::Employee));
        }

        let contact = registration.contact().clone();
        let employee = Employee {
            id: EmployeeId::random(),
            name: registration.name().to_owned(),
            email: email.to_owned(),
            password_hash: self.hash(&registration)?,
            phone: contact.phone,
            address: contact.address,
            department: contact.department,
            created_at: self.clock.utc(),
        };
        self.employees
            .insert(&employee)
            .await
            .map_err(map_insert_error(Role::Employee))?;
        info!(employee_id = %employee.id, "employee registered");
        Ok(AuthenticatedUser {
            id: *employee.id.as_uuid(),
            name: employee.name,
            email: employee.email,
            role: Role::Employee,
        })
    }

    async fn register_manager(
        &self,
        registration: Registration,
    ) -> Result<AuthenticatedUser, Error> {
        let email = registration.credentials().email();
        if self
            .managers
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .is_some()
        {
            return Err(already_exists(Role::Manager));
        }

        let manager = Manager {
            id: ManagerId::random(),
            name: registration.name().to_owned(),
            email: email.to_owned(),
            password_hash: self.hash(&registration)?,
            created_at: self.clock.utc(),
        };
        self.managers
            .insert(&manager)
            .await
            .map_err(map_insert_error(Role::Manager))?;
        info!(manager_id = %manager.id, "manager registered");
        Ok(AuthenticatedUser {
            id: *manager.id.as_uuid(),
            name: manager.name,
            email: manager.email,
            role: Role::Manager,
        })
    }

    async fn employee_by_email(&self, email: &str) -> Result<Employee, Error> {
        self.employees
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }
}

#[async_trait]
impl<E, M> AccountsCommand for AccountService<E, M>
where
    E: EmployeeRepository,
    M: ManagerRepository,
{
    async fn register(
        &self,
        table: Role,
        registration: Registration,
    ) -> Result<AuthenticatedUser, Error> {
        if registration.role() != table {
            return Err(wrong_table(table));
        }
        match table {
            Role::Employee => self.register_employee(registration).await,
            Role::Manager => self.register_manager(registration).await,
        }
    }

    async fn login(
        &self,
        table: Role,
        credentials: LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        match table {
            Role::Employee => {
                let employee = self.employee_by_email(credentials.email()).await?;
                self.verify(&credentials, &employee.password_hash)?;
                Ok(AuthenticatedUser {
                    id: *employee.id.as_uuid(),
                    name: employee.name,
                    email: employee.email,
                    role: Role::Employee,
                })
            }
            Role::Manager => {
                let manager = self
                    .managers
                    .find_by_email(credentials.email())
                    .await
                    .map_err(map_store_error)?
                    .ok_or_else(|| Error::not_found("Manager not found"))?;
                self.verify(&credentials, &manager.password_hash)?;
                Ok(AuthenticatedUser {
                    id: *manager.id.as_uuid(),
                    name: manager.name,
                    email: manager.email,
                    role: Role::Manager,
                })
            }
        }
    }

    async fn profile(&self, email: &str) -> Result<EmployeeProfile, Error> {
        Ok(self.employee_by_email(email).await?.profile())
    }

    async fn update_profile(
        &self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<EmployeeProfile, Error> {
        let mut employee = self.employee_by_email(email).await?;
        employee.apply(update);
        self.employees
            .update_profile(&employee)
            .await
            .map_err(map_store_error)?;
        info!(employee_id = %employee.id, "profile updated");
        Ok(employee.profile())
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
