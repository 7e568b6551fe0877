//! Driving port for registration, login and profile maintenance.

use async_trait::async_trait;

use crate::domain::{
    AuthenticatedUser, EmployeeProfile, Error, LoginCredentials, ProfileUpdate, Registration, Role,
};

/// Account use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Register into the `table` role table.
    ///
    /// Fails with `forbidden` when the registration claims another role and
    /// with `conflict` when the email is taken in that table.
    async fn register(
        &self,
        table: Role,
        registration: Registration,
    ) -> Result<AuthenticatedUser, Error>;

    /// Verify credentials against the `table` role table.
    async fn login(
        &self,
        table: Role,
        credentials: LoginCredentials,
    ) -> Result<AuthenticatedUser, Error>;

    /// Profile of the employee registered under `email`.
    async fn profile(&self, email: &str) -> Result<EmployeeProfile, Error>;

    /// Apply a partial profile edit and return the stored result.
    async fn update_profile(
        &self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<EmployeeProfile, Error>;
}
