//! Driving port for team membership and the manager's staff views.

use async_trait::async_trait;

use crate::domain::{
    EmployeeId, EmployeeProfile, EmployeeWorkload, Error, TeamMember, TeamMembership,
};

/// Team use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamCommand: Send + Sync {
    /// Every registered employee.
    async fn list_employees(&self) -> Result<Vec<EmployeeProfile>, Error>;

    /// Claim an employee for the manager registered under `manager_email`.
    ///
    /// Fails with `conflict` when the pair already exists.
    async fn add_team_member(
        &self,
        manager_email: &str,
        employee_id: EmployeeId,
    ) -> Result<TeamMembership, Error>;

    /// Members claimed by the manager registered under `manager_email`.
    async fn team_members(&self, manager_email: &str) -> Result<Vec<TeamMember>, Error>;

    /// Every employee with their assigned tasks.
    async fn team_overview(&self) -> Result<Vec<EmployeeWorkload>, Error>;
}
