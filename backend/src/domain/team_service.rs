//! Team membership and the manager's staff views.
//!
//! A manager claims an employee at most once; a repeated claim is a
//! conflict rather than a silent no-op.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use mockable::Clock;
use tracing::info;

use crate::domain::directory::IdentityDirectory;
use crate::domain::ports::{
    EmployeeRepository, EntityStoreError, ManagerRepository, TaskRepository, TeamCommand,
    TeamRepository,
};
use crate::domain::store_errors::map_store_error;
use crate::domain::{
    EmployeeId, EmployeeProfile, EmployeeWorkload, Error, Manager, TeamMember, TeamMembership,
};

/// Team service implementing [`TeamCommand`].
pub struct TeamService<T, M, E, K> {
    teams: Arc<T>,
    managers: Arc<M>,
    directory: IdentityDirectory<E>,
    tasks: Arc<K>,
    clock: Arc<dyn Clock>,
}

impl<T, M, E, K> TeamService<T, M, E, K> {
    /// Create the service.
    pub fn new(
        teams: Arc<T>,
        managers: Arc<M>,
        directory: IdentityDirectory<E>,
        tasks: Arc<K>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            teams,
            managers,
            directory,
            tasks,
            clock,
        }
    }
}

impl<T, M, E, K> TeamService<T, M, E, K>
where
    M: ManagerRepository,
{
    async fn manager_by_email(&self, email: &str) -> Result<Manager, Error> {
        self.managers
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Manager not found"))
    }
}

#[async_trait]
impl<T, M, E, K> TeamCommand for TeamService<T, M, E, K>
where
    T: TeamRepository,
    M: ManagerRepository,
    E: EmployeeRepository,
    K: TaskRepository,
{
    async fn list_employees(&self) -> Result<Vec<EmployeeProfile>, Error> {
        let employees = self
            .directory
            .employees()
            .list()
            .await
            .map_err(map_store_error)?;
        Ok(employees.iter().map(|employee| employee.profile()).collect())
    }

    async fn add_team_member(
        &self,
        manager_email: &str,
        employee_id: EmployeeId,
    ) -> Result<TeamMembership, Error> {
        let manager = self.manager_by_email(manager_email).await?;
        let employee = self.directory.employee(&employee_id).await?;
        let membership = TeamMembership {
            manager_id: manager.id,
            employee_id: employee.id,
            added_at: self.clock.utc(),
        };
        self.teams
            .insert(&membership)
            .await
            .map_err(|error| match error {
                EntityStoreError::DuplicateKey { .. } => {
                    Error::conflict("Employee is already in this team")
                }
                other => map_store_error(other),
            })?;
        info!(manager_id = %manager.id, employee_id = %employee.id, "team member added");
        Ok(membership)
    }

    async fn team_members(&self, manager_email: &str) -> Result<Vec<TeamMember>, Error> {
        let manager = self.manager_by_email(manager_email).await?;
        let memberships = self
            .teams
            .list_for_manager(&manager.id)
            .await
            .map_err(map_store_error)?;
        let cards = self
            .directory
            .contact_cards(memberships.iter().map(|m| Some(m.employee_id)))
            .await;
        Ok(memberships
            .into_iter()
            .zip(cards)
            .map(|(membership, card)| {
                let (name, email) = card
                    .map(|c| (Some(c.name), Some(c.email)))
                    .unwrap_or_default();
                TeamMember {
                    employee_id: membership.employee_id,
                    name,
                    email,
                    added_at: membership.added_at,
                }
            })
            .collect())
    }

    async fn team_overview(&self) -> Result<Vec<EmployeeWorkload>, Error> {
        let employees = self
            .directory
            .employees()
            .list()
            .await
            .map_err(map_store_error)?;
        let workloads = employees.into_iter().map(|employee| async move {
            let mut tasks = self
                .tasks
                .list_for_employee(&employee.id)
                .await
                .map_err(map_store_error)?;
            tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline));
            Ok::<_, Error>(EmployeeWorkload {
                id: employee.id,
                name: employee.name,
                email: employee.email,
                tasks,
            })
        });
        try_join_all(workloads).await
    }
}

#[cfg(test)]
#[path = "team_service_tests.rs"]
mod tests;
