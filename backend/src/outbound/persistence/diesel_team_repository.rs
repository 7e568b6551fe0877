//! PostgreSQL-backed `TeamRepository`.
//!
//! The composite primary key `(manager_id, employee_id)` enforces that a
//! manager claims an employee at most once.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, TeamRepository};
use crate::domain::{EmployeeId, ManagerId, TeamMembership};
use crate::query_vec;

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::TeamMembershipRow;
use super::pool::DbPool;
use super::schema::team_memberships;

/// Diesel-backed implementation of [`TeamRepository`].
#[derive(Clone)]
pub struct DieselTeamRepository {
    pool: DbPool,
}

impl DieselTeamRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "row converters share the fallible signature expected by the query macros"
)]
fn row_to_membership(row: TeamMembershipRow) -> Result<TeamMembership, String> {
    Ok(TeamMembership {
        manager_id: ManagerId::from_uuid(row.manager_id),
        employee_id: EmployeeId::from_uuid(row.employee_id),
        added_at: row.added_at,
    })
}

#[async_trait]
impl TeamRepository for DieselTeamRepository {
    async fn insert(&self, membership: &TeamMembership) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = TeamMembershipRow {
            manager_id: *membership.manager_id.as_uuid(),
            employee_id: *membership.employee_id.as_uuid(),
            added_at: membership.added_at,
        };
        diesel::insert_into(team_memberships::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_for_manager(
        &self,
        manager_id: &ManagerId,
    ) -> Result<Vec<TeamMembership>, EntityStoreError> {
        query_vec!(
            self,
            team_memberships::table,
            team_memberships::manager_id.eq(manager_id.as_uuid()),
            team_memberships::added_at.asc(),
            TeamMembershipRow,
            row_to_membership
        )
    }
}
