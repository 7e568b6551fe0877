//! Leave request workflow.
//!
//! Applications are filed as pending whatever their date order. Decisions
//! may overwrite any prior decision.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::directory::IdentityDirectory;
use crate::domain::ports::{
    EmployeeRepository, EnrichedLeave, LeaveRepository, LeaveWorkflow, UpdateLeaveStatusRequest,
};
use crate::domain::revision::ensure_expected_revision;
use crate::domain::store_errors::map_store_error;
use crate::domain::{Error, LeaveDraft, LeaveRequest};

/// Leave workflow service.
pub struct LeaveService<L, E> {
    leaves: Arc<L>,
    directory: IdentityDirectory<E>,
    clock: Arc<dyn Clock>,
}

impl<L, E> LeaveService<L, E> {
    /// Create the service.
    pub fn new(leaves: Arc<L>, directory: IdentityDirectory<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            leaves,
            directory,
            clock,
        }
    }
}

#[async_trait]
impl<L, E> LeaveWorkflow for LeaveService<L, E>
where
    L: LeaveRepository,
    E: EmployeeRepository,
{
    async fn apply_leave(&self, draft: LeaveDraft) -> Result<Vec<LeaveRequest>, Error> {
        let employee_id = self
            .directory
            .employees()
            .find_by_email(&draft.employee_email)
            .await
            .map_err(map_store_error)?
            .map(|employee| employee.id);
        let email = draft.employee_email.clone();
        let leave = LeaveRequest::file(draft, employee_id, self.clock.utc());
        self.leaves
            .save(&leave, None)
            .await
            .map_err(map_store_error)?;
        info!(leave_id = %leave.id, "leave requested");
        self.leave_history(&email).await
    }

    async fn leave_history(&self, email: &str) -> Result<Vec<LeaveRequest>, Error> {
        self.leaves
            .list_for_email(email)
            .await
            .map_err(map_store_error)
    }

    async fn list_leave_requests(&self) -> Result<Vec<EnrichedLeave>, Error> {
        let mut leaves = self.leaves.list_all().await.map_err(map_store_error)?;
        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let cards = self
            .directory
            .contact_cards(leaves.iter().map(|leave| leave.employee_id))
            .await;
        Ok(leaves
            .into_iter()
            .zip(cards)
            .map(|(leave, card)| EnrichedLeave::new(leave, card))
            .collect())
    }

    async fn update_leave_status(
        &self,
        request: UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequest, Error> {
        let current = self
            .leaves
            .find_by_id(&request.leave_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Leave not found"))?;
        ensure_expected_revision(request.expected_revision, current.revision)?;

        let next = current.with_status(request.status, self.clock.utc());
        self.leaves
            .save(&next, Some(current.revision))
            .await
            .map_err(map_store_error)?;
        info!(
            leave_id = %next.id,
            status = %next.status,
            revision = next.revision,
            "leave status updated"
        );
        Ok(next)
    }
}

#[cfg(test)]
#[path = "leave_service_tests.rs"]
mod tests;
