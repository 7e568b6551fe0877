//! In-process Entity Store.
//!
//! Implements every repository port over mutex-guarded vectors so the server
//! can run without PostgreSQL and handler tests can exercise real storage
//! semantics. Uniqueness and revision checks mirror the Diesel adapter:
//! duplicate emails and membership pairs fail with
//! [`EntityStoreError::DuplicateKey`], and conditional saves fail with
//! [`EntityStoreError::RevisionMismatch`] or [`EntityStoreError::Missing`].

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AttendanceRepository, EmployeeRepository, EntityStoreError, LeaveRepository,
    ManagerRepository, ReviewRepository, TaskRepository, TeamRepository, TodoRepository,
    WorkReportRepository,
};
use crate::domain::{
    AttendanceSheet, Employee, EmployeeId, LeaveId, LeaveRequest, Manager, ManagerId, MonthKey,
    ReportId, Review, ReviewId, Task, TaskId, TeamMembership, Todo, TodoId, WorkReport,
};

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    managers: Vec<Manager>,
    memberships: Vec<TeamMembership>,
    tasks: Vec<Task>,
    leaves: Vec<LeaveRequest>,
    reports: Vec<WorkReport>,
    reviews: Vec<Review>,
    attendance: Vec<AttendanceSheet>,
    todos: Vec<Todo>,
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryEntityStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryEntityStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attendance sheet, replacing any sheet for the same
    /// employee and month.
    ///
    /// Attendance is populated outside the HTTP surface; this is the seeding
    /// hook used by tooling and tests.
    pub fn insert_attendance(&self, sheet: AttendanceSheet) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        tables
            .attendance
            .retain(|s| !(s.employee_id == sheet.employee_id && s.month == sheet.month));
        tables.attendance.push(sheet);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, EntityStoreError> {
        self.tables
            .lock()
            .map_err(|_| EntityStoreError::connection("in-memory store lock poisoned"))
    }
}

/// Apply the shared insert-or-compare-and-swap contract to one table.
fn save_revisioned<T: Clone>(
    rows: &mut Vec<T>,
    entity: &T,
    expected_revision: Option<u32>,
    same_id: impl Fn(&T) -> bool,
    revision_of: impl Fn(&T) -> u32,
    label: &str,
) -> Result<(), EntityStoreError> {
    let position = rows.iter().position(&same_id);
    match (expected_revision, position) {
        (None, None) => {
            rows.push(entity.clone());
            Ok(())
        }
        (None, Some(_)) => Err(EntityStoreError::duplicate_key(format!(
            "{label} already exists"
        ))),
        (Some(_), None) => Err(EntityStoreError::missing(label)),
        (Some(expected), Some(index)) => {
            let slot = rows
                .get_mut(index)
                .ok_or_else(|| EntityStoreError::missing(label))?;
            let actual = revision_of(slot);
            if actual != expected {
                return Err(EntityStoreError::revision_mismatch(expected, actual));
            }
            *slot = entity.clone();
            Ok(())
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.employees.iter().find(|e| e.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.employees.iter().find(|e| e.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<Employee>, EntityStoreError> {
        let tables = self.lock()?;
        let mut employees = tables.employees.clone();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        if tables.employees.iter().any(|e| e.email == employee.email) {
            return Err(EntityStoreError::duplicate_key("employees_email_key"));
        }
        tables.employees.push(employee.clone());
        Ok(())
    }

    async fn update_profile(&self, employee: &Employee) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        let stored = tables
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| EntityStoreError::missing("Employee"))?;
        stored.name.clone_from(&employee.name);
        stored.phone.clone_from(&employee.phone);
        stored.address.clone_from(&employee.address);
        stored.department.clone_from(&employee.department);
        Ok(())
    }
}

#[async_trait]
impl ManagerRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &ManagerId) -> Result<Option<Manager>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.managers.iter().find(|m| m.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.managers.iter().find(|m| m.email == email).cloned())
    }

    async fn insert(&self, manager: &Manager) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        if tables.managers.iter().any(|m| m.email == manager.email) {
            return Err(EntityStoreError::duplicate_key("managers_email_key"));
        }
        tables.managers.push(manager.clone());
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryEntityStore {
    async fn insert(&self, membership: &TeamMembership) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        let taken = tables.memberships.iter().any(|m| {
            m.manager_id == membership.manager_id && m.employee_id == membership.employee_id
        });
        if taken {
            return Err(EntityStoreError::duplicate_key("team_memberships_pkey"));
        }
        tables.memberships.push(membership.clone());
        Ok(())
    }

    async fn list_for_manager(
        &self,
        manager_id: &ManagerId,
    ) -> Result<Vec<TeamMembership>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .memberships
            .iter()
            .filter(|m| m.manager_id == *manager_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.tasks.iter().find(|t| t.id == *id).cloned())
    }

    async fn list_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Task>, EntityStoreError> {
        let tables = self.lock()?;
        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| t.employee_id == *employee_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.deadline);
        Ok(tasks)
    }

    async fn save(&self, task: &Task, expected_revision: Option<u32>) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        save_revisioned(
            &mut tables.tasks,
            task,
            expected_revision,
            |t| t.id == task.id,
            |t| t.revision,
            "Task",
        )
    }
}

#[async_trait]
impl LeaveRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &LeaveId) -> Result<Option<LeaveRequest>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.leaves.iter().find(|l| l.id == *id).cloned())
    }

    async fn list_for_email(&self, email: &str) -> Result<Vec<LeaveRequest>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .leaves
            .iter()
            .filter(|l| l.employee_email == email)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<LeaveRequest>, EntityStoreError> {
        let tables = self.lock()?;
        let mut leaves = tables.leaves.clone();
        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leaves)
    }

    async fn save(
        &self,
        leave: &LeaveRequest,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        save_revisioned(
            &mut tables.leaves,
            leave,
            expected_revision,
            |l| l.id == leave.id,
            |l| l.revision,
            "Leave",
        )
    }
}

#[async_trait]
impl WorkReportRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<WorkReport>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.reports.iter().find(|r| r.id == *id).cloned())
    }

    async fn list(
        &self,
        employee_email: Option<String>,
    ) -> Result<Vec<WorkReport>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .reports
            .iter()
            .filter(|r| {
                employee_email
                    .as_deref()
                    .is_none_or(|email| r.employee_email == email)
            })
            .cloned()
            .collect())
    }

    async fn save(
        &self,
        report: &WorkReport,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        save_revisioned(
            &mut tables.reports,
            report,
            expected_revision,
            |r| r.id == report.id,
            |r| r.revision,
            "Report",
        )
    }
}

#[async_trait]
impl ReviewRepository for InMemoryEntityStore {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.reviews.iter().find(|r| r.id == *id).cloned())
    }

    async fn list(&self, employee_id: Option<EmployeeId>) -> Result<Vec<Review>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .reviews
            .iter()
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect())
    }

    async fn save(
        &self,
        review: &Review,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        save_revisioned(
            &mut tables.reviews,
            review,
            expected_revision,
            |r| r.id == review.id,
            |r| r.revision,
            "Review",
        )
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryEntityStore {
    async fn find_sheet(
        &self,
        employee_id: &EmployeeId,
        month: &MonthKey,
    ) -> Result<Option<AttendanceSheet>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .attendance
            .iter()
            .find(|s| s.employee_id == *employee_id && s.month == *month)
            .cloned())
    }
}

#[async_trait]
impl TodoRepository for InMemoryEntityStore {
    async fn list_for_email(&self, email: &str) -> Result<Vec<Todo>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .todos
            .iter()
            .filter(|t| t.employee_email == email)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, EntityStoreError> {
        let tables = self.lock()?;
        Ok(tables.todos.iter().find(|t| t.id == *id).cloned())
    }

    async fn upsert(&self, todo: &Todo) -> Result<(), EntityStoreError> {
        let mut tables = self.lock()?;
        match tables.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => *slot = todo.clone(),
            None => tables.todos.push(todo.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, EntityStoreError> {
        let mut tables = self.lock()?;
        let before = tables.todos.len();
        tables.todos.retain(|t| t.id != *id);
        Ok(tables.todos.len() != before)
    }
}

#[cfg(test)]
mod tests;
