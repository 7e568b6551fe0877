//! Tests for the task workflow service.

use std::sync::Arc;

use chrono::Duration;

use super::*;
use crate::domain::ports::{EntityStoreError, MockEmployeeRepository, MockTaskRepository};
use crate::domain::test_fixtures::{employee_named, fixture_clock, fixture_now};
use crate::domain::{EmployeeId, ErrorCode, TaskId, TaskStatus};

fn make_service(
    tasks: MockTaskRepository,
    employees: MockEmployeeRepository,
) -> TaskService<MockTaskRepository, MockEmployeeRepository> {
    TaskService::new(
        Arc::new(tasks),
        IdentityDirectory::new(Arc::new(employees)),
        fixture_clock(),
    )
}

fn draft(employee_id: EmployeeId) -> TaskDraft {
    TaskDraft {
        employee_id,
        title: "Quarterly audit".to_owned(),
        description: "Reconcile ledgers".to_owned(),
        deadline: fixture_now() + Duration::days(7),
    }
}

fn status_request(task_id: TaskId, actor: TaskActor) -> UpdateTaskStatusRequest {
    UpdateTaskStatusRequest {
        task_id,
        status: TaskStatus::Completed,
        expected_revision: None,
        actor,
    }
}

#[tokio::test]
async fn assign_task_creates_pending_task_with_employee_name() {
    let ana = employee_named("Ana");
    let ana_id = ana.id;
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(ana)));
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_save()
        .withf(|task, expected| task.status == TaskStatus::Pending && expected.is_none())
        .times(1)
        .return_once(|_, _| Ok(()));

    let assigned = make_service(tasks, employees)
        .assign_task(draft(ana_id))
        .await
        .expect("assigned");
    assert_eq!(assigned.employee_name, "Ana");
    assert_eq!(assigned.task.status, TaskStatus::Pending);
    assert_eq!(assigned.task.revision, 1);
}

#[tokio::test]
async fn assign_task_to_unknown_employee_creates_nothing() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut tasks = MockTaskRepository::new();
    tasks.expect_save().never();

    let error = make_service(tasks, employees)
        .assign_task(draft(EmployeeId::random()))
        .await
        .expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn update_missing_task_is_not_found() {
    let mut tasks = MockTaskRepository::new();
    tasks.expect_find_by_id().times(1).return_once(|_| Ok(None));
    tasks.expect_save().never();

    let error = make_service(tasks, MockEmployeeRepository::new())
        .update_task_status(status_request(TaskId::random(), TaskActor::Manager))
        .await
        .expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Task not found");
}

#[tokio::test]
async fn manager_update_bumps_revision_with_conditional_write() {
    let task = Task::assign(draft(EmployeeId::random()), fixture_now());
    let task_id = task.id;
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(task)));
    tasks
        .expect_save()
        .withf(|next, expected| next.revision == 2 && *expected == Some(1))
        .times(1)
        .return_once(|_, _| Ok(()));

    let updated = make_service(tasks, MockEmployeeRepository::new())
        .update_task_status(status_request(task_id, TaskActor::Manager))
        .await
        .expect("updated");
    assert_eq!(updated.status, TaskStatus::Completed);
}

#[tokio::test]
async fn stale_expected_revision_conflicts_before_writing() {
    let task = Task::assign(draft(EmployeeId::random()), fixture_now());
    let task_id = task.id;
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(task)));
    tasks.expect_save().never();
    let mut request = status_request(task_id, TaskActor::Manager);
    request.expected_revision = Some(5);

    let error = make_service(tasks, MockEmployeeRepository::new())
        .update_task_status(request)
        .await
        .expect_err("conflict");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn lost_race_surfaces_as_conflict() {
    let task = Task::assign(draft(EmployeeId::random()), fixture_now());
    let task_id = task.id;
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(task)));
    tasks
        .expect_save()
        .times(1)
        .return_once(|_, _| Err(EntityStoreError::revision_mismatch(1_u32, 2_u32)));

    let error = make_service(tasks, MockEmployeeRepository::new())
        .update_task_status(status_request(task_id, TaskActor::Manager))
        .await
        .expect_err("conflict");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn employee_cannot_move_someone_elses_task() {
    let task = Task::assign(draft(EmployeeId::random()), fixture_now());
    let task_id = task.id;
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(task)));
    tasks.expect_save().never();
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(Some(employee_named("Ben"))));

    let actor = TaskActor::Employee {
        email: "ben@corp.test".to_owned(),
    };
    let error = make_service(tasks, employees)
        .update_task_status(status_request(task_id, actor))
        .await
        .expect_err("forbidden");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn employee_tasks_are_sorted_by_deadline() {
    let ana = employee_named("Ana");
    let ana_id = ana.id;
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_email()
        .times(1)
        .return_once(move |_| Ok(Some(ana)));
    let later = Task::assign(
        TaskDraft {
            deadline: fixture_now() + Duration::days(9),
            ..draft(ana_id)
        },
        fixture_now(),
    );
    let sooner = Task::assign(
        TaskDraft {
            deadline: fixture_now() + Duration::days(1),
            ..draft(ana_id)
        },
        fixture_now(),
    );
    let sooner_id = sooner.id;
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_list_for_employee()
        .times(1)
        .return_once(move |_| Ok(vec![later, sooner]));

    let listed = make_service(tasks, employees)
        .tasks_for_employee("ana@corp.test")
        .await
        .expect("listed");
    assert_eq!(listed.first().map(|t| t.id), Some(sooner_id));
}
