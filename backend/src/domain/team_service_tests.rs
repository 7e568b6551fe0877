//! Tests for the team service.

use std::sync::Arc;

use chrono::Duration;

use super::*;
use crate::domain::ports::{
    MockEmployeeRepository, MockManagerRepository, MockTaskRepository, MockTeamRepository,
};
use crate::domain::test_fixtures::{employee_named, fixture_clock, fixture_now};
use crate::domain::{ErrorCode, ManagerId, PasswordHash, Task, TaskDraft};

type Service =
    TeamService<MockTeamRepository, MockManagerRepository, MockEmployeeRepository, MockTaskRepository>;

fn make_service(
    teams: MockTeamRepository,
    managers: MockManagerRepository,
    employees: MockEmployeeRepository,
    tasks: MockTaskRepository,
) -> Service {
    TeamService::new(
        Arc::new(teams),
        Arc::new(managers),
        IdentityDirectory::new(Arc::new(employees)),
        Arc::new(tasks),
        fixture_clock(),
    )
}

fn boss() -> Manager {
    Manager {
        id: ManagerId::random(),
        name: "Boss".to_owned(),
        email: "boss@corp.test".to_owned(),
        password_hash: PasswordHash::new("$argon2id$fixture"),
        created_at: fixture_now(),
    }
}

fn managers_with_boss() -> MockManagerRepository {
    let mut managers = MockManagerRepository::new();
    managers
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(Some(boss())));
    managers
}

fn employees_with(name: &str) -> (MockEmployeeRepository, EmployeeId) {
    let employee = employee_named(name);
    let id = employee.id;
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .returning(move |_| Ok(Some(employee.clone())));
    (employees, id)
}

#[tokio::test]
async fn adding_member_persists_membership() {
    let (employees, ana_id) = employees_with("Ana");
    let mut teams = MockTeamRepository::new();
    teams
        .expect_insert()
        .withf(move |membership| membership.employee_id == ana_id)
        .times(1)
        .return_once(|_| Ok(()));

    let membership = make_service(
        teams,
        managers_with_boss(),
        employees,
        MockTaskRepository::new(),
    )
    .add_team_member("boss@corp.test", ana_id)
    .await
    .expect("added");
    assert_eq!(membership.added_at, fixture_now());
}

#[tokio::test]
async fn duplicate_membership_is_a_conflict() {
    let (employees, ana_id) = employees_with("Ana");
    let mut teams = MockTeamRepository::new();
    teams
        .expect_insert()
        .times(1)
        .return_once(|_| Err(EntityStoreError::duplicate_key("team_memberships_pkey")));

    let error = make_service(
        teams,
        managers_with_boss(),
        employees,
        MockTaskRepository::new(),
    )
    .add_team_member("boss@corp.test", ana_id)
    .await
    .expect_err("conflict");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn adding_unknown_employee_is_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut teams = MockTeamRepository::new();
    teams.expect_insert().never();

    let error = make_service(
        teams,
        managers_with_boss(),
        employees,
        MockTaskRepository::new(),
    )
    .add_team_member("boss@corp.test", EmployeeId::random())
    .await
    .expect_err("not found");
    assert_eq!(error.message(), "Employee not found");
}

#[tokio::test]
async fn team_members_are_enriched() {
    let (employees, ana_id) = employees_with("Ana");
    let mut teams = MockTeamRepository::new();
    teams.expect_list_for_manager().times(1).return_once(move |manager_id| {
        Ok(vec![TeamMembership {
            manager_id: *manager_id,
            employee_id: ana_id,
            added_at: fixture_now(),
        }])
    });

    let members = make_service(
        teams,
        managers_with_boss(),
        employees,
        MockTaskRepository::new(),
    )
    .team_members("boss@corp.test")
    .await
    .expect("listed");
    let member = members.first().expect("one member");
    assert_eq!(member.name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn overview_groups_tasks_per_employee() {
    let ana = employee_named("Ana");
    let ana_id = ana.id;
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_list()
        .times(1)
        .return_once(move || Ok(vec![ana]));
    let mut tasks = MockTaskRepository::new();
    tasks.expect_list_for_employee().times(1).return_once(move |id| {
        Ok(vec![Task::assign(
            TaskDraft {
                employee_id: *id,
                title: "Onboard".to_owned(),
                description: "Laptop and badge".to_owned(),
                deadline: fixture_now() + Duration::days(1),
            },
            fixture_now(),
        )])
    });

    let overview = make_service(
        MockTeamRepository::new(),
        MockManagerRepository::new(),
        employees,
        tasks,
    )
    .team_overview()
    .await
    .expect("overview");
    let workload = overview.first().expect("one employee");
    assert_eq!(workload.id, ana_id);
    assert_eq!(workload.tasks.len(), 1);
}
