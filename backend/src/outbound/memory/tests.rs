//! Storage semantics of the in-memory Entity Store.

use chrono::{Duration, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{
    AttendanceRecord, AttendanceStatus, PasswordHash, TaskDraft, TaskStatus, TodoId,
};

#[fixture]
fn store() -> InMemoryEntityStore {
    InMemoryEntityStore::new()
}

fn employee(name: &str, email: &str) -> Employee {
    Employee {
        id: EmployeeId::random(),
        name: name.to_owned(),
        email: email.to_owned(),
        password_hash: PasswordHash::new("$argon2id$stored"),
        phone: None,
        address: None,
        department: None,
        created_at: Utc::now(),
    }
}

fn task_for(employee_id: EmployeeId, due_in_days: i64) -> Task {
    let now = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).single().expect("valid time");
    Task::assign(
        TaskDraft {
            employee_id,
            title: "Audit".to_owned(),
            description: "Quarterly audit".to_owned(),
            deadline: now + Duration::days(due_in_days),
        },
        now,
    )
}

#[rstest]
#[tokio::test]
async fn employee_emails_are_unique(store: InMemoryEntityStore) {
    EmployeeRepository::insert(&store, &employee("Ana", "ana@corp.test"))
        .await
        .expect("first insert");
    let err = EmployeeRepository::insert(&store, &employee("Ana B", "ana@corp.test"))
        .await
        .expect_err("duplicate email rejected");
    assert!(matches!(err, EntityStoreError::DuplicateKey { .. }));
}

#[rstest]
#[tokio::test]
async fn employees_list_by_name(store: InMemoryEntityStore) {
    for (name, email) in [("Zoe", "z@corp.test"), ("Ana", "a@corp.test")] {
        EmployeeRepository::insert(&store, &employee(name, email))
            .await
            .expect("insert");
    }
    let names: Vec<String> = EmployeeRepository::list(&store)
        .await
        .expect("list")
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Ana", "Zoe"]);
}

#[rstest]
#[tokio::test]
async fn membership_pairs_are_unique(store: InMemoryEntityStore) {
    let membership = TeamMembership {
        manager_id: ManagerId::random(),
        employee_id: EmployeeId::random(),
        added_at: Utc::now(),
    };
    TeamRepository::insert(&store, &membership).await.expect("first claim");
    let err = TeamRepository::insert(&store, &membership)
        .await
        .expect_err("second claim rejected");
    assert!(matches!(err, EntityStoreError::DuplicateKey { .. }));
    let listed = store
        .list_for_manager(&membership.manager_id)
        .await
        .expect("list");
    assert_eq!(listed, vec![membership]);
}

#[rstest]
#[tokio::test]
async fn task_save_compares_revisions(store: InMemoryEntityStore) {
    let task = task_for(EmployeeId::random(), 3);
    TaskRepository::save(&store, &task, None).await.expect("insert");

    let now = Utc::now();
    let first = task.with_status(TaskStatus::InProgress, now);
    TaskRepository::save(&store, &first, Some(task.revision))
        .await
        .expect("winner writes");

    let stale = task.with_status(TaskStatus::Completed, now);
    let err = TaskRepository::save(&store, &stale, Some(task.revision))
        .await
        .expect_err("loser rejected");
    assert_eq!(
        err,
        EntityStoreError::revision_mismatch(task.revision, first.revision)
    );

    let stored = TaskRepository::find_by_id(&store, &task.id)
        .await
        .expect("find")
        .expect("task exists");
    assert_eq!(stored.status, TaskStatus::InProgress);
}

#[rstest]
#[tokio::test]
async fn conditional_save_of_unknown_task_is_missing(store: InMemoryEntityStore) {
    let task = task_for(EmployeeId::random(), 1);
    let err = TaskRepository::save(&store, &task, Some(1))
        .await
        .expect_err("nothing to update");
    assert_eq!(err, EntityStoreError::missing("Task"));
}

#[rstest]
#[tokio::test]
async fn tasks_list_by_deadline(store: InMemoryEntityStore) {
    let owner = EmployeeId::random();
    let later = task_for(owner, 9);
    let sooner = task_for(owner, 2);
    let other = task_for(EmployeeId::random(), 1);
    for task in [&later, &sooner, &other] {
        TaskRepository::save(&store, task, None).await.expect("insert");
    }
    let ids: Vec<TaskId> = store
        .list_for_employee(&owner)
        .await
        .expect("list")
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
}

#[rstest]
#[tokio::test]
async fn attendance_seed_replaces_same_month(store: InMemoryEntityStore) {
    let employee_id = EmployeeId::random();
    let month = MonthKey::try_from("2025-03".to_owned()).expect("valid month");
    let day = crate::domain::test_fixtures::jan(2);
    let sheet = |status: &str| AttendanceSheet {
        employee_id,
        month: month.clone(),
        records: vec![AttendanceRecord {
            date: day,
            status: AttendanceStatus::from(status.to_owned()),
        }],
    };
    store.insert_attendance(sheet("absent")).expect("seed");
    store.insert_attendance(sheet("present")).expect("reseed");

    let found = store
        .find_sheet(&employee_id, &month)
        .await
        .expect("lookup")
        .expect("sheet exists");
    assert_eq!(found.records.len(), 1);
    assert_eq!(
        found.records.first().map(|r| r.status.clone()),
        Some(AttendanceStatus::Present)
    );
}

#[rstest]
#[tokio::test]
async fn todo_delete_reports_presence(store: InMemoryEntityStore) {
    let todo = Todo::new("ana@corp.test", "File expenses", Utc::now());
    store.upsert(&todo).await.expect("insert");
    store.upsert(&todo.toggled()).await.expect("overwrite");

    let listed = TodoRepository::list_for_email(&store, "ana@corp.test")
        .await
        .expect("list");
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|t| t.completed));

    assert!(TodoRepository::delete(&store, &todo.id).await.expect("delete"));
    assert!(!TodoRepository::delete(&store, &TodoId::random()).await.expect("noop"));
}
