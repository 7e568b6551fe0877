//! PostgreSQL Entity Store adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Conditional writes**: status-bearing rows are updated only while their
//!   `revision` column still holds the value the caller read.
//! - **Strongly typed errors**: All database errors are mapped to
//!   [`crate::domain::ports::EntityStoreError`].
//!
//! # Example
//!
//! ```ignore
//! use hr_backend::outbound::persistence::{DbPool, PoolConfig, DieselTaskRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/hr");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselTaskRepository::new(pool);
//! ```

mod diesel_attendance_repository;
pub(crate) mod diesel_helpers;
mod diesel_leave_repository;
mod diesel_people_repository;
mod diesel_review_repository;
mod diesel_task_repository;
mod diesel_team_repository;
mod diesel_todo_repository;
mod diesel_work_report_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_attendance_repository::DieselAttendanceRepository;
pub use diesel_leave_repository::DieselLeaveRepository;
pub use diesel_people_repository::{DieselEmployeeRepository, DieselManagerRepository};
pub use diesel_review_repository::DieselReviewRepository;
pub use diesel_task_repository::DieselTaskRepository;
pub use diesel_team_repository::DieselTeamRepository;
pub use diesel_todo_repository::DieselTodoRepository;
pub use diesel_work_report_repository::DieselWorkReportRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
