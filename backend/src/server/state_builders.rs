//! Builders for the HTTP state from server configuration.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use hr_backend::inbound::http::state::{HttpState, Repositories};
use hr_backend::outbound::credentials::Argon2CredentialHasher;
use hr_backend::outbound::memory::InMemoryEntityStore;
use hr_backend::outbound::persistence::{
    DbPool, DieselAttendanceRepository, DieselEmployeeRepository, DieselLeaveRepository,
    DieselManagerRepository, DieselReviewRepository, DieselTaskRepository, DieselTeamRepository,
    DieselTodoRepository, DieselWorkReportRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    Repositories {
        employees: Arc::new(DieselEmployeeRepository::new(pool.clone())),
        managers: Arc::new(DieselManagerRepository::new(pool.clone())),
        teams: Arc::new(DieselTeamRepository::new(pool.clone())),
        tasks: Arc::new(DieselTaskRepository::new(pool.clone())),
        leaves: Arc::new(DieselLeaveRepository::new(pool.clone())),
        work_reports: Arc::new(DieselWorkReportRepository::new(pool.clone())),
        reviews: Arc::new(DieselReviewRepository::new(pool.clone())),
        attendance: Arc::new(DieselAttendanceRepository::new(pool.clone())),
        todos: Arc::new(DieselTodoRepository::new(pool.clone())),
    }
    .into_http_state(
        Arc::new(Argon2CredentialHasher::new()),
        Arc::new(DefaultClock),
    )
}

fn memory_state() -> HttpState {
    Repositories::shared(Arc::new(InMemoryEntityStore::new())).into_http_state(
        Arc::new(Argon2CredentialHasher::new()),
        Arc::new(DefaultClock),
    )
}

/// Build the HTTP state, choosing PostgreSQL adapters when a pool is
/// configured and the in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "entity store selected");
            diesel_state(pool)
        }
        None => {
            info!(store = "memory", "entity store selected");
            memory_state()
        }
    };
    web::Data::new(state)
}
