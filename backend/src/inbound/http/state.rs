//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` and depend only on
//! the driving ports, so they stay testable without I/O. [`Repositories`]
//! is the single composition point turning a set of Entity Store adapters
//! into the domain services behind those ports.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AccountsCommand, AttendanceQuery, AttendanceRepository, CredentialHasher,
    EmployeeRepository, LeaveRepository, LeaveWorkflow, ManagerRepository, ReviewRepository,
    ReviewWorkflow, TaskRepository, TaskWorkflow, TeamCommand, TeamRepository, TodoCommand,
    TodoRepository, WorkReportRepository, WorkReportWorkflow,
};
use crate::domain::{
    AccountService, AttendanceService, IdentityDirectory, LeaveService, ReviewService,
    TaskService, TeamService, TodoService, WorkReportService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountsCommand>,
    pub tasks: Arc<dyn TaskWorkflow>,
    pub leaves: Arc<dyn LeaveWorkflow>,
    pub work_reports: Arc<dyn WorkReportWorkflow>,
    pub reviews: Arc<dyn ReviewWorkflow>,
    pub attendance: Arc<dyn AttendanceQuery>,
    pub team: Arc<dyn TeamCommand>,
    pub todos: Arc<dyn TodoCommand>,
}

/// One adapter per driven repository port.
pub struct Repositories<E, M, T, K, L, W, R, A, D> {
    pub employees: Arc<E>,
    pub managers: Arc<M>,
    pub teams: Arc<T>,
    pub tasks: Arc<K>,
    pub leaves: Arc<L>,
    pub work_reports: Arc<W>,
    pub reviews: Arc<R>,
    pub attendance: Arc<A>,
    pub todos: Arc<D>,
}

impl<S> Repositories<S, S, S, S, S, S, S, S, S> {
    /// Use one adapter for every port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hr_backend::inbound::http::state::Repositories;
    /// use hr_backend::outbound::memory::InMemoryEntityStore;
    ///
    /// let repos = Repositories::shared(Arc::new(InMemoryEntityStore::new()));
    /// assert!(Arc::ptr_eq(&repos.tasks, &repos.todos));
    /// ```
    pub fn shared(store: Arc<S>) -> Self {
        Self {
            employees: Arc::clone(&store),
            managers: Arc::clone(&store),
            teams: Arc::clone(&store),
            tasks: Arc::clone(&store),
            leaves: Arc::clone(&store),
            work_reports: Arc::clone(&store),
            reviews: Arc::clone(&store),
            attendance: Arc::clone(&store),
            todos: store,
        }
    }
}

impl<E, M, T, K, L, W, R, A, D> Repositories<E, M, T, K, L, W, R, A, D>
where
    E: EmployeeRepository + 'static,
    M: ManagerRepository + 'static,
    T: TeamRepository + 'static,
    K: TaskRepository + 'static,
    L: LeaveRepository + 'static,
    W: WorkReportRepository + 'static,
    R: ReviewRepository + 'static,
    A: AttendanceRepository + 'static,
    D: TodoRepository + 'static,
{
    /// Wire the domain services over these adapters.
    pub fn into_http_state(
        self,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
    ) -> HttpState {
        let Self {
            employees,
            managers,
            teams,
            tasks,
            leaves,
            work_reports,
            reviews,
            attendance,
            todos,
        } = self;
        let directory = IdentityDirectory::new(Arc::clone(&employees));

        HttpState {
            accounts: Arc::new(AccountService::new(
                employees,
                Arc::clone(&managers),
                hasher,
                Arc::clone(&clock),
            )),
            tasks: Arc::new(TaskService::new(
                Arc::clone(&tasks),
                directory.clone(),
                Arc::clone(&clock),
            )),
            leaves: Arc::new(LeaveService::new(
                leaves,
                directory.clone(),
                Arc::clone(&clock),
            )),
            work_reports: Arc::new(WorkReportService::new(work_reports, Arc::clone(&clock))),
            reviews: Arc::new(ReviewService::new(
                reviews,
                directory.clone(),
                Arc::clone(&clock),
            )),
            attendance: Arc::new(AttendanceService::new(
                attendance,
                directory.clone(),
                Arc::clone(&clock),
            )),
            team: Arc::new(TeamService::new(
                teams,
                managers,
                directory,
                tasks,
                Arc::clone(&clock),
            )),
            todos: Arc::new(TodoService::new(todos, clock)),
        }
    }
}
