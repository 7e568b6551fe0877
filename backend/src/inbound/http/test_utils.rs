//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::test::TestRequest;
use actix_web::{App, web};
use chrono::Utc;
use mockable::DefaultClock;

use crate::domain::ports::{
    CredentialHasher, CredentialHasherError, EmployeeRepository, ManagerRepository,
};
use crate::domain::{Employee, EmployeeId, Manager, ManagerId, PasswordHash};
use crate::inbound::http::configure;
use crate::inbound::http::principal::{EMAIL_HEADER, ROLE_HEADER};
use crate::inbound::http::state::{HttpState, Repositories};
use crate::outbound::memory::InMemoryEntityStore;

/// Reversible hasher so handler tests skip Argon2's cost.
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        Ok(PasswordHash::new(format!("plain${password}")))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError> {
        Ok(hash.as_str() == format!("plain${password}"))
    }
}

/// Handler state over `store` with the wall clock.
pub fn memory_state(store: &InMemoryEntityStore) -> HttpState {
    Repositories::shared(Arc::new(store.clone()))
        .into_http_state(Arc::new(PlainHasher), Arc::new(DefaultClock))
}

/// Application with every HR endpoint mounted over `store`.
pub fn test_app(
    store: &InMemoryEntityStore,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(memory_state(store)))
        .configure(configure)
}

/// Verified-manager headers.
pub fn as_manager(email: &str) -> [(&'static str, String); 2] {
    [(ROLE_HEADER, "Manager".to_owned()), (EMAIL_HEADER, email.to_owned())]
}

/// Verified-employee headers.
pub fn as_employee(email: &str) -> [(&'static str, String); 2] {
    [(ROLE_HEADER, "Employee".to_owned()), (EMAIL_HEADER, email.to_owned())]
}

/// Attach principal headers to a request.
pub fn signed(request: TestRequest, headers: [(&'static str, String); 2]) -> TestRequest {
    headers
        .into_iter()
        .fold(request, |request, header| request.insert_header(header))
}

/// Insert an employee straight into the store.
pub async fn seed_employee(store: &InMemoryEntityStore, name: &str, email: &str) -> Employee {
    let employee = Employee {
        id: EmployeeId::random(),
        name: name.to_owned(),
        email: email.to_owned(),
        password_hash: PasswordHash::new("plain$secret"),
        phone: None,
        address: None,
        department: None,
        created_at: Utc::now(),
    };
    EmployeeRepository::insert(store, &employee)
        .await
        .expect("seed employee");
    employee
}

/// Insert a manager straight into the store.
pub async fn seed_manager(store: &InMemoryEntityStore, name: &str, email: &str) -> Manager {
    let manager = Manager {
        id: ManagerId::random(),
        name: name.to_owned(),
        email: email.to_owned(),
        password_hash: PasswordHash::new("plain$secret"),
        created_at: Utc::now(),
    };
    ManagerRepository::insert(store, &manager)
        .await
        .expect("seed manager");
    manager
}
