//! Shared fixtures for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{Employee, EmployeeId, PasswordHash};

/// Instant every fixture clock reports.
pub(crate) fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Clock frozen at [`fixture_now`].
pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_now(),
    })
}

/// Calendar date in January 2025.
pub(crate) fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date")
}

/// Employee whose email is derived from the name.
pub(crate) fn employee_named(name: &str) -> Employee {
    Employee {
        id: EmployeeId::random(),
        name: name.to_owned(),
        email: format!("{}@corp.test", name.to_lowercase()),
        password_hash: PasswordHash::new("$argon2id$fixture"),
        phone: None,
        address: None,
        department: None,
        created_at: fixture_now(),
    }
}
