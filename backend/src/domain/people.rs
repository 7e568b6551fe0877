//! Employee and manager records plus the denormalised contact card used for
//! enrichment.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{EmployeeId, ManagerId, PasswordHash, Role};

/// Registered employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Login email, unique among employees.
    pub email: String,
    /// Hashed password.
    pub password_hash: PasswordHash,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Profile view without credential material.
    #[must_use]
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            department: self.department.clone(),
        }
    }

    /// Name and email for enrichment.
    #[must_use]
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Apply the provided profile fields, leaving absent ones untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            phone,
            address,
            department,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        if let Some(department) = department {
            self.department = Some(department);
        }
    }
}

/// Registered manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    /// Identifier.
    pub id: ManagerId,
    /// Display name.
    pub name: String,
    /// Login email, unique among managers.
    pub email: String,
    /// Hashed password.
    pub password_hash: PasswordHash,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Public profile of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// Identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Department name.
    pub department: Option<String>,
}

/// Partial profile edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New postal address.
    pub address: Option<String>,
    /// New department.
    pub department: Option<String>,
}

/// Denormalised display data attached to workflow listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
}

/// Identity resolved by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// Record identifier in the role's table.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role table the record lives in.
    pub role: Role,
}
