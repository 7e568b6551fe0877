//! Authentication primitives: roles, login credentials and registrations.
//!
//! Inbound adapters build these through validating constructors before
//! talking to the accounts service, so the service never sees blank emails
//! or passwords.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Role carried by a verified identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Staff member who receives tasks and files requests.
    Employee,
    /// Staff member who assigns work and decides on requests.
    Manager,
}

impl Role {
    /// Wire value (`"Employee"` / `"Manager"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = CredentialValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Employee" => Ok(Self::Employee),
            "Manager" => Ok(Self::Manager),
            _ => Err(CredentialValidationError::UnknownRole),
        }
    }
}

/// Validation failures for login and registration payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// Role string is not `Employee` or `Manager`.
    UnknownRole,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::UnknownRole => write!(f, "role must be Employee or Manager"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty; whitespace is kept as typed.
///
/// # Examples
/// ```
/// use hr_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ana@corp.test ", "s3cret").unwrap();
/// assert_eq!(creds.email(), "ana@corp.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the directory lookup.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plaintext password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Optional contact fields collected at employee registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Department name.
    pub department: Option<String>,
}

/// Validated registration request for either role table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    credentials: LoginCredentials,
    role: Role,
    contact: ContactDetails,
}

impl Registration {
    /// Construct a registration, rejecting blank names and credentials.
    pub fn try_new(
        name: &str,
        credentials: LoginCredentials,
        role: Role,
        contact: ContactDetails,
    ) -> Result<Self, CredentialValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CredentialValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            credentials,
            role,
            contact,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login credentials to hash and store.
    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    /// Role claimed by the registration payload.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Optional contact fields (employees only).
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}

/// Stored password hash in PHC string form.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a credential hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded PHC string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
