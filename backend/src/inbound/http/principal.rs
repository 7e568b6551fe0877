//! Verified caller identity supplied by the authentication gateway.
//!
//! The gateway in front of this service authenticates the caller and
//! forwards the verified claims as request headers. Handlers take a
//! [`Principal`] and gate on it; client-supplied body fields never decide
//! the caller's role.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, Role};

/// Header carrying the verified role (`Employee` or `Manager`).
pub const ROLE_HEADER: &str = "x-authenticated-role";
/// Header carrying the verified login email.
pub const EMAIL_HEADER: &str = "x-authenticated-email";

/// Verified caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    role: Role,
    email: String,
}

impl Principal {
    /// Build a principal from verified claims.
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: email.into(),
        }
    }

    /// Verified role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Verified email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Require the manager role.
    pub fn require_manager(&self) -> Result<(), Error> {
        match self.role {
            Role::Manager => Ok(()),
            Role::Employee => Err(Error::forbidden("Manager role required")),
        }
    }

    /// Require the employee role acting on their own records.
    ///
    /// `email` is the address named in the request body. It must match the
    /// verified email byte for byte, as stores key records on the exact
    /// address.
    pub fn require_employee(&self, email: &str) -> Result<(), Error> {
        if self.role != Role::Employee {
            return Err(Error::forbidden("Employee role required"));
        }
        if self.email != email {
            return Err(Error::forbidden(
                "Employees may only act on their own records",
            ));
        }
        Ok(())
    }

    fn from_headers(req: &HttpRequest) -> Result<Self, Error> {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };
        let (Some(role), Some(email)) = (header(ROLE_HEADER), header(EMAIL_HEADER)) else {
            return Err(Error::unauthorized("Authentication required"));
        };
        let role = role
            .parse::<Role>()
            .map_err(|_| Error::forbidden(format!("Unrecognised role: {role}")))?;
        Ok(Self::new(role, email))
    }
}

impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req))
    }
}
