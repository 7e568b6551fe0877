//! Strongly typed record identifiers.
//!
//! Each entity gets its own UUID newtype so a leave id can never be passed
//! where a task id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raised when an identifier string is not a valid UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    kind: &'static str,
    value: String,
}

impl IdParseError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be a valid UUID, got {:?}", self.kind, self.value)
    }
}

impl std::error::Error for IdParseError {}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Parse an identifier from its hyphenated UUID form.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdParseError> {
                let raw = raw.as_ref();
                Uuid::parse_str(raw.trim()).map(Self).map_err(|_| IdParseError {
                    kind: stringify!($name),
                    value: raw.to_owned(),
                })
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_entity_id!(
    /// Identifier of an [`crate::domain::Employee`].
    EmployeeId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::Manager`].
    ManagerId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::Task`].
    TaskId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::LeaveRequest`].
    LeaveId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::WorkReport`].
    ReportId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::Review`].
    ReviewId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::Todo`].
    TodoId
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_and_displays_uuid() {
        let id = TaskId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("3fa85f64")]
    fn rejects_malformed_input(#[case] raw: &str) {
        let err = LeaveId::new(raw).expect_err("malformed id");
        assert_eq!(err.value(), raw);
        assert!(err.to_string().contains("LeaveId"));
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let id = ReviewId::from_uuid(Uuid::nil());
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::json!("00000000-0000-0000-0000-000000000000"));
    }
}
