//! Closed status vocabularies for the workflow entities.
//!
//! Parsing ignores case and separators, so `"in progress"`, `"in_progress"`
//! and `"InProgress"` all name the same task status. Serialisation always
//! emits the canonical wire value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raised when a status string is outside the entity's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError {
    value: String,
    allowed: &'static [&'static str],
}

impl StatusParseError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Canonical values accepted by the vocabulary.
    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status must be one of {}", self.allowed.join(", "))
    }
}

impl std::error::Error for StatusParseError {}

fn normalise(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! define_status {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Canonical wire values in declaration order.
            pub const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            /// Canonical wire value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StatusParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalise(s);
                $(
                    if normalise($wire) == wanted {
                        return Ok(Self::$variant);
                    }
                )+
                Err(StatusParseError {
                    value: s.to_owned(),
                    allowed: Self::WIRE_VALUES,
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_status! {
    /// Progress of an assigned task.
    pub enum TaskStatus {
        /// Assigned, not yet started.
        #[default]
        Pending => "Pending",
        /// Work has begun.
        InProgress => "InProgress",
        /// Work is finished.
        Completed => "Completed",
    }
}

define_status! {
    /// Manager decision on a leave request.
    pub enum LeaveStatus {
        /// Awaiting a decision.
        #[default]
        Pending => "Pending",
        /// Granted.
        Approved => "Approved",
        /// Declined.
        Rejected => "Rejected",
    }
}

define_status! {
    /// Manager decision on a work report.
    pub enum ReportStatus {
        /// Awaiting review.
        #[default]
        Pending => "Pending",
        /// Accepted.
        Approved => "Approved",
        /// Sent back.
        Rejected => "Rejected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pending", TaskStatus::Pending)]
    #[case("In Progress", TaskStatus::InProgress)]
    #[case("in_progress", TaskStatus::InProgress)]
    #[case("COMPLETED", TaskStatus::Completed)]
    fn parses_task_status_loosely(#[case] raw: &str, #[case] expected: TaskStatus) {
        assert_eq!(raw.parse::<TaskStatus>(), Ok(expected));
    }

    #[rstest]
    fn rejects_values_outside_vocabulary() {
        let err = "Archived".parse::<LeaveStatus>().expect_err("unknown status");
        assert_eq!(err.value(), "Archived");
        assert_eq!(err.allowed(), &["Pending", "Approved", "Rejected"]);
    }

    #[rstest]
    fn defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }

    #[rstest]
    fn serialises_canonical_wire_value() {
        let value = serde_json::to_value(TaskStatus::InProgress).expect("serialise");
        assert_eq!(value, serde_json::json!("InProgress"));
        let parsed: ReportStatus =
            serde_json::from_value(serde_json::json!("approved")).expect("deserialise");
        assert_eq!(parsed, ReportStatus::Approved);
    }
}
