//! Monthly attendance sheets and their summary.
//!
//! Sheets are populated outside this service; here they are only read and
//! reduced. Entries whose status is neither `present` nor `absent` are kept
//! in the record list but count towards no bucket.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::EmployeeId;

/// Calendar month key in `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

/// Raised when a month key is not `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyError(String);

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month must be YYYY-MM, got {:?}", self.0)
    }
}

impl std::error::Error for MonthKeyError {}

impl MonthKey {
    /// Month containing `instant` (UTC).
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use hr_backend::domain::MonthKey;
    ///
    /// let instant = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();
    /// assert_eq!(MonthKey::containing(instant).as_str(), "2025-03");
    /// ```
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self(format!("{:04}-{:02}", instant.year(), instant.month()))
    }

    /// Key as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let first_of_month = format!("{value}-01");
        match NaiveDate::parse_from_str(&first_of_month, "%Y-%m-%d") {
            Ok(date) if value.len() == 7 => Ok(Self(format!("{:04}-{:02}", date.year(), date.month()))),
            _ => Err(MonthKeyError(value)),
        }
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status recorded for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    /// `"present"`.
    Present,
    /// `"absent"`.
    Absent,
    /// Any other recorded value, kept verbatim.
    Other(String),
}

impl AttendanceStatus {
    /// Stored string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            _ => Self::Other(value),
        }
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// One day's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Day.
    pub date: NaiveDate,
    /// Recorded status.
    pub status: AttendanceStatus,
}

/// Attendance for one employee over one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSheet {
    /// Employee.
    pub employee_id: EmployeeId,
    /// Month covered.
    pub month: MonthKey,
    /// Entries in recorded order.
    pub records: Vec<AttendanceRecord>,
}

impl AttendanceSheet {
    /// Sheet with no records, used when nothing has been recorded yet.
    #[must_use]
    pub fn empty(employee_id: EmployeeId, month: MonthKey) -> Self {
        Self {
            employee_id,
            month,
            records: Vec::new(),
        }
    }
}

/// Present/absent counts for a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub present: u32,
    /// Days marked absent.
    pub absent: u32,
    /// `present + absent`.
    pub total: u32,
}

impl AttendanceSummary {
    /// Reduce records into counts.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use hr_backend::domain::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    /// let records = [
    ///     AttendanceRecord { date: day, status: AttendanceStatus::Present },
    ///     AttendanceRecord { date: day, status: AttendanceStatus::Other("leave".into()) },
    /// ];
    /// let summary = AttendanceSummary::from_records(&records);
    /// assert_eq!((summary.present, summary.absent, summary.total), (1, 0, 1));
    /// ```
    #[must_use]
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let (present, absent) =
            records
                .iter()
                .fold((0_u32, 0_u32), |(present, absent), record| match record.status {
                    AttendanceStatus::Present => (present + 1, absent),
                    AttendanceStatus::Absent => (present, absent + 1),
                    AttendanceStatus::Other(_) => (present, absent),
                });
        Self {
            present,
            absent,
            total: present + absent,
        }
    }
}
