//! Revision guard shared by every status transition.
//!
//! Status-bearing records start at revision 1 and gain one per accepted
//! write. Callers may pin the revision they last read; the store repeats the
//! check atomically when it applies the write.

use serde_json::json;

use crate::domain::Error;

/// Revision assigned to freshly created records.
pub const INITIAL_REVISION: u32 = 1;

/// Conflict raised when a caller or the store observes a stale revision.
pub fn revision_conflict(expected: Option<u32>, actual: u32) -> Error {
    Error::conflict("revision mismatch").with_details(json!({
        "expectedRevision": expected,
        "actualRevision": actual,
        "code": "revision_mismatch",
    }))
}

/// Reject the transition early when the caller pinned an older revision.
pub fn ensure_expected_revision(expected: Option<u32>, actual: u32) -> Result<(), Error> {
    match expected {
        Some(pinned) if pinned != actual => Err(revision_conflict(Some(pinned), actual)),
        _ => Ok(()),
    }
}
