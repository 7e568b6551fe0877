//! Translation of Entity Store failures into domain errors.

use crate::domain::Error;
use crate::domain::ports::EntityStoreError;
use crate::domain::revision::revision_conflict;

/// Map a store failure onto the domain error taxonomy.
///
/// Connection failures become `service_unavailable`, duplicate keys become
/// `conflict`, lost revision races become `conflict` with revision details,
/// and a record vanishing mid-update becomes `not_found`.
pub(crate) fn map_store_error(error: EntityStoreError) -> Error {
    match error {
        EntityStoreError::Connection { message } => {
            Error::service_unavailable(format!("entity store unavailable: {message}"))
        }
        EntityStoreError::Query { message } => {
            Error::internal(format!("entity store error: {message}"))
        }
        EntityStoreError::DuplicateKey { message } => Error::conflict(message),
        EntityStoreError::RevisionMismatch { expected, actual } => {
            revision_conflict(Some(expected), actual)
        }
        EntityStoreError::Missing { entity } => Error::not_found(format!("{entity} not found")),
    }
}
