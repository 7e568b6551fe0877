//! Shared helpers and macros for Diesel repository implementations.
//!
//! This module provides common utilities for database access including:
//! - Error mapping from Diesel errors to [`EntityStoreError`]
//! - Casting between database integers and domain counters
//! - Traits and helpers for optimistic concurrency control
//! - Declarative macros for common query patterns

use tracing::debug;

use crate::domain::ports::EntityStoreError;

use super::pool::PoolError;

/// Map pool errors to entity store connection errors.
pub fn map_pool_error(error: PoolError) -> EntityStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EntityStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to entity store errors.
///
/// Unique violations become [`EntityStoreError::DuplicateKey`] carrying the
/// constraint name so callers can tell which key collided.
pub fn map_diesel_error(error: diesel::result::Error) -> EntityStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EntityStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => EntityStoreError::query("database query error"),
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::UniqueViolation => EntityStoreError::duplicate_key(
                info.constraint_name().unwrap_or("unique constraint"),
            ),
            DatabaseErrorKind::ClosedConnection => {
                EntityStoreError::connection("database connection error")
            }
            _ => EntityStoreError::query("database error"),
        },
        _ => EntityStoreError::query("database error"),
    }
}

/// Cast database revision (i32) to domain revision (u32).
///
/// Revisions are always non-negative in practice, enforced by a check
/// constraint.
#[expect(
    clippy::cast_sign_loss,
    reason = "revision is always non-negative in database"
)]
pub fn cast_revision(revision: i32) -> u32 {
    revision as u32
}

/// Cast domain revision (u32) to database revision (i32).
#[expect(
    clippy::cast_possible_wrap,
    reason = "revision values are always small positive integers"
)]
pub fn cast_revision_for_db(revision: u32) -> i32 {
    revision as i32
}

/// Cast a stored non-negative count (i32) to the domain type.
pub fn cast_count(count: i32) -> Result<u32, String> {
    u32::try_from(count).map_err(|_| format!("negative count in database: {count}"))
}

/// Cast a domain count to its column type.
pub fn cast_count_for_db(count: u32) -> Result<i32, EntityStoreError> {
    i32::try_from(count).map_err(|_| EntityStoreError::query("count exceeds column range"))
}

/// Trait for database rows that have a revision field.
pub trait HasRevision {
    /// Get the revision as a u32.
    fn revision(&self) -> u32;
}

/// Result of an optimistic update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// Update succeeded (one or more rows affected).
    Success,
    /// Update affected zero rows (revision mismatch or record not found).
    ZeroRows,
}

/// Check if an update affected any rows.
pub fn execute_optimistic_update(updated_rows: usize) -> UpdateResult {
    if updated_rows == 0 {
        UpdateResult::ZeroRows
    } else {
        UpdateResult::Success
    }
}

/// Disambiguate a zero-row conditional update.
///
/// A record that still exists has moved on to another revision; a record
/// that does not exist is reported as [`EntityStoreError::Missing`].
pub fn disambiguate_update_failure<R>(
    current_result: Result<Option<R>, EntityStoreError>,
    expected_revision: u32,
    entity: &str,
) -> EntityStoreError
where
    R: HasRevision,
{
    match current_result {
        Ok(Some(record)) => {
            EntityStoreError::revision_mismatch(expected_revision, record.revision())
        }
        Ok(None) => EntityStoreError::missing(entity),
        Err(e) => e,
    }
}

/// Collect row conversion results, mapping the first error to a query error.
pub fn collect_rows<T>(
    results: impl Iterator<Item = Result<T, String>>,
) -> Result<Vec<T>, EntityStoreError> {
    results
        .collect::<Result<Vec<_>, _>>()
        .map_err(EntityStoreError::query)
}

/// Macro for query methods that return `Option<T>`.
///
/// Acquires a connection, runs the filtered query and converts the row with
/// a fallible `Row -> Result<T, String>` converter.
#[macro_export]
macro_rules! query_optional {
    (
        $self:ident,
        $table:expr,
        $filter:expr,
        $row_type:ty,
        $converter:expr
    ) => {{
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::domain::ports::EntityStoreError;
        use $crate::outbound::persistence::diesel_helpers::map_diesel_error;
        use $crate::outbound::persistence::diesel_helpers::map_pool_error;

        let mut conn = $self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<$row_type> = $table
            .filter($filter)
            .select(<$row_type>::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        result
            .map($converter)
            .transpose()
            .map_err(EntityStoreError::query)
    }};
}

/// Macro for query methods that return `Vec<T>`.
///
/// Acquires a connection, runs the filtered and ordered query and converts
/// every row, failing on the first conversion error.
#[macro_export]
macro_rules! query_vec {
    (
        $self:ident,
        $table:expr,
        $filter:expr,
        $order_by:expr,
        $row_type:ty,
        $converter:expr
    ) => {{
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::outbound::persistence::diesel_helpers::collect_rows;
        use $crate::outbound::persistence::diesel_helpers::map_diesel_error;
        use $crate::outbound::persistence::diesel_helpers::map_pool_error;

        let mut conn = $self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<$row_type> = $table
            .filter($filter)
            .select(<$row_type>::as_select())
            .order_by($order_by)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows.into_iter().map($converter))
    }};
}

/// Macro for querying from an existing connection and disambiguating update
/// failures.
#[macro_export]
macro_rules! query_and_disambiguate {
    (
        $conn:expr,
        $table:expr,
        $filter:expr,
        $row_type:ty,
        $expected_revision:expr,
        $entity:expr
    ) => {{
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::outbound::persistence::diesel_helpers::disambiguate_update_failure;
        use $crate::outbound::persistence::diesel_helpers::map_diesel_error;

        let current_result = $table
            .filter($filter)
            .select(<$row_type>::as_select())
            .first($conn)
            .await
            .optional()
            .map_err(map_diesel_error);

        disambiguate_update_failure(current_result, $expected_revision, $entity)
    }};
}

/// Macro for save operations with optimistic concurrency control.
///
/// Inserts when the expected revision is `None`; otherwise updates the row
/// only while its revision still matches and disambiguates zero-row updates.
#[macro_export]
macro_rules! save_with_revision {
    (
        $self:ident,
        $expected_revision:expr,
        insert: { $($insert_body:tt)* },
        update($expected:ident): { $($update_body:tt)* }
    ) => {{
        use $crate::outbound::persistence::diesel_helpers::map_pool_error;

        let mut conn = $self.pool.get().await.map_err(map_pool_error)?;

        match $expected_revision {
            None => {
                save_with_revision!(@insert conn, { $($insert_body)* })
            }
            Some($expected) => {
                save_with_revision!(@update conn, $expected, { $($update_body)* })
            }
        }
    }};

    (@insert $conn:ident, {
        table: $table:expr,
        new_row: $new_row:expr
    }) => {{
        // `#[expect]` misfires on glob imports expanded from macros when the
        // call site already imports the prelude.
        #[allow(unused_imports, reason = "prelude may be imported at call site")]
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::outbound::persistence::diesel_helpers::map_diesel_error;

        diesel::insert_into($table)
            .values(&$new_row)
            .execute(&mut $conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }};

    (@update $conn:ident, $expected:ident, {
        table: $table:expr,
        filter: $filter:expr,
        changeset: $changeset:expr,
        on_zero_rows: $handler:expr
    }) => {{
        #[allow(unused_imports, reason = "prelude may be imported at call site")]
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::outbound::persistence::diesel_helpers::map_diesel_error;
        use $crate::outbound::persistence::diesel_helpers::execute_optimistic_update;
        use $crate::outbound::persistence::diesel_helpers::UpdateResult;

        let changeset = $changeset;
        let updated_rows = diesel::update($table)
            .filter($filter)
            .set(&changeset)
            .execute(&mut $conn)
            .await
            .map_err(map_diesel_error)?;

        match execute_optimistic_update(updated_rows) {
            UpdateResult::ZeroRows => Err($handler(&mut $conn, $expected).await),
            UpdateResult::Success => Ok(()),
        }
    }};
}
