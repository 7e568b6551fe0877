//! PostgreSQL-backed `ReviewRepository` with revision-checked amendments.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStoreError, ReviewRepository};
use crate::domain::{EmployeeId, Review, ReviewId};
use crate::query_and_disambiguate;
use crate::query_optional;
use crate::save_with_revision;

use super::diesel_helpers::{
    HasRevision, cast_count, cast_count_for_db, cast_revision, cast_revision_for_db,
    collect_rows, map_diesel_error, map_pool_error,
};
use super::models::{ReviewAmendmentUpdate, ReviewRow};
use super::pool::DbPool;
use super::schema::reviews;

/// Diesel-backed implementation of [`ReviewRepository`].
#[derive(Clone)]
pub struct DieselReviewRepository {
    pool: DbPool,
}

impl DieselReviewRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_review(row: ReviewRow) -> Result<Review, String> {
    Ok(Review {
        id: ReviewId::from_uuid(row.id),
        employee_id: EmployeeId::from_uuid(row.employee_id),
        review_text: row.review_text,
        rating: row.rating,
        tasks_completed: cast_count(row.tasks_completed)?,
        average_rating: row.average_rating,
        remarks: row.remarks,
        created_at: row.created_at,
        updated_at: row.updated_at,
        revision: cast_revision(row.revision),
    })
}

impl HasRevision for ReviewRow {
    fn revision(&self) -> u32 {
        cast_revision(self.revision)
    }
}

async fn handle_review_update_failure<C>(
    conn: &mut C,
    review_id: uuid::Uuid,
    expected_revision: u32,
) -> EntityStoreError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    query_and_disambiguate!(
        conn,
        reviews::table,
        reviews::id.eq(review_id),
        ReviewRow,
        expected_revision,
        "Review"
    )
}

#[async_trait]
impl ReviewRepository for DieselReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, EntityStoreError> {
        query_optional!(
            self,
            reviews::table,
            reviews::id.eq(id.as_uuid()),
            ReviewRow,
            row_to_review
        )
    }

    async fn list(&self, employee_id: Option<EmployeeId>) -> Result<Vec<Review>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = reviews::table
            .select(ReviewRow::as_select())
            .order_by(reviews::created_at.desc())
            .into_boxed();
        if let Some(id) = employee_id {
            query = query.filter(reviews::employee_id.eq(*id.as_uuid()));
        }
        let rows: Vec<ReviewRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        collect_rows(rows.into_iter().map(row_to_review))
    }

    async fn save(
        &self,
        review: &Review,
        expected_revision: Option<u32>,
    ) -> Result<(), EntityStoreError> {
        let review_id = *review.id.as_uuid();
        let tasks_completed = cast_count_for_db(review.tasks_completed)?;
        save_with_revision!(
            self,
            expected_revision,
            insert: {
                table: reviews::table,
                new_row: ReviewRow {
                    id: review_id,
                    employee_id: *review.employee_id.as_uuid(),
                    review_text: review.review_text.clone(),
                    rating: review.rating,
                    tasks_completed,
                    average_rating: review.average_rating,
                    remarks: review.remarks.clone(),
                    created_at: review.created_at,
                    updated_at: review.updated_at,
                    revision: cast_revision_for_db(review.revision),
                }
            },
            update(expected): {
                table: reviews::table,
                filter: reviews::id
                    .eq(review_id)
                    .and(reviews::revision.eq(cast_revision_for_db(expected))),
                changeset: ReviewAmendmentUpdate {
                    tasks_completed,
                    average_rating: review.average_rating,
                    remarks: review.remarks.as_deref(),
                    updated_at: review.updated_at,
                    revision: cast_revision_for_db(review.revision),
                },
                on_zero_rows: |conn, expected| handle_review_update_failure(conn, review_id, expected)
            }
        )
    }
}
