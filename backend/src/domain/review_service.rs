//! Performance reviews, amendments and rollups.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::directory::IdentityDirectory;
use crate::domain::ports::{
    EmployeeRepository, EnrichedReview, ReviewRepository, ReviewWorkflow, UpdateReviewRequest,
};
use crate::domain::review::{roll_up, sort_newest_first};
use crate::domain::revision::ensure_expected_revision;
use crate::domain::store_errors::map_store_error;
use crate::domain::{Error, Review, ReviewDraft, ReviewRollup};

/// Review workflow service.
pub struct ReviewService<R, E> {
    reviews: Arc<R>,
    directory: IdentityDirectory<E>,
    clock: Arc<dyn Clock>,
}

impl<R, E> ReviewService<R, E> {
    /// Create the service.
    pub fn new(reviews: Arc<R>, directory: IdentityDirectory<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reviews,
            directory,
            clock,
        }
    }
}

#[async_trait]
impl<R, E> ReviewWorkflow for ReviewService<R, E>
where
    R: ReviewRepository,
    E: EmployeeRepository,
{
    async fn submit_review(&self, draft: ReviewDraft) -> Result<Review, Error> {
        self.directory.employee(&draft.employee_id).await?;
        let review = Review::create(draft, self.clock.utc());
        self.reviews
            .save(&review, None)
            .await
            .map_err(map_store_error)?;
        info!(review_id = %review.id, employee_id = %review.employee_id, "review submitted");
        Ok(review)
    }

    async fn list_reviews(&self) -> Result<Vec<EnrichedReview>, Error> {
        let mut reviews = self.reviews.list(None).await.map_err(map_store_error)?;
        sort_newest_first(&mut reviews);
        let cards = self
            .directory
            .contact_cards(reviews.iter().map(|review| Some(review.employee_id)))
            .await;
        Ok(reviews
            .into_iter()
            .zip(cards)
            .map(|(review, card)| EnrichedReview::new(review, card))
            .collect())
    }

    async fn reviews_for_employee(&self, email: &str) -> Result<Vec<Review>, Error> {
        let employee = self.directory.employee_by_email(email).await?;
        let mut reviews = self
            .reviews
            .list(Some(employee.id))
            .await
            .map_err(map_store_error)?;
        sort_newest_first(&mut reviews);
        Ok(reviews)
    }

    async fn update_review(&self, request: UpdateReviewRequest) -> Result<Review, Error> {
        let current = self
            .reviews
            .find_by_id(&request.review_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Review not found"))?;
        ensure_expected_revision(request.expected_revision, current.revision)?;

        let next = current.amended(request.amendment, self.clock.utc());
        self.reviews
            .save(&next, Some(current.revision))
            .await
            .map_err(map_store_error)?;
        info!(review_id = %next.id, revision = next.revision, "review amended");
        Ok(next)
    }

    async fn review_rollups(&self) -> Result<Vec<ReviewRollup>, Error> {
        let mut reviews = self.reviews.list(None).await.map_err(map_store_error)?;
        sort_newest_first(&mut reviews);
        let rollups = roll_up(&reviews);
        let cards = self
            .directory
            .contact_cards(rollups.iter().map(|rollup| Some(rollup.employee_id)))
            .await;
        Ok(rollups
            .into_iter()
            .zip(cards)
            .map(|(rollup, card)| rollup.with_contact(card))
            .collect())
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
