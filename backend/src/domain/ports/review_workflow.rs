//! Driving port for performance reviews.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    ContactCard, Error, Review, ReviewAmendment, ReviewDraft, ReviewId, ReviewRollup,
};

/// Request to amend a review.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReviewRequest {
    /// Target review.
    pub review_id: ReviewId,
    /// Replacement fields.
    pub amendment: ReviewAmendment,
    /// Revision the caller last read, when pinned.
    pub expected_revision: Option<u32>,
}

/// Review with the reviewed employee's directory data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedReview {
    /// Underlying review.
    #[serde(flatten)]
    pub review: Review,
    /// Employee name, `null` when unresolved.
    pub employee_name: Option<String>,
    /// Employee email, `null` when unresolved.
    pub employee_email: Option<String>,
}

impl EnrichedReview {
    /// Combine a review with an optional contact card.
    #[must_use]
    pub fn new(review: Review, contact: Option<ContactCard>) -> Self {
        let (employee_name, employee_email) = contact
            .map(|card| (Some(card.name), Some(card.email)))
            .unwrap_or_default();
        Self {
            review,
            employee_name,
            employee_email,
        }
    }
}

/// Review use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewWorkflow: Send + Sync {
    /// Record a review for an existing employee.
    async fn submit_review(&self, draft: ReviewDraft) -> Result<Review, Error>;

    /// Every review, newest first, with employee directory data.
    async fn list_reviews(&self) -> Result<Vec<EnrichedReview>, Error>;

    /// Reviews of the employee registered under `email`, newest first.
    async fn reviews_for_employee(&self, email: &str) -> Result<Vec<Review>, Error>;

    /// Replace the amendable fields of a review.
    async fn update_review(&self, request: UpdateReviewRequest) -> Result<Review, Error>;

    /// Per-employee aggregate over every review.
    async fn review_rollups(&self) -> Result<Vec<ReviewRollup>, Error>;
}
