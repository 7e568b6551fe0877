//! Performance reviews and per-employee rollups.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::revision::INITIAL_REVISION;
use crate::domain::{ContactCard, EmployeeId, ReviewId};

/// Fields a manager supplies when reviewing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    /// Reviewed employee.
    pub employee_id: EmployeeId,
    /// Narrative feedback.
    pub review_text: String,
    /// Score; no range is imposed.
    pub rating: f64,
    /// Tasks finished in the review period.
    pub tasks_completed: u32,
}

/// Later amendment replacing exactly these three fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAmendment {
    /// Replacement task count.
    pub tasks_completed: u32,
    /// Replacement average rating.
    pub average_rating: f64,
    /// Replacement remarks.
    pub remarks: String,
}

/// Manager-authored review of one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Identifier.
    pub id: ReviewId,
    /// Reviewed employee.
    pub employee_id: EmployeeId,
    /// Narrative feedback.
    pub review_text: String,
    /// Score.
    pub rating: f64,
    /// Tasks finished in the review period.
    pub tasks_completed: u32,
    /// Average rating set by an amendment.
    pub average_rating: Option<f64>,
    /// Remarks set by an amendment.
    pub remarks: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last amendment time.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub revision: u32,
}

impl Review {
    /// Create a review from a draft.
    #[must_use]
    pub fn create(draft: ReviewDraft, now: DateTime<Utc>) -> Self {
        let ReviewDraft {
            employee_id,
            review_text,
            rating,
            tasks_completed,
        } = draft;
        Self {
            id: ReviewId::random(),
            employee_id,
            review_text,
            rating,
            tasks_completed,
            average_rating: None,
            remarks: None,
            created_at: now,
            updated_at: now,
            revision: INITIAL_REVISION,
        }
    }

    /// Copy with the amendment applied and the next revision.
    #[must_use]
    pub fn amended(&self, amendment: ReviewAmendment, now: DateTime<Utc>) -> Self {
        Self {
            tasks_completed: amendment.tasks_completed,
            average_rating: Some(amendment.average_rating),
            remarks: Some(amendment.remarks),
            updated_at: now,
            revision: self.revision + 1,
            ..self.clone()
        }
    }
}

/// Order reviews newest first.
pub fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Aggregate of every review held for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRollup {
    /// Reviewed employee.
    pub employee_id: EmployeeId,
    /// Name, when the employee still resolves.
    pub employee_name: Option<String>,
    /// Email, when the employee still resolves.
    pub employee_email: Option<String>,
    /// Number of reviews.
    pub review_count: u32,
    /// Mean of the `rating` values.
    pub average_rating: f64,
    /// Sum of `tasks_completed`.
    pub tasks_completed: u64,
}

impl ReviewRollup {
    /// Attach directory data.
    #[must_use]
    pub fn with_contact(mut self, contact: Option<ContactCard>) -> Self {
        if let Some(card) = contact {
            self.employee_name = Some(card.name);
            self.employee_email = Some(card.email);
        }
        self
    }
}

/// Group reviews per employee, keeping first-appearance order.
pub fn roll_up(reviews: &[Review]) -> Vec<ReviewRollup> {
    let mut order: Vec<EmployeeId> = Vec::new();
    let mut totals: HashMap<EmployeeId, (u32, f64, u64)> = HashMap::new();
    for review in reviews {
        let entry = totals.entry(review.employee_id).or_insert_with(|| {
            order.push(review.employee_id);
            (0, 0.0, 0)
        });
        entry.0 += 1;
        entry.1 += review.rating;
        entry.2 += u64::from(review.tasks_completed);
    }

    order
        .into_iter()
        .filter_map(|employee_id| {
            totals
                .get(&employee_id)
                .map(|&(count, rating_sum, tasks)| ReviewRollup {
                    employee_id,
                    employee_name: None,
                    employee_email: None,
                    review_count: count,
                    average_rating: rating_sum / f64::from(count),
                    tasks_completed: tasks,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn review(employee_id: EmployeeId, rating: f64, tasks: u32, age_hours: i64) -> Review {
        Review::create(
            ReviewDraft {
                employee_id,
                review_text: "solid".to_owned(),
                rating,
                tasks_completed: tasks,
            },
            Utc::now() - Duration::hours(age_hours),
        )
    }

    #[test]
    fn amendment_replaces_three_fields() {
        let original = review(EmployeeId::random(), 4.0, 3, 0);
        let amended = original.amended(
            ReviewAmendment {
                tasks_completed: 7,
                average_rating: 4.5,
                remarks: "improving".to_owned(),
            },
            Utc::now(),
        );
        assert_eq!(amended.tasks_completed, 7);
        assert_eq!(amended.average_rating, Some(4.5));
        assert_eq!(amended.remarks.as_deref(), Some("improving"));
        assert_eq!(amended.review_text, "solid");
        assert_eq!(amended.rating, 4.0);
        assert_eq!(amended.revision, original.revision + 1);
    }

    #[test]
    fn rolls_up_per_employee() {
        let ana = EmployeeId::random();
        let ben = EmployeeId::random();
        let reviews = vec![
            review(ana, 4.0, 2, 3),
            review(ben, 3.0, 1, 2),
            review(ana, 5.0, 4, 1),
        ];
        let rollups = roll_up(&reviews);

        assert_eq!(rollups.len(), 2);
        let first = rollups.first().expect("ana rollup");
        assert_eq!(first.employee_id, ana);
        assert_eq!(first.review_count, 2);
        assert!((first.average_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(first.tasks_completed, 6);
    }

    #[test]
    fn sorts_newest_first() {
        let id = EmployeeId::random();
        let mut reviews = vec![review(id, 1.0, 0, 5), review(id, 2.0, 0, 1)];
        sort_newest_first(&mut reviews);
        assert_eq!(reviews.first().map(|r| r.rating), Some(2.0));
    }
}
