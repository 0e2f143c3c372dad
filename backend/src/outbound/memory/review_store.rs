//! Newest-first list of reviews.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use super::{read_state, write_state};
use crate::domain::ports::{ReviewStore, StoreError};
use crate::domain::{NewReview, Review, ReviewId, ReviewPatch, UserId};

const STORE: &str = "reviews";

/// Review list ordered newest first.
///
/// Creation dates come from the injected clock, truncated to the UTC date.
pub struct InMemoryReviewStore {
    clock: Arc<dyn Clock>,
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryReviewStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_reviews(clock, Vec::new())
    }

    /// Start with `reviews`, which must already be newest first.
    pub fn with_reviews(clock: Arc<dyn Clock>, reviews: Vec<Review>) -> Self {
        Self {
            clock,
            reviews: RwLock::new(reviews),
        }
    }

    fn with_review<F>(&self, id: &ReviewId, operation: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Review),
    {
        let mut reviews = write_state(&self.reviews, STORE)?;
        match reviews.iter_mut().find(|review| review.id() == id) {
            Some(review) => f(review),
            None => debug!(review_id = %id, operation, "review not found; ignoring"),
        }
        Ok(())
    }
}

fn fresh_id(existing: &[Review]) -> ReviewId {
    loop {
        let candidate = ReviewId::random();
        if existing.iter().all(|review| review.id() != &candidate) {
            return candidate;
        }
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(read_state(&self.reviews, STORE)?.clone())
    }

    async fn add_review(&self, fields: NewReview) -> Result<Review, StoreError> {
        let created_at = self.clock.utc().date_naive();
        let mut reviews = write_state(&self.reviews, STORE)?;
        let review = Review::new(fresh_id(&reviews), fields, created_at);
        reviews.insert(0, review.clone());
        info!(review_id = %review.id(), user_id = %review.user_id(), "review added");
        Ok(review)
    }

    async fn update_review(&self, id: &ReviewId, patch: ReviewPatch) -> Result<(), StoreError> {
        self.with_review(id, "update", |review| review.apply(patch))
    }

    async fn delete_review(&self, id: &ReviewId) -> Result<(), StoreError> {
        let mut reviews = write_state(&self.reviews, STORE)?;
        let before = reviews.len();
        reviews.retain(|review| review.id() != id);
        if reviews.len() < before {
            info!(review_id = %id, "review deleted");
        }
        Ok(())
    }

    async fn toggle_like(&self, id: &ReviewId, user: &UserId) -> Result<(), StoreError> {
        self.with_review(id, "toggle_like", |review| {
            let liked = review.toggle_like(user);
            debug!(
                review_id = %id,
                user_id = %user,
                liked,
                upvotes = review.upvotes(),
                "review like toggled"
            );
        })
    }
}
