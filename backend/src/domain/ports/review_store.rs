//! Driving port for customer reviews.
//!
//! Updates, deletes, and like toggles addressed at an unknown id are silent
//! no-ops rather than errors.

use async_trait::async_trait;

use crate::domain::{NewReview, Review, ReviewId, ReviewPatch, UserId};

use super::StoreError;

/// Port for listing and curating reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Reviews, newest first.
    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError>;

    /// Store a new review at the front of the list.
    ///
    /// The store assigns the id and creation date and starts with no likes.
    async fn add_review(&self, fields: NewReview) -> Result<Review, StoreError>;

    /// Merge `patch` into the review with `id`.
    async fn update_review(&self, id: &ReviewId, patch: ReviewPatch) -> Result<(), StoreError>;

    /// Remove the review with `id`.
    async fn delete_review(&self, id: &ReviewId) -> Result<(), StoreError>;

    /// Add `user` to the review's likers, or remove them if already present.
    ///
    /// The liker set and upvote count change together as one transition.
    async fn toggle_like(&self, id: &ReviewId, user: &UserId) -> Result<(), StoreError>;
}
