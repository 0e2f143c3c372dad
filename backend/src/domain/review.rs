//! Customer reviews and their like tallies.
//!
//! A review's upvote count is never stored independently: it is the size of
//! the set of users who liked the review, so the two cannot drift apart.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{IdValidationError, ReviewId, UserId};

/// Lowest accepted star rating.
pub const RATING_MIN: u8 = 1;
/// Highest accepted star rating.
pub const RATING_MAX: u8 = 5;

/// Author-supplied fields for a new review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[schema(value_type = String, example = "9")]
    pub user_id: UserId,
    #[schema(example = "Kofi Mensah")]
    pub user_name: String,
    #[schema(example = 5)]
    pub rating: u8,
    #[schema(example = "Smooth process from start to finish.")]
    pub comment: String,
}

/// Partial update for an existing review. Absent fields are left untouched.
///
/// Like state is deliberately absent; it changes only through
/// [`Review::toggle_like`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviewPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.rating.is_none() && self.comment.is_none()
    }
}

/// A stored review.
///
/// ## Invariants
/// - `upvotes() == liked_by().len()` at all times.
/// - `liked_by` holds each user at most once.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use visa_backend::domain::{NewReview, Review, ReviewId, UserId};
///
/// let fields = NewReview {
///     user_id: UserId::new("9").unwrap(),
///     user_name: "X".to_owned(),
///     rating: 5,
///     comment: "great".to_owned(),
/// };
/// let created = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let mut review = Review::new(ReviewId::random(), fields, created);
/// let liker = UserId::new("9").unwrap();
///
/// assert!(review.toggle_like(&liker));
/// assert_eq!(review.upvotes(), 1);
/// assert!(!review.toggle_like(&liker));
/// assert_eq!(review.upvotes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReviewDto", into = "ReviewDto")]
pub struct Review {
    id: ReviewId,
    user_id: UserId,
    user_name: String,
    rating: u8,
    comment: String,
    created_at: NaiveDate,
    liked_by: BTreeSet<UserId>,
}

impl Review {
    /// Build a fresh review with no likes.
    pub fn new(id: ReviewId, fields: NewReview, created_at: NaiveDate) -> Self {
        Self::restore(id, fields, created_at, [])
    }

    /// Rebuild a review with an existing set of likers, e.g. from seed data.
    /// Duplicate likers collapse to one.
    pub fn restore(
        id: ReviewId,
        fields: NewReview,
        created_at: NaiveDate,
        liked_by: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let NewReview {
            user_id,
            user_name,
            rating,
            comment,
        } = fields;
        Self {
            id,
            user_id,
            user_name,
            rating,
            comment,
            created_at,
            liked_by: liked_by.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        self.comment.as_str()
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Users who liked the review, in identifier order.
    pub fn liked_by(&self) -> impl ExactSizeIterator<Item = &UserId> {
        self.liked_by.iter()
    }

    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.liked_by.contains(user)
    }

    /// Number of likes.
    pub fn upvotes(&self) -> u32 {
        u32::try_from(self.liked_by.len()).unwrap_or(u32::MAX)
    }

    /// Merge the fields present in `patch`.
    pub fn apply(&mut self, patch: ReviewPatch) {
        let ReviewPatch {
            user_name,
            rating,
            comment,
        } = patch;
        if let Some(user_name) = user_name {
            self.user_name = user_name;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(comment) = comment {
            self.comment = comment;
        }
    }

    /// Flip `user`'s like. Returns `true` when the user now likes the review.
    pub fn toggle_like(&mut self, user: &UserId) -> bool {
        if self.liked_by.remove(user) {
            false
        } else {
            self.liked_by.insert(user.clone());
            true
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDto {
    id: String,
    user_id: String,
    user_name: String,
    rating: u8,
    comment: String,
    created_at: NaiveDate,
    // Output only; recomputed from `liked_by` on decode.
    #[serde(default)]
    upvotes: u32,
    #[serde(default)]
    liked_by: Vec<String>,
}

impl From<Review> for ReviewDto {
    fn from(value: Review) -> Self {
        let upvotes = value.upvotes();
        Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            user_name: value.user_name,
            rating: value.rating,
            comment: value.comment,
            created_at: value.created_at,
            upvotes,
            liked_by: value.liked_by.into_iter().map(String::from).collect(),
        }
    }
}

impl TryFrom<ReviewDto> for Review {
    type Error = IdValidationError;

    fn try_from(value: ReviewDto) -> Result<Self, Self::Error> {
        let liked_by = value
            .liked_by
            .into_iter()
            .map(UserId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let fields = NewReview {
            user_id: UserId::new(value.user_id)?,
            user_name: value.user_name,
            rating: value.rating,
            comment: value.comment,
        };
        Ok(Self::restore(
            ReviewId::new(value.id)?,
            fields,
            value.created_at,
            liked_by,
        ))
    }
}

#[cfg(test)]
mod tests;
