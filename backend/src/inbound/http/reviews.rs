//! Review API handlers.
//!
//! ```text
//! GET /api/v1/reviews
//! POST /api/v1/reviews {"userId":"9","userName":"X","rating":5,"comment":"great"}
//! PATCH /api/v1/reviews/{id} {"rating":4}
//! DELETE /api/v1/reviews/{id}
//! POST /api/v1/reviews/{id}/like {"userId":"9"}
//! ```
//!
//! Updates, deletes, and likes on an unknown id succeed without effect.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewReview, Review, ReviewId, ReviewPatch, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::schemas::ReviewSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_patch_error, parse_id, require_rating, require_text,
};

const USER_ID: FieldName = FieldName::new("userId");
const USER_NAME: FieldName = FieldName::new("userName");
const RATING: FieldName = FieldName::new("rating");

/// Request body for `POST /api/v1/reviews`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[schema(example = "9")]
    pub user_id: String,
    #[schema(example = "Kofi Mensah")]
    pub user_name: String,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

impl TryFrom<ReviewRequest> for NewReview {
    type Error = Error;

    fn try_from(value: ReviewRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: parse_id(value.user_id, USER_ID)?,
            user_name: require_text(value.user_name, USER_NAME)?,
            rating: require_rating(value.rating, RATING)?,
            comment: value.comment,
        })
    }
}

/// Request body for `PATCH /api/v1/reviews/{id}`. Absent fields are kept.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 5)]
    pub rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TryFrom<ReviewPatchRequest> for ReviewPatch {
    type Error = Error;

    fn try_from(value: ReviewPatchRequest) -> Result<Self, Self::Error> {
        let patch = Self {
            user_name: value
                .user_name
                .map(|name| require_text(name, USER_NAME))
                .transpose()?,
            rating: value
                .rating
                .map(|rating| require_rating(rating, RATING))
                .transpose()?,
            comment: value.comment,
        };
        if patch.is_empty() {
            return Err(empty_patch_error());
        }
        Ok(patch)
    }
}

/// Request body for `POST /api/v1/reviews/{id}/like`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[schema(example = "9")]
    pub user_id: String,
}

fn review_id(raw: String) -> Result<ReviewId, Error> {
    parse_id(raw, FieldName::new("id"))
}

/// List reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    responses(
        (status = 200, description = "Reviews, newest first", body = [ReviewSchema]),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["reviews"],
    operation_id = "listReviews"
)]
#[get("/reviews")]
pub async fn list_reviews(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Review>>> {
    let reviews = state
        .registry()
        .reviews()?
        .list_reviews()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(reviews))
}

/// Post a review. It starts with no likes and is listed first.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Stored review", body = ReviewSchema),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["reviews"],
    operation_id = "addReview"
)]
#[post("/reviews")]
pub async fn add_review(
    state: web::Data<HttpState>,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    let fields = NewReview::try_from(payload.into_inner())?;
    let review = state
        .registry()
        .reviews()?
        .add_review(fields)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(review))
}

/// Merge the supplied fields into a review.
#[utoipa::path(
    patch,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = ReviewPatchRequest,
    responses(
        (status = 204, description = "Update applied, or id unknown"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["reviews"],
    operation_id = "updateReview"
)]
#[patch("/reviews/{id}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ReviewPatchRequest>,
) -> ApiResult<HttpResponse> {
    let id = review_id(path.into_inner())?;
    let patch = ReviewPatch::try_from(payload.into_inner())?;
    state
        .registry()
        .reviews()?
        .update_review(&id, patch)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove a review.
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 204, description = "Review removed, or id unknown"),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview"
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = review_id(path.into_inner())?;
    state
        .registry()
        .reviews()?
        .delete_review(&id)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Flip a user's like on a review.
#[utoipa::path(
    post,
    path = "/api/v1/reviews/{id}/like",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = LikeRequest,
    responses(
        (status = 204, description = "Like toggled, or id unknown"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["reviews"],
    operation_id = "toggleReviewLike"
)]
#[post("/reviews/{id}/like")]
pub async fn toggle_like(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<LikeRequest>,
) -> ApiResult<HttpResponse> {
    let id = review_id(path.into_inner())?;
    let user: UserId = parse_id(payload.into_inner().user_id, USER_ID)?;
    state
        .registry()
        .reviews()?
        .toggle_like(&id, &user)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}
