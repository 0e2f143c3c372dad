//! OpenAPI schema definitions for domain types whose wire shape differs from
//! their Rust shape.
//!
//! [`crate::domain::Review`] serialises through a private DTO that adds the
//! derived `upvotes` count, so its schema is registered from a mirror type
//! living here in the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Review`].
#[derive(ToSchema)]
#[schema(as = Review, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    #[schema(example = "rev-3")]
    id: String,
    #[schema(example = "9")]
    user_id: String,
    #[schema(example = "Kofi Mensah")]
    user_name: String,
    /// Star rating from 1 to 5.
    #[schema(minimum = 1, maximum = 5, example = 5)]
    rating: u8,
    comment: String,
    #[schema(value_type = String, format = Date, example = "2024-04-02")]
    created_at: String,
    /// Always equal to the length of `likedBy`.
    #[schema(example = 1)]
    upvotes: u32,
    /// Users who liked the review, each at most once.
    liked_by: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[test]
    fn review_schema_exposes_camel_case_fields() {
        let RefOr::T(Schema::Object(object)) = ReviewSchema::schema() else {
            panic!("expected Object schema");
        };
        for field in ["id", "userId", "userName", "rating", "createdAt", "upvotes", "likedBy"] {
            assert!(
                object.properties.contains_key(field),
                "schema should have field '{field}'"
            );
        }
    }

    #[test]
    fn review_schema_is_named_after_the_domain_type() {
        assert_eq!(ReviewSchema::name(), "Review");
    }
}
