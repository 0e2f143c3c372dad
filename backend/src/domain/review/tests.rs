//! Tests for review like-state and update semantics.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

#[fixture]
fn created_at() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

#[fixture]
fn review(created_at: NaiveDate) -> Review {
    let fields = NewReview {
        user_id: user("9"),
        user_name: "X".to_owned(),
        rating: 5,
        comment: "great".to_owned(),
    };
    Review::new(ReviewId::new("r-1").expect("valid review id"), fields, created_at)
}

#[rstest]
fn new_review_starts_without_likes(review: Review) {
    assert_eq!(review.upvotes(), 0);
    assert_eq!(review.liked_by().len(), 0);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(8)]
fn repeated_toggles_alternate_and_keep_count_consistent(mut review: Review, #[case] calls: usize) {
    let liker = user("9");
    for call in 1..=calls {
        let liked = review.toggle_like(&liker);
        assert_eq!(liked, call % 2 == 1, "call {call}");
        assert_eq!(review.is_liked_by(&liker), liked);
        assert_eq!(review.upvotes() as usize, review.liked_by().len());
    }
}

#[rstest]
fn distinct_users_accumulate(mut review: Review) {
    for raw in ["1", "2", "3"] {
        review.toggle_like(&user(raw));
    }
    review.toggle_like(&user("2"));

    let likers: Vec<&str> = review.liked_by().map(AsRef::as_ref).collect();
    assert_eq!(likers, vec!["1", "3"]);
    assert_eq!(review.upvotes(), 2);
}

#[rstest]
fn restore_collapses_duplicate_likers(created_at: NaiveDate) {
    let fields = NewReview {
        user_id: user("4"),
        user_name: "Y".to_owned(),
        rating: 4,
        comment: "fine".to_owned(),
    };
    let review = Review::restore(
        ReviewId::random(),
        fields,
        created_at,
        [user("1"), user("1"), user("2")],
    );
    assert_eq!(review.upvotes(), 2);
}

#[rstest]
fn apply_merges_only_present_fields(mut review: Review) {
    review.apply(ReviewPatch {
        comment: Some("even better".to_owned()),
        ..ReviewPatch::default()
    });

    assert_eq!(review.comment(), "even better");
    assert_eq!(review.rating(), 5);
    assert_eq!(review.user_name(), "X");
}

#[rstest]
fn empty_patch_is_detected() {
    assert!(ReviewPatch::default().is_empty());
    assert!(
        !ReviewPatch {
            rating: Some(3),
            ..ReviewPatch::default()
        }
        .is_empty()
    );
}

#[rstest]
fn serialises_upvotes_alongside_likers(mut review: Review) {
    review.toggle_like(&user("9"));
    let value = serde_json::to_value(&review).expect("serialise review");

    assert_eq!(
        value,
        json!({
            "id": "r-1",
            "userId": "9",
            "userName": "X",
            "rating": 5,
            "comment": "great",
            "createdAt": "2024-05-01",
            "upvotes": 1,
            "likedBy": ["9"],
        })
    );
}

#[rstest]
fn decoding_recomputes_upvotes_from_likers() {
    let payload = json!({
        "id": "r-2",
        "userId": "9",
        "userName": "X",
        "rating": 5,
        "comment": "great",
        "createdAt": "2024-05-01",
        "upvotes": 40,
        "likedBy": ["1", "2"],
    });
    let review: Review = serde_json::from_value(payload).expect("decode review");
    assert_eq!(review.upvotes(), 2);
}
