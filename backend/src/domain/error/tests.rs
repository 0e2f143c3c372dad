//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::internal("boom").try_with_trace_id("  ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn new_leaves_trace_id_empty_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::not_found("missing") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn store_not_initialized_names_the_store() {
    let error = Error::store_not_initialized("reviews");

    assert_eq!(error.code(), ErrorCode::StoreNotInitialized);
    assert_eq!(error.message(), "reviews store is not initialised");
    assert_eq!(error.details(), Some(&json!({ "store": "reviews" })));
}

#[rstest]
fn serialises_with_snake_case_code_and_camel_case_fields(expected_trace_id: String) {
    let error = Error::store_not_initialized("packages").with_trace_id(expected_trace_id);
    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(value["code"], "store_not_initialized");
    assert_eq!(value["traceId"], TRACE_ID);
    assert_eq!(value["details"]["store"], "packages");
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let payload = json!({ "code": "not_found", "message": " " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace_id(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let payload = json!({ "code": "not_found", "message": "gone" });
    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("decode error")
    })
    .await;

    assert!(error.trace_id().is_none());
}
