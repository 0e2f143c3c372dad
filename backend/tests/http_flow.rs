//! End-to-end tests driving the assembled application over HTTP.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use rstest::rstest;
use serde_json::{Value, json};
use visa_backend::domain::{StoreRegistry, TRACE_ID_HEADER};
use visa_backend::inbound::http::health::HealthState;
use visa_backend::inbound::http::state::HttpState;
use visa_backend::outbound::memory::build_stores;
use visa_backend::server::build_app;
use visa_backend::test_support::{FixedClock, installed_registry};

async fn init_app(
    registry: Arc<StoreRegistry>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(build_app(health, web::Data::new(HttpState::new(registry)))).await
}

fn seeded_registry() -> Arc<StoreRegistry> {
    installed_registry(Arc::new(FixedClock::at_date(2024, 5, 1)), true)
}

async fn json_body(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    req: Request,
) -> (StatusCode, Value) {
    let res = test::call_service(app, req).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[actix_web::test]
async fn shopper_selects_a_package_and_checks_out() {
    let app = init_app(seeded_registry()).await;

    let (status, value) =
        json_body(&app, TestRequest::get().uri("/api/v1/checkout").to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["details"]["redirect"], "/api/v1/packages");

    let (_, packages) =
        json_body(&app, TestRequest::get().uri("/api/v1/packages").to_request()).await;
    let standard = packages
        .as_array()
        .expect("packages")
        .iter()
        .find(|p| p["id"] == "standard")
        .cloned()
        .expect("standard package");

    let req = TestRequest::put()
        .uri("/api/v1/packages/selected")
        .set_json(json!({ "packageId": "standard" }))
        .to_request();
    let (status, _) = json_body(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let (status, value) =
        json_body(&app, TestRequest::get().uri("/api/v1/checkout").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, standard);
}

#[actix_web::test]
async fn review_like_round_trip_through_the_full_stack() {
    let app = init_app(seeded_registry()).await;

    let req = TestRequest::post()
        .uri("/api/v1/reviews")
        .set_json(json!({"userId": "9", "userName": "X", "rating": 5, "comment": "great"}))
        .to_request();
    let (status, created) = json_body(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_owned();

    for expected in [1, 0, 1] {
        let req = TestRequest::post()
            .uri(&format!("/api/v1/reviews/{id}/like"))
            .set_json(json!({ "userId": "9" }))
            .to_request();
        let (status, _) = json_body(&app, req).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, reviews) =
            json_body(&app, TestRequest::get().uri("/api/v1/reviews").to_request()).await;
        assert_eq!(reviews[0]["id"], id.as_str());
        assert_eq!(reviews[0]["upvotes"], expected);
    }
}

#[actix_web::test]
async fn responses_carry_trace_ids_matching_error_bodies() {
    let app = init_app(seeded_registry()).await;

    let req = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({"email": "nobody@example.com", "password": "pw"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[case(json!({"userId": "9", "userName": "X", "rating": 300}), "rating_out_of_range")]
#[case(json!({"userId": "9", "userName": "X", "rating": "five"}), "invalid_json")]
#[actix_web::test]
async fn rejected_review_bodies_use_the_error_payload(#[case] body: Value, #[case] code: &str) {
    let app = init_app(seeded_registry()).await;

    let req = TestRequest::post()
        .uri("/api/v1/reviews")
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let value: Value = test::read_body_json(res).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["details"]["code"], code);
    assert_eq!(value["traceId"], header.as_str());
}

#[rstest]
#[case("/api/v1/reviews", "reviews")]
#[case("/api/v1/applications", "applications")]
#[case("/api/v1/packages/selected", "selection")]
#[case("/api/v1/users/me", "users")]
#[actix_web::test]
async fn requests_before_install_report_store_not_initialised(
    #[case] uri: &str,
    #[case] store: &str,
) {
    let app = init_app(Arc::new(StoreRegistry::new())).await;

    let (status, value) = json_body(&app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(value["code"], "store_not_initialized");
    assert_eq!(value["details"]["store"], store);
}

#[actix_web::test]
async fn readiness_follows_store_installation() {
    let registry = Arc::new(StoreRegistry::new());
    let app = init_app(registry.clone()).await;
    let probe = || TestRequest::get().uri("/health/ready").to_request();

    assert_eq!(
        test::call_service(&app, probe()).await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );

    let stores = build_stores(Arc::new(FixedClock::at_date(2024, 5, 1)), false)
        .expect("mock fixtures are valid");
    registry.install(stores).expect("first install");

    assert_eq!(test::call_service(&app, probe()).await.status(), StatusCode::OK);
    let (status, value) =
        json_body(&app, TestRequest::get().uri("/api/v1/reviews").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!([]));
}
