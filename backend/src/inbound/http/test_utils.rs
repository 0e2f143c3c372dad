//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::{test as actix_test, web};
use serde_json::Value;

use crate::domain::{StoreRegistry, Stores};
use crate::inbound::http::state::HttpState;
use crate::test_support::{FixedClock, installed_registry};

/// Handler state over freshly built in-memory stores.
///
/// The clock is frozen at 2024-05-01 so created review dates are stable.
pub fn memory_state(seed_mock_data: bool) -> web::Data<HttpState> {
    let clock = Arc::new(FixedClock::at_date(2024, 5, 1));
    web::Data::new(HttpState::new(installed_registry(clock, seed_mock_data)))
}

/// Handler state over caller-supplied stores, typically mocks.
pub fn state_with(stores: Stores) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(StoreRegistry::with_stores(stores))))
}

/// Handler state whose registry has not been installed yet.
pub fn uninitialised_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(StoreRegistry::new())))
}

/// Decode a response body as JSON.
pub async fn body_json(response: ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON response body")
}

/// Top-level `code` and `details.code` of an error body.
pub fn error_codes(value: &Value) -> (Option<&str>, Option<&str>) {
    (
        value.get("code").and_then(Value::as_str),
        value
            .get("details")
            .and_then(|details| details.get("code"))
            .and_then(Value::as_str),
    )
}
