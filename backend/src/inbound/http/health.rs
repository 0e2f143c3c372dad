//! Health endpoints: liveness and readiness probes for orchestration.
//!
//! Readiness requires both the server's ready flag and an installed store
//! registry, so traffic is not routed to an instance whose stores would
//! answer `store_not_initialized`.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

use crate::inbound::http::state::HttpState;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. 200 once the server is marked ready and the stores are
/// installed; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server or stores not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(
    health: web::Data<HealthState>,
    state: web::Data<HttpState>,
) -> HttpResponse {
    HealthState::probe_response(health.is_ready() && state.registry().is_initialised())
}

/// Liveness probe. 200 while the process is marked alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(health.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{memory_state, uninitialised_state};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn probe(
        health: HealthState,
        state: web::Data<HttpState>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(health))
                .app_data(state)
                .service(ready)
                .service(live),
        )
        .await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        actix_test::call_service(&app, req).await
    }

    fn ready_health() -> HealthState {
        let health = HealthState::new();
        health.mark_ready();
        health
    }

    #[rstest]
    #[case(false, true, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(true, false, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(true, true, StatusCode::OK)]
    #[actix_web::test]
    async fn readiness_needs_flag_and_stores(
        #[case] marked_ready: bool,
        #[case] stores_installed: bool,
        #[case] expected: StatusCode,
    ) {
        let health = if marked_ready {
            ready_health()
        } else {
            HealthState::new()
        };
        let state = if stores_installed {
            memory_state(false)
        } else {
            uninitialised_state()
        };

        let res = probe(health, state, "/health/ready").await;
        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }

    #[actix_web::test]
    async fn liveness_fails_once_draining() {
        let health = HealthState::new();
        health.mark_unhealthy();

        let res = probe(health, uninitialised_state(), "/health/live").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn liveness_does_not_depend_on_stores() {
        let res = probe(HealthState::new(), uninitialised_state(), "/health/live").await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
