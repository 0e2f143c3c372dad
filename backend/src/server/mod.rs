//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::applications::{add_application, list_applications};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::packages::{
    checkout, clear_selected, get_selected, list_packages, select_package,
};
use crate::inbound::http::reviews::{
    add_review, delete_review, list_reviews, toggle_like, update_review,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{current_user, forgot_password, login, logout, register};
use crate::inbound::http::validation::json_config;

/// Build the application with every route, the trace middleware, and, in
/// debug builds, Swagger UI at `/docs`.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(login)
        .service(logout)
        .service(register)
        .service(forgot_password)
        .service(current_user)
        .service(list_applications)
        .service(add_application)
        .service(list_packages)
        .service(get_selected)
        .service(select_package)
        .service(clear_selected)
        .service(checkout)
        .service(list_reviews)
        .service(add_review)
        .service(update_review)
        .service(delete_review)
        .service(toggle_like);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// The caller marks `health_state` ready once the stores are installed.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        registry,
    } = config;
    let http_state = web::Data::new(HttpState::new(registry));

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
