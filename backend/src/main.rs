//! Backend entry-point: loads settings, installs the stores, and serves the
//! REST API.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use visa_backend::domain::StoreRegistry;
use visa_backend::inbound::http::health::HealthState;
use visa_backend::outbound::memory::build_stores;
use visa_backend::server::{ServerConfig, create_server};
use visa_backend::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr();

    let registry = Arc::new(StoreRegistry::new());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr.clone(), registry.clone()),
    )?;

    let stores = build_stores(Arc::new(DefaultClock), settings.seed_mock_data())
        .map_err(|e| std::io::Error::other(format!("failed to build stores: {e}")))?;
    registry
        .install(stores)
        .map_err(|e| std::io::Error::other(format!("failed to install stores: {e}")))?;
    health_state.mark_ready();
    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        seed_mock_data = settings.seed_mock_data(),
        "server ready"
    );

    server.await
}
