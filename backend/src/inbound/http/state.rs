//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` and resolve the
//! store they need through the [`StoreRegistry`] on every request, so a
//! request that arrives before start-up finished sees a
//! `store_not_initialized` error rather than a panic.

use std::sync::Arc;

use crate::domain::StoreRegistry;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use visa_backend::domain::StoreRegistry;
/// use visa_backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(StoreRegistry::new()));
/// assert!(!state.registry().is_initialised());
/// ```
#[derive(Clone)]
pub struct HttpState {
    registry: Arc<StoreRegistry>,
}

impl HttpState {
    pub fn new(registry: Arc<StoreRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }
}
