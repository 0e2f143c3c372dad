//! HTTP server configuration object.

use std::sync::Arc;

use crate::domain::StoreRegistry;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) registry: Arc<StoreRegistry>,
}

impl ServerConfig {
    /// Serve the stores in `registry` on `bind_addr`.
    ///
    /// The registry may still be empty; handlers answer
    /// `store_not_initialized` until it is installed.
    #[must_use]
    pub fn new(bind_addr: (String, u16), registry: Arc<StoreRegistry>) -> Self {
        Self {
            bind_addr,
            registry,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}
