//! Process-wide home for the installed stores.
//!
//! The registry starts empty. Start-up code builds the stores (optionally
//! seeding them) and calls [`StoreRegistry::install`] once; until then every
//! accessor fails with [`ErrorCode::StoreNotInitialized`](super::ErrorCode).
//! Tests construct their own registry per case.

use std::sync::{Arc, OnceLock};

use tracing::info;

use super::Error;
use super::ports::{ApplicationStore, PackageCatalogue, PackageSelection, ReviewStore, UserSession};

/// Parameter object bundling one implementation of every store port.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserSession>,
    pub applications: Arc<dyn ApplicationStore>,
    pub catalogue: Arc<dyn PackageCatalogue>,
    pub selection: Arc<dyn PackageSelection>,
    pub reviews: Arc<dyn ReviewStore>,
}

/// Write-once registry of [`Stores`].
///
/// # Examples
/// ```
/// use visa_backend::domain::{ErrorCode, StoreRegistry};
///
/// let registry = StoreRegistry::new();
/// let err = registry.reviews().err().expect("not installed yet");
/// assert_eq!(err.code(), ErrorCode::StoreNotInitialized);
/// ```
#[derive(Default)]
pub struct StoreRegistry {
    stores: OnceLock<Stores>,
}

impl StoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `stores` already installed.
    pub fn with_stores(stores: Stores) -> Self {
        let registry = Self::new();
        // A fresh OnceLock always accepts its first value.
        let _ = registry.stores.set(stores);
        registry
    }

    /// Install the stores. Fails if stores were already installed.
    pub fn install(&self, stores: Stores) -> Result<(), Error> {
        self.stores
            .set(stores)
            .map_err(|_| Error::internal("stores are already installed"))?;
        info!("stores installed");
        Ok(())
    }

    /// Whether [`StoreRegistry::install`] has completed.
    pub fn is_initialised(&self) -> bool {
        self.stores.get().is_some()
    }

    fn get(&self, store: &str) -> Result<&Stores, Error> {
        self.stores
            .get()
            .ok_or_else(|| Error::store_not_initialized(store))
    }

    pub fn users(&self) -> Result<Arc<dyn UserSession>, Error> {
        Ok(self.get("users")?.users.clone())
    }

    pub fn applications(&self) -> Result<Arc<dyn ApplicationStore>, Error> {
        Ok(self.get("applications")?.applications.clone())
    }

    pub fn catalogue(&self) -> Result<Arc<dyn PackageCatalogue>, Error> {
        Ok(self.get("catalogue")?.catalogue.clone())
    }

    pub fn selection(&self) -> Result<Arc<dyn PackageSelection>, Error> {
        Ok(self.get("selection")?.selection.clone())
    }

    pub fn reviews(&self) -> Result<Arc<dyn ReviewStore>, Error> {
        Ok(self.get("reviews")?.reviews.clone())
    }
}
