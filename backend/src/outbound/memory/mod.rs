//! In-memory store adapters.
//!
//! Each store guards its state with a `std::sync::RwLock`. A poisoned lock is
//! reported as [`StoreError::StateUnavailable`] rather than propagated as a
//! panic.

mod application_store;
mod fixtures;
mod package_catalogue;
mod package_selection;
mod review_store;
mod user_session;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::info;

use crate::domain::Stores;
use crate::domain::ports::StoreError;

pub use application_store::InMemoryApplicationStore;
pub use fixtures::{
    FixtureError, catalogue_packages, mock_applications, mock_reviews, mock_user,
};
pub use package_catalogue::StaticPackageCatalogue;
pub use package_selection::InMemoryPackageSelection;
pub use review_store::InMemoryReviewStore;
pub use user_session::InMemoryUserSession;

pub(crate) fn read_state<'a, T>(
    lock: &'a RwLock<T>,
    store: &str,
) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::state_unavailable(store))
}

pub(crate) fn write_state<'a, T>(
    lock: &'a RwLock<T>,
    store: &str,
) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::state_unavailable(store))
}

/// Build one in-memory implementation of every store.
///
/// The package catalogue is always populated. With `seed_mock_data` the mock
/// account is registered and signed in, and sample applications and reviews
/// are loaded; otherwise those stores start empty.
///
/// # Errors
/// Returns [`FixtureError`] if a built-in mock record fails validation.
pub fn build_stores(clock: Arc<dyn Clock>, seed_mock_data: bool) -> Result<Stores, FixtureError> {
    let catalogue = StaticPackageCatalogue::new(catalogue_packages()?);
    let (users, applications, reviews) = if seed_mock_data {
        let applications = mock_applications()?;
        let reviews = mock_reviews()?;
        info!(
            applications = applications.len(),
            reviews = reviews.len(),
            "stores seeded with mock data"
        );
        (
            InMemoryUserSession::signed_in(mock_user()?),
            InMemoryApplicationStore::with_applications(applications),
            InMemoryReviewStore::with_reviews(clock, reviews),
        )
    } else {
        (
            InMemoryUserSession::new(),
            InMemoryApplicationStore::new(),
            InMemoryReviewStore::new(clock),
        )
    };

    Ok(Stores {
        users: Arc::new(users),
        applications: Arc::new(applications),
        catalogue: Arc::new(catalogue),
        selection: Arc::new(InMemoryPackageSelection::new()),
        reviews: Arc::new(reviews),
    })
}
