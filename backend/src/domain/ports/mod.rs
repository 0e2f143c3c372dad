//! Domain ports: the store contracts inbound adapters depend on.

mod macros;
pub(crate) use macros::define_port_error;

mod application_store;
mod package_catalogue;
mod package_selection;
mod review_store;
mod store_error;
mod user_session;

#[cfg(test)]
pub use application_store::MockApplicationStore;
pub use application_store::ApplicationStore;
#[cfg(test)]
pub use package_catalogue::MockPackageCatalogue;
pub use package_catalogue::PackageCatalogue;
#[cfg(test)]
pub use package_selection::MockPackageSelection;
pub use package_selection::PackageSelection;
#[cfg(test)]
pub use review_store::MockReviewStore;
pub use review_store::ReviewStore;
pub use store_error::StoreError;
#[cfg(test)]
pub use user_session::MockUserSession;
pub use user_session::{UserSession, UserSessionError};
