//! Driving port for the package a user is currently reviewing.

use async_trait::async_trait;

use crate::domain::Package;

use super::StoreError;

/// Holder of at most one selected package.
///
/// Selecting replaces any earlier selection; no history is kept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageSelection: Send + Sync {
    /// The current selection, if any.
    async fn get_selected(&self) -> Result<Option<Package>, StoreError>;

    /// Replace the selection. `None` clears it.
    async fn set_selected(&self, package: Option<Package>) -> Result<(), StoreError>;
}
