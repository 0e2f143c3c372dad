//! Read-only port over the packages on offer.

use async_trait::async_trait;

use crate::domain::{Package, PackageId};

use super::StoreError;

/// Port for browsing the package catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageCatalogue: Send + Sync {
    /// Every package in display order.
    async fn list_packages(&self) -> Result<Vec<Package>, StoreError>;

    /// Look up a package by id.
    async fn find_package(&self, id: &PackageId) -> Result<Option<Package>, StoreError>;
}
