//! Fixed catalogue of packages loaded at start-up.

use async_trait::async_trait;

use crate::domain::ports::{PackageCatalogue, StoreError};
use crate::domain::{Package, PackageId};

/// Immutable catalogue; needs no lock.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageCatalogue {
    packages: Vec<Package>,
}

impl StaticPackageCatalogue {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

#[async_trait]
impl PackageCatalogue for StaticPackageCatalogue {
    async fn list_packages(&self) -> Result<Vec<Package>, StoreError> {
        Ok(self.packages.clone())
    }

    async fn find_package(&self, id: &PackageId) -> Result<Option<Package>, StoreError> {
        Ok(self.packages.iter().find(|package| &package.id == id).cloned())
    }
}
