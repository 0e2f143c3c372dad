//! Single-slot holder for the selected package.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use super::{read_state, write_state};
use crate::domain::Package;
use crate::domain::ports::{PackageSelection, StoreError};

const STORE: &str = "package selection";

#[derive(Debug, Default)]
pub struct InMemoryPackageSelection {
    selected: RwLock<Option<Package>>,
}

impl InMemoryPackageSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageSelection for InMemoryPackageSelection {
    async fn get_selected(&self) -> Result<Option<Package>, StoreError> {
        Ok(read_state(&self.selected, STORE)?.clone())
    }

    async fn set_selected(&self, package: Option<Package>) -> Result<(), StoreError> {
        debug!(package_id = ?package.as_ref().map(|p| p.id.as_ref()), "package selection replaced");
        *write_state(&self.selected, STORE)? = package;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::catalogue_packages;
    use rstest::{fixture, rstest};

    #[fixture]
    fn packages() -> Vec<Package> {
        catalogue_packages().expect("packages")
    }

    #[rstest]
    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryPackageSelection::new();
        assert_eq!(store.get_selected().await.expect("get"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn set_then_get_returns_exact_package(packages: Vec<Package>) {
        let store = InMemoryPackageSelection::new();
        let chosen = packages[1].clone();

        store.set_selected(Some(chosen.clone())).await.expect("set");
        assert_eq!(store.get_selected().await.expect("get"), Some(chosen));
    }

    #[rstest]
    #[tokio::test]
    async fn replacing_discards_previous_selection(packages: Vec<Package>) {
        let store = InMemoryPackageSelection::new();
        store.set_selected(Some(packages[0].clone())).await.expect("set");
        store.set_selected(Some(packages[2].clone())).await.expect("replace");

        assert_eq!(store.get_selected().await.expect("get"), Some(packages[2].clone()));
    }

    #[rstest]
    #[tokio::test]
    async fn setting_none_clears(packages: Vec<Package>) {
        let store = InMemoryPackageSelection::new();
        store.set_selected(Some(packages[0].clone())).await.expect("set");
        store.set_selected(None).await.expect("clear");

        assert_eq!(store.get_selected().await.expect("get"), None);
    }
}
