//! Driving port for visa applications.
//!
//! Applications are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::{NewVisaApplication, VisaApplication};

use super::StoreError;

/// Port for listing and submitting visa applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// All applications in submission order.
    async fn list_applications(&self) -> Result<Vec<VisaApplication>, StoreError>;

    /// Assign a fresh identifier, append, and return the stored record.
    ///
    /// Field contents are not validated; duplicates are accepted.
    async fn add_application(
        &self,
        fields: NewVisaApplication,
    ) -> Result<VisaApplication, StoreError>;
}
