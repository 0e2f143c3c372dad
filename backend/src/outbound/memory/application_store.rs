//! Append-only list of visa applications.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;

use super::{read_state, write_state};
use crate::domain::ports::{ApplicationStore, StoreError};
use crate::domain::{ApplicationId, NewVisaApplication, VisaApplication};

const STORE: &str = "applications";

#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    applications: RwLock<Vec<VisaApplication>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `applications`, kept in the given order.
    pub fn with_applications(applications: Vec<VisaApplication>) -> Self {
        Self {
            applications: RwLock::new(applications),
        }
    }
}

fn fresh_id(existing: &[VisaApplication]) -> ApplicationId {
    loop {
        let candidate = ApplicationId::random();
        if existing.iter().all(|application| application.id != candidate) {
            return candidate;
        }
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn list_applications(&self) -> Result<Vec<VisaApplication>, StoreError> {
        Ok(read_state(&self.applications, STORE)?.clone())
    }

    async fn add_application(
        &self,
        fields: NewVisaApplication,
    ) -> Result<VisaApplication, StoreError> {
        let mut applications = write_state(&self.applications, STORE)?;
        let application = VisaApplication::from_new(fresh_id(&applications), fields);
        applications.push(application.clone());
        info!(
            application_id = %application.id,
            user_id = %application.user_id,
            visa_type = %application.visa_type,
            "visa application added"
        );
        Ok(application)
    }
}
