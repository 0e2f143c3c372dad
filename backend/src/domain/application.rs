//! Visa applications submitted by users.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ApplicationId, UserId};

/// Processing state of a visa application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    InProgress,
    Approved,
    Rejected,
}

/// Applicant-supplied fields for a new application.
///
/// The store assigns the identifier; nothing here is validated beyond type
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVisaApplication {
    #[schema(value_type = String, example = "1")]
    pub user_id: UserId,
    #[schema(example = "Tourist Visa")]
    pub visa_type: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[schema(value_type = String, format = Date, example = "2024-03-15")]
    pub submission_date: NaiveDate,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub passport_number: String,
}

/// A stored visa application.
///
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisaApplication {
    #[schema(value_type = String)]
    pub id: ApplicationId,
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub visa_type: String,
    pub status: ApplicationStatus,
    #[schema(value_type = String, format = Date)]
    pub submission_date: NaiveDate,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub passport_number: String,
}

impl VisaApplication {
    /// Attach an identifier to applicant-supplied fields.
    pub fn from_new(id: ApplicationId, fields: NewVisaApplication) -> Self {
        let NewVisaApplication {
            user_id,
            visa_type,
            status,
            submission_date,
            full_name,
            email,
            phone,
            nationality,
            passport_number,
        } = fields;
        Self {
            id,
            user_id,
            visa_type,
            status,
            submission_date,
            full_name,
            email,
            phone,
            nationality,
            passport_number,
        }
    }
}
