//! Visa application API handlers.
//!
//! ```text
//! GET /api/v1/applications
//! POST /api/v1/applications {"userId":"1","visaType":"Tourist Visa",...}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApplicationStatus, Error, NewVisaApplication, VisaApplication};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, require_text};

/// Request body for `POST /api/v1/applications`.
///
/// `status` defaults to `pending` when omitted.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[schema(example = "1")]
    pub user_id: String,
    #[schema(example = "Tourist Visa")]
    pub visa_type: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[schema(value_type = String, format = Date, example = "2024-03-15")]
    pub submission_date: NaiveDate,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub passport_number: String,
}

impl TryFrom<ApplicationRequest> for NewVisaApplication {
    type Error = Error;

    fn try_from(value: ApplicationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: parse_id(value.user_id, FieldName::new("userId"))?,
            visa_type: require_text(value.visa_type, FieldName::new("visaType"))?,
            status: value.status.unwrap_or_default(),
            submission_date: value.submission_date,
            full_name: require_text(value.full_name, FieldName::new("fullName"))?,
            email: require_text(value.email, FieldName::new("email"))?,
            phone: require_text(value.phone, FieldName::new("phone"))?,
            nationality: require_text(value.nationality, FieldName::new("nationality"))?,
            passport_number: require_text(value.passport_number, FieldName::new("passportNumber"))?,
        })
    }
}

/// List every application in submission order.
#[utoipa::path(
    get,
    path = "/api/v1/applications",
    responses(
        (status = 200, description = "Applications", body = [VisaApplication]),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["applications"],
    operation_id = "listApplications"
)]
#[get("/applications")]
pub async fn list_applications(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<VisaApplication>>> {
    let applications = state
        .registry()
        .applications()?
        .list_applications()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(applications))
}

/// Submit an application. The store assigns the identifier.
#[utoipa::path(
    post,
    path = "/api/v1/applications",
    request_body = ApplicationRequest,
    responses(
        (status = 201, description = "Stored application", body = VisaApplication),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["applications"],
    operation_id = "addApplication"
)]
#[post("/applications")]
pub async fn add_application(
    state: web::Data<HttpState>,
    payload: web::Json<ApplicationRequest>,
) -> ApiResult<HttpResponse> {
    let fields = NewVisaApplication::try_from(payload.into_inner())?;
    let stored = state
        .registry()
        .applications()?
        .add_application(fields)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(stored))
}
