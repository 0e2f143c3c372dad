//! Package catalogue, selection, and checkout handlers.
//!
//! ```text
//! GET /api/v1/packages
//! GET /api/v1/packages/selected
//! PUT /api/v1/packages/selected {"packageId":"standard"}
//! DELETE /api/v1/packages/selected
//! GET /api/v1/checkout
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Package, PackageId, require_selected};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

/// Request body for `PUT /api/v1/packages/selected`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectPackageRequest {
    #[schema(example = "standard")]
    pub package_id: String,
}

/// Response body for `GET /api/v1/packages/selected`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SelectedPackageResponse {
    pub selected: Option<Package>,
}

/// List the packages on offer, cheapest first.
#[utoipa::path(
    get,
    path = "/api/v1/packages",
    responses(
        (status = 200, description = "Packages", body = [Package]),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["packages"],
    operation_id = "listPackages"
)]
#[get("/packages")]
pub async fn list_packages(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Package>>> {
    let packages = state
        .registry()
        .catalogue()?
        .list_packages()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(packages))
}

/// The package currently selected, or `null`.
#[utoipa::path(
    get,
    path = "/api/v1/packages/selected",
    responses(
        (status = 200, description = "Current selection", body = SelectedPackageResponse),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["packages"],
    operation_id = "getSelectedPackage"
)]
#[get("/packages/selected")]
pub async fn get_selected(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<SelectedPackageResponse>> {
    let selected = state
        .registry()
        .selection()?
        .get_selected()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(SelectedPackageResponse { selected }))
}

/// Select a catalogue package by id, replacing any earlier selection.
#[utoipa::path(
    put,
    path = "/api/v1/packages/selected",
    request_body = SelectPackageRequest,
    responses(
        (status = 200, description = "Selected package", body = Package),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown package", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["packages"],
    operation_id = "selectPackage"
)]
#[put("/packages/selected")]
pub async fn select_package(
    state: web::Data<HttpState>,
    payload: web::Json<SelectPackageRequest>,
) -> ApiResult<web::Json<Package>> {
    let id: PackageId = parse_id(payload.into_inner().package_id, FieldName::new("packageId"))?;
    let registry = state.registry();
    let package = registry
        .catalogue()?
        .find_package(&id)
        .await
        .map_err(map_store_error)?
        .ok_or_else(|| {
            Error::not_found(format!("package {id} does not exist")).with_details(json!({
                "field": "packageId",
                "code": "unknown_package",
            }))
        })?;
    registry
        .selection()?
        .set_selected(Some(package.clone()))
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(package))
}

/// Clear the selection.
#[utoipa::path(
    delete,
    path = "/api/v1/packages/selected",
    responses(
        (status = 204, description = "Selection cleared"),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["packages"],
    operation_id = "clearSelectedPackage"
)]
#[delete("/packages/selected")]
pub async fn clear_selected(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state
        .registry()
        .selection()?
        .set_selected(None)
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// The package a checkout would charge for.
///
/// Without a selection the response is `404` with
/// `details.code = "no_package_selected"` and a `details.redirect` to the
/// package listing.
#[utoipa::path(
    get,
    path = "/api/v1/checkout",
    responses(
        (status = 200, description = "Package to check out", body = Package),
        (status = 404, description = "No package selected", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["packages"],
    operation_id = "checkout"
)]
#[get("/checkout")]
pub async fn checkout(state: web::Data<HttpState>) -> ApiResult<web::Json<Package>> {
    let selected = state
        .registry()
        .selection()?
        .get_selected()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(require_selected(selected)?))
}
