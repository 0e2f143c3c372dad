//! Visa service packages offered for purchase.

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use super::{Error, PackageId};

/// Route a client is redirected to when no package is selected.
pub const PACKAGE_LISTING_ROUTE: &str = "/api/v1/packages";

/// A purchasable visa package.
///
/// `price` is a whole amount in the display currency; no arithmetic is done
/// on it beyond rendering.
///
/// # Examples
/// ```
/// use visa_backend::domain::{Package, PackageId};
///
/// let package = Package {
///     id: PackageId::new("basic").unwrap(),
///     title: "Basic".to_owned(),
///     description: "Document checklist and review".to_owned(),
///     price: 99,
///     processing_time: "10-15 business days".to_owned(),
///     features: vec!["Document review".to_owned()],
/// };
/// assert_eq!(package.features.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[schema(value_type = String, example = "standard")]
    pub id: PackageId,
    #[schema(example = "Standard")]
    pub title: String,
    pub description: String,
    #[schema(example = 199)]
    pub price: u32,
    #[schema(example = "5-7 business days")]
    pub processing_time: String,
    /// Feature bullets in display order.
    pub features: Vec<String>,
}

/// Resolve a selection that a checkout-style step depends on.
///
/// An empty selection is reported as `not_found` with a redirect hint, the
/// cue for summary and cart screens to send the user back to the listing.
///
/// # Examples
/// ```
/// use visa_backend::domain::{ErrorCode, require_selected};
///
/// let err = require_selected(None).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
pub fn require_selected(selected: Option<Package>) -> Result<Package, Error> {
    selected.ok_or_else(|| {
        Error::not_found("no package selected").with_details(json!({
            "code": "no_package_selected",
            "redirect": PACKAGE_LISTING_ROUTE,
        }))
    })
}
