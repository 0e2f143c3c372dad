//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint in the inbound layer together
//! with the domain and request schemas they reference. The document is served
//! by Swagger UI in debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{
    ApplicationStatus, Error, ErrorCode, Package, ReviewPatch, User, VisaApplication,
};
use crate::inbound::http::applications::ApplicationRequest;
use crate::inbound::http::packages::{SelectPackageRequest, SelectedPackageResponse};
use crate::inbound::http::reviews::{LikeRequest, ReviewPatchRequest, ReviewRequest};
use crate::inbound::http::schemas::ReviewSchema;
use crate::inbound::http::users::{ForgotPasswordBody, LoginRequest, RegisterRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visa consulting backend API",
        description = "Accounts, visa applications, service packages, and customer reviews."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::register,
        crate::inbound::http::users::forgot_password,
        crate::inbound::http::users::current_user,
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::applications::add_application,
        crate::inbound::http::packages::list_packages,
        crate::inbound::http::packages::get_selected,
        crate::inbound::http::packages::select_package,
        crate::inbound::http::packages::clear_selected,
        crate::inbound::http::packages::checkout,
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::add_review,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::reviews::toggle_like,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        VisaApplication,
        ApplicationStatus,
        Package,
        ReviewSchema,
        ReviewPatch,
        LoginRequest,
        RegisterRequest,
        ForgotPasswordBody,
        ApplicationRequest,
        SelectPackageRequest,
        SelectedPackageResponse,
        ReviewRequest,
        ReviewPatchRequest,
        LikeRequest,
    )),
    tags(
        (name = "users", description = "Sign-in, sign-up, and the current user"),
        (name = "applications", description = "Visa applications"),
        (name = "packages", description = "Service packages, selection, and checkout"),
        (name = "reviews", description = "Customer reviews and likes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the OpenAPI document registers every endpoint.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[rstest]
    #[case("/api/v1/login")]
    #[case("/api/v1/users/me")]
    #[case("/api/v1/applications")]
    #[case("/api/v1/packages/selected")]
    #[case("/api/v1/checkout")]
    #[case("/api/v1/reviews/{id}")]
    #[case("/api/v1/reviews/{id}/like")]
    #[case("/health/ready")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn review_schema_includes_upvotes() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let review = schemas.get("Review").expect("Review schema");
        match review {
            RefOr::T(Schema::Object(object)) => {
                assert!(object.properties.contains_key("upvotes"));
                assert!(object.properties.contains_key("likedBy"));
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_code_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ErrorCode"));
        assert!(schemas.contains_key("Error"));
    }
}
