//! Domain primitives, entities, and store ports.
//!
//! Purpose: define the strongly typed records the stores hold (users,
//! applications, packages, reviews), the transport-agnostic error payload,
//! and the ports inbound adapters program against.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and stable code.
//! - User, VisaApplication, Package, Review: stored entities.
//! - LoginCredentials, RegistrationProfile, ForgotPasswordRequest: account
//!   payloads.
//! - StoreRegistry / Stores: the installed store implementations.

pub mod application;
pub mod auth;
pub mod error;
pub mod ids;
pub mod package;
pub mod ports;
pub mod review;
pub mod store_registry;
pub mod trace_id;
pub mod user;

pub use self::application::{ApplicationStatus, NewVisaApplication, VisaApplication};
pub use self::auth::{
    AccountValidationError, ForgotPasswordRequest, LoginCredentials, RegistrationProfile,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{ApplicationId, IdValidationError, PackageId, ReviewId, UserId};
pub use self::package::{PACKAGE_LISTING_ROUTE, Package, require_selected};
pub use self::review::{NewReview, RATING_MAX, RATING_MIN, Review, ReviewPatch};
pub use self::store_registry::{StoreRegistry, Stores};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, User, UserValidationError, initials_for};
