//! HTTP adapter mapping for domain and port errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn store failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{StoreError, UserSessionError};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::StoreNotInitialized => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Map a store failure onto the domain error returned to clients.
pub(crate) fn map_store_error(err: StoreError) -> Error {
    match err {
        StoreError::StateUnavailable { .. } => {
            error!(error = %err, "store state unavailable");
            Error::internal(err.to_string())
        }
    }
}

/// Map a user session failure onto the domain error returned to clients.
pub(crate) fn map_session_error(err: UserSessionError) -> Error {
    match err {
        UserSessionError::UnknownEmail { .. } => {
            warn!(error = %err, "login rejected");
            Error::unauthorized("no account is registered for this email")
                .with_details(json!({ "field": "email", "code": "unknown_email" }))
        }
        UserSessionError::StateUnavailable { .. } => {
            error!(error = %err, "user session unavailable");
            Error::internal(err.to_string())
        }
    }
}
