//! Shared validation helpers for inbound HTTP adapters.

use actix_web::error::JsonPayloadError;
use actix_web::web;
use serde_json::json;
use tracing::debug;

use crate::domain::{
    AccountValidationError, Error, IdValidationError, RATING_MAX, RATING_MIN, UserValidationError,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyField,
    InvalidEmail,
    InvalidIdentifier,
    RatingOutOfRange,
    EmptyPatch,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::RatingOutOfRange => "rating_out_of_range",
            ErrorCode::EmptyPatch => "empty_patch",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(field, ErrorCode::EmptyField, format!("{name} must not be empty"))
}

/// Reject blank text, returning the value unchanged otherwise.
pub(crate) fn require_text(value: String, field: FieldName) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(empty_field_error(field));
    }
    Ok(value)
}

/// Reject ratings outside the accepted star range.
///
/// Ratings arrive as any JSON integer so values like `300` or `-1` are
/// reported against the field instead of failing body extraction.
pub(crate) fn require_rating(value: i64, field: FieldName) -> Result<u8, Error> {
    if let Ok(rating) = u8::try_from(value)
        && (RATING_MIN..=RATING_MAX).contains(&rating)
    {
        return Ok(rating);
    }
    let name = field.as_str();
    Err(Error::invalid_request(format!(
        "{name} must be between {RATING_MIN} and {RATING_MAX}"
    ))
    .with_details(json!({
        "field": name,
        "value": value,
        "code": ErrorCode::RatingOutOfRange.as_str(),
    })))
}

/// Parse a raw identifier into one of the domain id newtypes.
pub(crate) fn parse_id<T>(value: String, field: FieldName) -> Result<T, Error>
where
    T: TryFrom<String, Error = IdValidationError>,
{
    T::try_from(value).map_err(|err| match err {
        IdValidationError::Empty { .. } => empty_field_error(field),
        IdValidationError::Untrimmed { .. } => {
            field_error(field, ErrorCode::InvalidIdentifier, err.to_string())
        }
    })
}

pub(crate) fn empty_patch_error() -> Error {
    Error::invalid_request("update must change at least one field")
        .with_details(json!({ "code": ErrorCode::EmptyPatch.as_str() }))
}

/// Describe a rejected JSON body as an `invalid_request` error.
pub(crate) fn invalid_json_error(err: &JsonPayloadError) -> Error {
    let reason = match err {
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    Error::invalid_request(format!("request body is not valid: {reason}")).with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
    }))
}

/// JSON extractor settings shared by every route.
///
/// Bodies that cannot be read or deserialised are answered with the domain
/// error payload rather than actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        debug!(error = %err, path = %req.path(), "rejected JSON body");
        invalid_json_error(&err).into()
    })
}

/// Map account payload validation onto a field-level error.
pub(crate) fn map_account_validation_error(err: AccountValidationError) -> Error {
    const EMAIL: FieldName = FieldName::new("email");
    match err {
        AccountValidationError::Email(UserValidationError::EmptyEmail) => empty_field_error(EMAIL),
        AccountValidationError::Email(inner) => {
            field_error(EMAIL, ErrorCode::InvalidEmail, inner.to_string())
        }
        AccountValidationError::EmptyName => empty_field_error(FieldName::new("name")),
        AccountValidationError::EmptyPassword => empty_field_error(FieldName::new("password")),
    }
}
