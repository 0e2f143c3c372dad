//! Opaque string identifiers for every entity.
//!
//! Identifiers accept any non-blank token without surrounding whitespace.
//! Seeded mock records use short tokens (`"1"`, `"9"`); records created at
//! runtime receive UUIDv4 strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} must not contain leading or trailing whitespace")]
    Untrimmed { kind: &'static str },
}

fn validate(kind: &'static str, raw: &str) -> Result<(), IdValidationError> {
    if raw.trim().is_empty() {
        return Err(IdValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdValidationError::Untrimmed { kind });
    }
    Ok(())
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, IdValidationError> {
                let raw = raw.into();
                validate($kind, &raw)?;
                Ok(Self(raw))
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_identifier! {
    /// Identifier of a user account.
    UserId => "user id"
}

define_identifier! {
    /// Identifier of a submitted visa application.
    ApplicationId => "application id"
}

define_identifier! {
    /// Identifier of a catalogue package.
    PackageId => "package id"
}

define_identifier! {
    /// Identifier of a customer review.
    ReviewId => "review id"
}
