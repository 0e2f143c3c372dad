//! User account model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{IdValidationError, RegistrationProfile, UserId};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId(IdValidationError),
    EmptyName,
    EmptyEmail,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(err) => write!(f, "{err}"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like name@domain"),
        }
    }
}

impl std::error::Error for UserValidationError {}

impl From<IdValidationError> for UserValidationError {
    fn from(value: IdValidationError) -> Self {
        Self::InvalidId(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only; deliverability is not verified.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address, trimmed and lower-cased.
///
/// # Examples
/// ```
/// use visa_backend::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Amina@Example.COM ").expect("valid email");
/// assert_eq!(email.as_ref(), "amina@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalise and validate an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&normalised) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Derive display initials from a full name.
///
/// Takes the first character of the first two words and upper-cases them.
///
/// # Examples
/// ```
/// use visa_backend::domain::initials_for;
///
/// assert_eq!(initials_for("amina rahman"), "AR");
/// assert_eq!(initials_for("Cher"), "C");
/// assert_eq!(initials_for("Jean Luc Picard"), "JL");
/// ```
pub fn initials_for(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Application user.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `initials` always equals [`initials_for`] applied to `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "1")]
    id: UserId,
    #[schema(example = "Amina Rahman")]
    name: String,
    #[schema(value_type = String, example = "amina@example.com")]
    email: EmailAddress,
    #[schema(example = "+44 20 7946 0018")]
    phone: String,
    #[schema(example = "AR")]
    initials: String,
}

impl User {
    /// Build a user from validated components.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: EmailAddress,
        phone: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let initials = initials_for(&name);
        Ok(Self {
            id,
            name,
            email,
            phone: phone.into().trim().to_owned(),
            initials,
        })
    }

    /// Build the account recorded for a sign-up. The profile already holds a
    /// trimmed, non-empty name and a valid email.
    pub fn from_profile(id: UserId, profile: &RegistrationProfile) -> Self {
        Self {
            id,
            name: profile.name().to_owned(),
            email: profile.email().clone(),
            phone: profile.phone().to_owned(),
            initials: initials_for(profile.name()),
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Self, UserValidationError> {
        Self::new(UserId::new(id)?, name, EmailAddress::new(email)?, phone)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Upper-case initials shown in avatars.
    pub fn initials(&self) -> &str {
        self.initials.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    name: String,
    email: String,
    phone: String,
    // Derived on decode; accepted for payload symmetry.
    #[serde(default)]
    initials: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            email: value.email.into(),
            phone: value.phone,
            initials: Some(value.initials),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::try_from_strings(&value.id, &value.name, &value.email, &value.phone)
    }
}
