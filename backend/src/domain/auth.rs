//! Account primitives: login credentials, registration profiles, and
//! password-reset requests.
//!
//! Constructors validate raw strings so inbound adapters can reject malformed
//! payloads before calling [`crate::domain::ports::UserSession`].

use std::fmt;

use zeroize::Zeroizing;

use super::{EmailAddress, UserValidationError};

/// Validation errors for account payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Email was missing or malformed.
    Email(UserValidationError),
    /// Name was blank once trimmed.
    EmptyName,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(err) => write!(f, "{err}"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

fn parse_email(raw: &str) -> Result<EmailAddress, AccountValidationError> {
    EmailAddress::new(raw).map_err(AccountValidationError::Email)
}

fn require_password(raw: &str) -> Result<Zeroizing<String>, AccountValidationError> {
    if raw.is_empty() {
        return Err(AccountValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is normalised (see [`EmailAddress`]).
/// - `password` is non-empty; caller whitespace is preserved.
///
/// # Examples
/// ```
/// use visa_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Amina@Example.com", "secret").unwrap();
/// assert_eq!(creds.email().as_ref(), "amina@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AccountValidationError> {
        Ok(Self {
            email: parse_email(email)?,
            password: require_password(password)?,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Profile submitted on sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationProfile {
    name: String,
    email: EmailAddress,
    phone: String,
    password: Zeroizing<String>,
}

impl RegistrationProfile {
    /// Validate a sign-up payload. Phone numbers are free-form.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            email: parse_email(email)?,
            phone: phone.trim().to_owned(),
            password: require_password(password)?,
        })
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

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Password-reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    email: EmailAddress,
}

impl ForgotPasswordRequest {
    pub fn try_from_email(email: &str) -> Result<Self, AccountValidationError> {
        Ok(Self {
            email: parse_email(email)?,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
