//! Driving port for the signed-in user and account operations.
//!
//! At most one user is current at a time. Passwords are accepted but never
//! verified.

use async_trait::async_trait;

use crate::domain::{ForgotPasswordRequest, LoginCredentials, RegistrationProfile, User};

use super::{StoreError, define_port_error};

define_port_error! {
    /// Errors raised by user session adapters.
    pub enum UserSessionError {
        /// No account is registered for the email.
        UnknownEmail { email: String } => "no account registered for {email}",
        /// The session state cannot be read or written.
        StateUnavailable { message: String } => "user session unavailable: {message}",
    }
}

impl From<StoreError> for UserSessionError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::StateUnavailable { .. } => Self::state_unavailable(err.to_string()),
        }
    }
}

/// Port for sign-in, sign-out, sign-up, and password reset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSession: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Result<Option<User>, UserSessionError>;

    /// Make the account matching the credential email current and return it.
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, UserSessionError>;

    /// Clear the current user.
    async fn logout(&self) -> Result<(), UserSessionError>;

    /// Record an account so a later login can find it.
    ///
    /// Always succeeds; registering an existing email replaces its profile.
    async fn register(&self, profile: &RegistrationProfile) -> Result<(), UserSessionError>;

    /// Accept a password-reset request. Nothing is sent.
    async fn forgot_password(&self, request: &ForgotPasswordRequest)
    -> Result<(), UserSessionError>;
}
