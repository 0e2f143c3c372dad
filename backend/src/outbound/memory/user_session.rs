//! Current-user holder with an in-memory account directory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserSession, UserSessionError};
use crate::domain::{
    EmailAddress, ForgotPasswordRequest, LoginCredentials, RegistrationProfile, User, UserId,
};
use crate::outbound::memory::{read_state, write_state};

const STORE: &str = "users";

#[derive(Debug, Default)]
struct SessionState {
    current: Option<User>,
    accounts: HashMap<EmailAddress, User>,
}

/// Signed-in user plus the accounts a login may resolve to.
///
/// Registered accounts live only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryUserSession {
    state: RwLock<SessionState>,
}

impl InMemoryUserSession {
    /// No accounts and nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user` and sign them in.
    pub fn signed_in(user: User) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(user.email().clone(), user.clone());
        Self {
            state: RwLock::new(SessionState {
                current: Some(user),
                accounts,
            }),
        }
    }
}

#[async_trait]
impl UserSession for InMemoryUserSession {
    async fn current_user(&self) -> Result<Option<User>, UserSessionError> {
        Ok(read_state(&self.state, STORE)?.current.clone())
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<User, UserSessionError> {
        let mut state = write_state(&self.state, STORE)?;
        let user = state
            .accounts
            .get(credentials.email())
            .cloned()
            .ok_or_else(|| UserSessionError::unknown_email(credentials.email().as_ref()))?;
        state.current = Some(user.clone());
        info!(user_id = %user.id(), "user logged in");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), UserSessionError> {
        let previous = write_state(&self.state, STORE)?.current.take();
        if let Some(user) = previous {
            info!(user_id = %user.id(), "user logged out");
        }
        Ok(())
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<(), UserSessionError> {
        let mut state = write_state(&self.state, STORE)?;
        let id = state
            .accounts
            .get(profile.email())
            .map(|existing| existing.id().clone())
            .unwrap_or_else(UserId::random);
        let user = User::from_profile(id, profile);
        info!(user_id = %user.id(), "account registered");
        state.accounts.insert(profile.email().clone(), user);
        Ok(())
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<(), UserSessionError> {
        let known = read_state(&self.state, STORE)?.accounts.contains_key(request.email());
        // Outcome is logged only; callers always see success.
        info!(known_account = known, "password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::mock_user;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> InMemoryUserSession {
        InMemoryUserSession::signed_in(mock_user().expect("mock user"))
    }

    fn credentials(email: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(email, "anything").expect("valid credentials")
    }

    #[rstest]
    #[tokio::test]
    async fn mock_user_is_current_at_start(session: InMemoryUserSession) {
        let current = session.current_user().await.expect("current");
        assert_eq!(current.map(|user| user.initials().to_owned()), Some("AR".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn logout_clears_current_user(session: InMemoryUserSession) {
        session.logout().await.expect("logout");
        assert_eq!(session.current_user().await.expect("current"), None);

        session.logout().await.expect("second logout is harmless");
    }

    #[rstest]
    #[tokio::test]
    async fn login_restores_known_account(session: InMemoryUserSession) {
        session.logout().await.expect("logout");
        let user = session
            .login(&credentials("AMINA.RAHMAN@example.com"))
            .await
            .expect("known email");

        assert_eq!(user.name(), "Amina Rahman");
        assert_eq!(session.current_user().await.expect("current"), Some(user));
    }

    #[rstest]
    #[tokio::test]
    async fn login_rejects_unknown_email(session: InMemoryUserSession) {
        let err = session
            .login(&credentials("nobody@example.com"))
            .await
            .expect_err("unknown email");

        assert_eq!(err, UserSessionError::unknown_email("nobody@example.com"));
        let current = session.current_user().await.expect("current");
        assert_eq!(current.map(|user| user.id().to_string()), Some("1".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn registered_account_can_log_in_without_becoming_current() {
        let session = InMemoryUserSession::new();
        let profile =
            RegistrationProfile::try_from_parts("Kofi Mensah", "kofi@example.com", "555", "pw")
                .expect("valid profile");

        session.register(&profile).await.expect("register");
        assert_eq!(session.current_user().await.expect("current"), None);

        let user = session.login(&credentials("kofi@example.com")).await.expect("login");
        assert_eq!(user.initials(), "KM");
        assert_eq!(user.phone(), "555");
    }

    #[rstest]
    #[tokio::test]
    async fn re_registering_replaces_profile_but_keeps_id(session: InMemoryUserSession) {
        let profile = RegistrationProfile::try_from_parts(
            "Amina R. Okoth",
            "amina.rahman@example.com",
            "",
            "pw",
        )
        .expect("valid profile");

        session.register(&profile).await.expect("register");
        let user = session
            .login(&credentials("amina.rahman@example.com"))
            .await
            .expect("login");

        assert_eq!(user.id().as_ref(), "1");
        assert_eq!(user.name(), "Amina R. Okoth");
    }

    #[rstest]
    #[tokio::test]
    async fn poisoned_session_reports_unavailable_state(session: InMemoryUserSession) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = session.state.write().expect("fresh lock");
            panic!("writer failed mid-update");
        }));

        let err = session.current_user().await.expect_err("poisoned lock");
        assert!(matches!(err, UserSessionError::StateUnavailable { .. }));
        assert!(err.to_string().contains("users"));
        session.logout().await.expect_err("writes fail too");
    }

    #[rstest]
    #[case("amina.rahman@example.com")]
    #[case("stranger@example.com")]
    #[tokio::test]
    async fn forgot_password_always_succeeds(session: InMemoryUserSession, #[case] email: &str) {
        let request = ForgotPasswordRequest::try_from_email(email).expect("valid email");
        session.forgot_password(&request).await.expect("always resolves");
    }
}
