//! Account API handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"amina.rahman@example.com","password":"secret"}
//! POST /api/v1/logout
//! POST /api/v1/register {"name":"Amina Rahman","email":"...","phone":"...","password":"..."}
//! POST /api/v1/forgot-password {"email":"amina.rahman@example.com"}
//! GET /api/v1/users/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, ForgotPasswordRequest, LoginCredentials, RegistrationProfile, User,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_session_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_account_validation_error;

/// Login request body for `POST /api/v1/login`.
///
/// Passwords are required but not checked against anything.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "amina.rahman@example.com")]
    pub email: String,
    pub password: String,
}

/// Sign-up request body for `POST /api/v1/register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "Amina Rahman")]
    pub name: String,
    #[schema(example = "amina.rahman@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+44 20 7946 0018")]
    pub phone: String,
    pub password: String,
}

/// Password-reset request body for `POST /api/v1/forgot-password`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordBody {
    #[schema(example = "amina.rahman@example.com")]
    pub email: String,
}

/// Sign in as the account registered for the email.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed-in user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "No account for this email", body = Error),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&email, &password).map_err(map_account_validation_error)?;
    let user = state
        .registry()
        .users()?
        .login(&credentials)
        .await
        .map_err(map_session_error)?;
    Ok(web::Json(user))
}

/// Sign out the current user. Succeeds when nobody is signed in.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Signed out"),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state
        .registry()
        .users()?
        .logout()
        .await
        .map_err(map_session_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Record an account so a later login can find it.
///
/// Registering does not sign the account in.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 204, description = "Account recorded"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        name,
        email,
        phone,
        password,
    } = payload.into_inner();
    let profile = RegistrationProfile::try_from_parts(&name, &email, &phone, &password)
        .map_err(map_account_validation_error)?;
    state
        .registry()
        .users()?
        .register(&profile)
        .await
        .map_err(map_session_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Accept a password-reset request.
///
/// Always answers 202 for a well-formed email so callers cannot probe which
/// accounts exist.
#[utoipa::path(
    post,
    path = "/api/v1/forgot-password",
    request_body = ForgotPasswordBody,
    responses(
        (status = 202, description = "Request accepted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["users"],
    operation_id = "forgotPassword"
)]
#[post("/forgot-password")]
pub async fn forgot_password(
    state: web::Data<HttpState>,
    payload: web::Json<ForgotPasswordBody>,
) -> ApiResult<HttpResponse> {
    let request = ForgotPasswordRequest::try_from_email(&payload.email)
        .map_err(map_account_validation_error)?;
    state
        .registry()
        .users()?
        .forgot_password(&request)
        .await
        .map_err(map_session_error)?;
    Ok(HttpResponse::Accepted().finish())
}

/// The signed-in user.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Signed-in user", body = User),
        (status = 401, description = "Nobody is signed in", body = Error),
        (status = 503, description = "Stores not initialised", body = Error)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(state: web::Data<HttpState>) -> ApiResult<web::Json<User>> {
    state
        .registry()
        .users()?
        .current_user()
        .await
        .map_err(map_session_error)?
        .map(web::Json)
        .ok_or_else(|| Error::unauthorized("nobody is signed in"))
}
