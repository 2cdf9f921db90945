//! Auth routes: signup, login, logout, and the session extractor.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::{account_error_to_status, error_response, validation_failed};
use crate::profile::validation::{validate_login, validate_signup};
use crate::profile::{LoginForm, SignupForm};
use crate::services::accounts::User;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user_id = app_state
            .sessions
            .validate(token)
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let user = app_state
            .accounts
            .get(user_id)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup`: validate, create account with profile, set cookie.
pub async fn signup(State(state): State<AppState>, jar: CookieJar, Json(form): Json<SignupForm>) -> Response {
    let errors = validate_signup(&form);
    if !errors.is_empty() {
        return validation_failed(errors);
    }
    let profile = match form.profile.normalize() {
        Ok(profile) => profile,
        Err(errors) => return validation_failed(errors),
    };

    let user = match state
        .accounts
        .signup(&form.email, &form.password, Some(profile))
        .await
    {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(error = %e, "signup rejected");
            return error_response(account_error_to_status(&e), &e);
        }
    };

    let token = state.sessions.create(user.id);
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (StatusCode::CREATED, jar, Json(user)).into_response()
}

/// `POST /api/auth/login`: validate, authenticate, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(form): Json<LoginForm>) -> Response {
    let errors = validate_login(&form);
    if !errors.is_empty() {
        return validation_failed(errors);
    }

    let user = match state.accounts.login(&form.email, &form.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(error = %e, "login rejected");
            return error_response(account_error_to_status(&e), &e);
        }
    };

    let token = state.sessions.create(user.id);
    tracing::info!(user_id = %user.id, "session created");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Json(user)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: end the session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.end_session(&auth.token).await;

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
