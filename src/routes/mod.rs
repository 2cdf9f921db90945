//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API under `/api`, a liveness check, and the single-page frontend.
//! The frontend's client-side paths (`/`, `/chat`, `/profile`) all serve the
//! same `index.html`; any other non-API path redirects to `/`.

pub mod auth;
pub mod chat;
pub mod exercises;
pub mod profile;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::ErrorCode;
use crate::profile::validation::FieldErrors;
use crate::services::accounts::AccountError;
use crate::services::chat::ChatError;
use crate::state::AppState;

const CLIENT_PATHS: [&str; 5] = ["/", "/signup", "/schedule", "/chat", "/profile"];

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/api/catalog/injuries", get(exercises::injuries))
        .route("/api/catalog/goals", get(exercises::goals))
        .route("/api/exercises/injury/{injury}", get(exercises::by_injury))
        .route("/api/exercises/goal", get(exercises::by_goal))
        .route("/api/workouts/today", get(exercises::today))
        .route("/api/workouts/schedule", get(exercises::schedule))
        .route("/api/chat", get(chat::transcript))
        .route("/api/chat/messages", post(chat::send_message))
        .route("/api/chat/typing", post(chat::typing))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus the frontend shell.
pub fn app(state: AppState) -> Router {
    let web_dir = state.config.web_dir.clone();
    let index = web_dir.join("index.html");

    let mut router = api_routes(state).nest_service("/assets", ServeDir::new(web_dir.join("assets")));
    for path in CLIENT_PATHS {
        router = router.route_service(path, ServeFile::new(&index));
    }
    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return StatusCode::NOT_FOUND.into_response();
    }
    Redirect::to("/").into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERROR RESPONSES
// =============================================================================

/// `422` with the field → message map.
pub(crate) fn validation_failed(errors: FieldErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!({ "errors": errors }))).into_response()
}

/// `{ code, message }` body for a domain error.
pub(crate) fn error_response(status: StatusCode, err: &impl ErrorCode) -> Response {
    let body = serde_json::json!({ "code": err.error_code(), "message": err.to_string() });
    (status, Json(body)).into_response()
}

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::EmailTaken => StatusCode::CONFLICT,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

pub(crate) fn chat_error_to_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ChatError::EmptyResponse | ChatError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
pub(crate) mod test_client;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
