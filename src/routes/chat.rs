//! Chat routes: transcript, user turns, and typing events.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::chat_error_to_status;
use crate::error::ErrorCode;
use crate::routes::auth::AuthUser;
use crate::services::chat::{ChatMessage, ChatTranscript};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TranscriptResponse {
    #[serde(flatten)]
    pub transcript: ChatTranscript,
    /// `false` when no LLM is configured; sending will fail.
    pub enabled: bool,
}

#[derive(Deserialize)]
pub struct SendBody {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub reply: ChatMessage,
}

/// `GET /api/chat`
pub async fn transcript(State(state): State<AppState>, auth: AuthUser) -> Json<TranscriptResponse> {
    let transcript = state.chat.transcript(auth.user.id);
    Json(TranscriptResponse { transcript, enabled: state.llm.is_some() })
}

/// `POST /api/chat/messages`: one user turn. Blank input answers `204`.
pub async fn send_message(State(state): State<AppState>, auth: AuthUser, Json(body): Json<SendBody>) -> Response {
    match state.chat.send(auth.user.id, &body.text).await {
        Ok(Some(reply)) => Json(SendResponse { reply }).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::warn!(user_id = %auth.user.id, code = e.error_code(), error = %e, "chat turn failed");
            (chat_error_to_status(&e), Json(e.notification())).into_response()
        }
    }
}

/// `POST /api/chat/typing`: input changed; restart the inactivity timer.
pub async fn typing(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    state.chat.touch(auth.user.id);
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
