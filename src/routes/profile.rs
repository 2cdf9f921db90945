//! Profile routes.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::{account_error_to_status, error_response, validation_failed};
use crate::profile::{ProfileForm, ProfileView};
use crate::routes::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub email: String,
    /// `None` until the user completes a profile; the client opens edit mode.
    pub profile: Option<ProfileView>,
}

/// `GET /api/profile`: stored profile, display values, and BMI.
pub async fn get_profile(auth: AuthUser) -> Json<ProfileResponse> {
    let profile = auth.user.profile.as_ref().map(ProfileView::from);
    Json(ProfileResponse { email: auth.user.email, profile })
}

/// `PUT /api/profile`: validate, normalize to metric, and store.
pub async fn update_profile(State(state): State<AppState>, auth: AuthUser, Json(form): Json<ProfileForm>) -> Response {
    let profile = match form.normalize() {
        Ok(profile) => profile,
        Err(errors) => return validation_failed(errors),
    };

    match state.accounts.update_profile(auth.user.id, profile).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "profile updated");
            let profile = user.profile.as_ref().map(ProfileView::from);
            Json(ProfileResponse { email: user.email, profile }).into_response()
        }
        Err(e) => error_response(account_error_to_status(&e), &e),
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
