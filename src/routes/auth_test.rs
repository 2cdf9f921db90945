use axum::http::StatusCode;
use axum::Router;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::routes::app;
use crate::routes::test_client::{get, post};
use crate::state::{AppState, test_helpers};

fn signup_body() -> Value {
    json!({
        "email": "sam@example.com",
        "password": "secret1",
        "confirmPassword": "secret1",
        "username": "sam",
        "age": "29",
        "weight": "154",
        "weightUnit": "lbs",
        "height": "70",
        "heightUnit": "inches",
        "gender": "female",
        "fitnessLevel": "beginner",
        "workoutFrequency": "3-4",
        "workoutDuration": "30-45",
        "fitnessGoal": "weight-loss",
        "targetWeight": "65",
        "targetWeightUnit": "kg",
    })
}

fn setup() -> (AppState, Router) {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    (state, app)
}

// =============================================================================
// signup
// =============================================================================

#[tokio::test]
async fn signup_creates_account_and_session() {
    let (_state, app) = setup();

    let resp = post(&app, "/api/auth/signup", None, signup_body()).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.json["email"], "sam@example.com");
    assert_eq!(resp.json["profile"]["heightCm"], 177.8);
    assert_eq!(resp.json["profile"]["weightUnit"], "lbs");

    let token = resp.session_cookie().unwrap();
    let cookie_header = resp.headers[axum::http::header::SET_COOKIE].to_str().unwrap();
    assert!(cookie_header.contains("HttpOnly"));
    assert!(cookie_header.contains("Path=/"));

    let me = get(&app, "/api/auth/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json["email"], "sam@example.com");
}

#[tokio::test]
async fn signup_with_mismatched_passwords_creates_nothing() {
    let (_state, app) = setup();
    let mut body = signup_body();
    body["confirmPassword"] = json!("secret2");

    let resp = post(&app, "/api/auth/signup", None, body).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.json["errors"]["confirmPassword"], "Passwords do not match");
    assert!(resp.session_cookie().is_none());

    // The email is still free, so a corrected signup succeeds.
    let resp = post(&app, "/api/auth/signup", None, signup_body()).await;
    assert_eq!(resp.status, StatusCode::CREATED);
}

#[tokio::test]
async fn signup_reports_every_invalid_field() {
    let (_state, app) = setup();
    let resp = post(&app, "/api/auth/signup", None, json!({ "email": "bad" })).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = resp.json["errors"].as_object().unwrap();
    assert_eq!(errors["email"], "Invalid email format");
    assert_eq!(errors["password"], "Password is required");
    assert_eq!(errors["confirmPassword"], "Please confirm your password");
    assert_eq!(errors["fitnessGoal"], "Please select your fitness goal");
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let (_state, app) = setup();
    post(&app, "/api/auth/signup", None, signup_body()).await;
    let resp = post(&app, "/api/auth/signup", None, signup_body()).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(resp.json["code"], "E_EMAIL_TAKEN");
}

// =============================================================================
// login / logout
// =============================================================================

#[tokio::test]
async fn login_after_signup() {
    let (_state, app) = setup();
    post(&app, "/api/auth/signup", None, signup_body()).await;

    let resp = post(&app, "/api/auth/login", None, json!({ "email": "sam@example.com", "password": "secret1" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["profile"]["fitnessGoal"], "weight-loss");
    assert!(resp.session_cookie().is_some());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (_state, app) = setup();
    post(&app, "/api/auth/signup", None, signup_body()).await;

    let resp = post(&app, "/api/auth/login", None, json!({ "email": "sam@example.com", "password": "wrong12" })).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json["code"], "E_INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_with_new_email_creates_bare_account() {
    let (_state, app) = setup();
    let resp = post(&app, "/api/auth/login", None, json!({ "email": "new@example.com", "password": "anything" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["profile"], Value::Null);
}

#[tokio::test]
async fn login_validation_errors() {
    let (_state, app) = setup();
    let resp = post(&app, "/api/auth/login", None, json!({ "email": "", "password": "123" })).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.json["errors"]["email"], "Email is required");
    assert_eq!(resp.json["errors"]["password"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn logout_ends_session() {
    let (state, app) = setup();
    let (_user, token) = test_helpers::seed_user(&state, None).await;

    let resp = post(&app, "/api/auth/logout", Some(&token), json!({})).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    let cookie_header = resp.headers[axum::http::header::SET_COOKIE].to_str().unwrap();
    assert!(cookie_header.contains("Max-Age=0"));

    assert!(state.sessions.validate(&token).is_none());
    assert_eq!(get(&app, "/api/auth/me", Some(&token)).await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn repeated_guest_logins_leave_no_accounts_after_logout() {
    let (state, app) = setup();
    for i in 0..50 {
        let body = json!({ "email": format!("guest{i}@example.com"), "password": "anything" });
        let token = post(&app, "/api/auth/login", None, body).await.session_cookie().unwrap();
        let resp = post(&app, "/api/auth/logout", Some(&token), json!({})).await;
        assert_eq!(resp.status, StatusCode::NO_CONTENT);
    }
    assert_eq!(state.accounts.count().await, 0);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn logout_keeps_signed_up_account() {
    let (state, app) = setup();
    let token = post(&app, "/api/auth/signup", None, signup_body()).await.session_cookie().unwrap();
    post(&app, "/api/auth/logout", Some(&token), json!({})).await;
    assert_eq!(state.accounts.count().await, 1);

    let resp = post(&app, "/api/auth/login", None, json!({ "email": "sam@example.com", "password": "secret1" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["profile"]["fitnessGoal"], "weight-loss");
}

#[tokio::test(start_paused = true)]
async fn logout_discards_chat_and_follow_up_timer() {
    let (state, app) = setup();
    let (user, token) = test_helpers::seed_user(&state, None).await;
    get(&app, "/api/chat", Some(&token)).await;
    post(&app, "/api/chat/typing", Some(&token), json!({})).await;

    post(&app, "/api/auth/logout", Some(&token), json!({})).await;
    tokio::time::sleep(std::time::Duration::from_secs(31)).await;

    let transcript = state.chat.transcript(user.id);
    assert_eq!(transcript.messages.len(), 1);
    assert_eq!(transcript.suggested_questions.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn expired_session_is_unauthorized() {
    let config = AppConfig { session_ttl: std::time::Duration::from_secs(60), ..AppConfig::default() };
    let state = AppState::new(config, None);
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, None).await;

    assert_eq!(get(&app, "/api/auth/me", Some(&token)).await.status, StatusCode::OK);
    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    assert_eq!(get(&app, "/api/auth/me", Some(&token)).await.status, StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty());
}
