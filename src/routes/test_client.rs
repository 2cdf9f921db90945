//! In-process request helpers for route tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// The `session_token` value from `Set-Cookie`, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| v.strip_prefix("session_token="))
            .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
    }
}

pub async fn request(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("session_token={token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, headers, json }
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> TestResponse {
    request(app, "GET", uri, token, None).await
}

pub async fn post(app: &Router, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
    request(app, "POST", uri, token, Some(body)).await
}
