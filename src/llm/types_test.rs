use super::*;

#[test]
fn error_codes_are_stable() {
    let cases = [
        (LlmError::MissingApiKey { var: "KEY".into() }, "E_MISSING_API_KEY"),
        (LlmError::HttpClientBuild("tls".into()), "E_HTTP_CLIENT_BUILD"),
        (LlmError::ApiRequest("timeout".into()), "E_API_REQUEST"),
        (LlmError::ApiResponse { status: 500, body: "oops".into() }, "E_API_RESPONSE"),
        (LlmError::ApiParse("json".into()), "E_API_PARSE"),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code);
    }
}

#[test]
fn missing_key_message_names_variable() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");
}

#[test]
fn response_status_is_in_message() {
    let err = LlmError::ApiResponse { status: 429, body: "quota".into() };
    assert_eq!(err.to_string(), "API response error: status 429");
}
