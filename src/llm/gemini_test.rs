use super::*;

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Keep your chest up." }, { "text": "\n\nBrace your core." }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160 },
        "modelVersion": "gemini-1.5-flash-002"
    })
    .to_string();

    let completion = parse_response(&json, "gemini-1.5-flash").unwrap();
    assert_eq!(completion.text, "Keep your chest up.\n\nBrace your core.");
    assert_eq!(completion.model, "gemini-1.5-flash-002");
    assert_eq!(completion.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(completion.prompt_tokens, 120);
    assert_eq!(completion.output_tokens, 40);
}

#[test]
fn blocked_prompt_yields_empty_text() {
    let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    let completion = parse_response(&json, "gemini-1.5-flash").unwrap();
    assert_eq!(completion.text, "");
    assert_eq!(completion.model, "gemini-1.5-flash");
    assert_eq!(completion.finish_reason, None);
    assert_eq!(completion.prompt_tokens, 0);
}

#[test]
fn candidate_without_content_is_empty() {
    let json = serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] }).to_string();
    let completion = parse_response(&json, "m").unwrap();
    assert_eq!(completion.text, "");
    assert_eq!(completion.finish_reason.as_deref(), Some("SAFETY"));
}

#[test]
fn malformed_json_errors() {
    let err = parse_response("not json", "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_is_single_user_turn() {
    let prompt = Prompt { text: "How many sets?".into(), max_output_tokens: 256 };
    let body = serde_json::to_value(build_request(&prompt)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "How many sets?" }] }],
            "generationConfig": { "maxOutputTokens": 256 },
        })
    );
}

#[test]
fn client_keeps_configured_model() {
    let config = LlmConfig {
        api_key: "k".into(),
        model: "gemini-2.0-flash".into(),
        timeouts: crate::llm::config::LlmTimeouts { request_secs: 5, connect_secs: 1 },
    };
    let client = GeminiClient::new(config).unwrap();
    assert_eq!(client.model(), "gemini-2.0-flash");
}
