use std::collections::HashMap;

use super::*;

fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    assert_eq!(config(&[]).unwrap(), AppConfig::default());
}

#[test]
fn overrides_are_parsed() {
    let cfg = config(&[
        ("PORT", "8080"),
        ("WEB_DIR", "/srv/fitcoach"),
        ("COOKIE_SECURE", "yes"),
        ("CHAT_MAX_TOKENS", "512"),
        ("CHAT_FOLLOW_UP_SECS", "10"),
        ("SESSION_TTL_SECS", "3600"),
        ("SESSION_SWEEP_SECS", "0"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.web_dir, PathBuf::from("/srv/fitcoach"));
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.chat.max_tokens, 512);
    assert_eq!(cfg.chat.follow_up_after, Duration::from_secs(10));
    assert_eq!(cfg.session_ttl, Duration::from_secs(3600));
    assert_eq!(cfg.session_sweep_every, Duration::from_secs(1));
}

#[test]
fn invalid_port_is_an_error() {
    let err = config(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn invalid_chat_values_fall_back() {
    let cfg = config(&[("CHAT_MAX_TOKENS", "lots"), ("CHAT_FOLLOW_UP_SECS", "-1")]).unwrap();
    assert_eq!(cfg.chat, ChatConfig::default());
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool("maybe"), None);
}
