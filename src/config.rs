//! Process configuration parsed from environment variables.
//!
//! Every value has a default, so an empty environment yields a working
//! server on port 3000 with chat disabled. LLM settings are parsed separately
//! by `llm::config` because a missing key there is not fatal.

use std::path::PathBuf;
use std::time::Duration;

use crate::services::chat::{ChatConfig, DEFAULT_FOLLOW_UP_SECS, DEFAULT_MAX_TOKENS};
use crate::services::session::DEFAULT_SESSION_TTL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEB_DIR: &str = "web";
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub web_dir: PathBuf,
    pub cookie_secure: bool,
    pub chat: ChatConfig,
    pub session_ttl: Duration,
    /// How often expired sessions are swept.
    pub session_sweep_every: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
            cookie_secure: false,
            chat: ChatConfig::default(),
            session_ttl: DEFAULT_SESSION_TTL,
            session_sweep_every: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
        }
    }
}

impl AppConfig {
    /// Read `PORT`, `WEB_DIR`, `COOKIE_SECURE`, `CHAT_MAX_TOKENS`,
    /// `CHAT_FOLLOW_UP_SECS`, `SESSION_TTL_SECS` and `SESSION_SWEEP_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let web_dir = lookup("WEB_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEB_DIR), PathBuf::from);
        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false);
        let chat = ChatConfig {
            max_tokens: parse_or(lookup("CHAT_MAX_TOKENS"), DEFAULT_MAX_TOKENS),
            follow_up_after: Duration::from_secs(parse_or(lookup("CHAT_FOLLOW_UP_SECS"), DEFAULT_FOLLOW_UP_SECS)),
        };

        let session_ttl = Duration::from_secs(parse_or(lookup("SESSION_TTL_SECS"), DEFAULT_SESSION_TTL.as_secs()));
        let session_sweep_every =
            Duration::from_secs(parse_or(lookup("SESSION_SWEEP_SECS"), DEFAULT_SESSION_SWEEP_SECS).max(1));

        Ok(Self { port, web_dir, cookie_secure, chat, session_ttl, session_sweep_every })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
