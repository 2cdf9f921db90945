//! LLM: the text generation backend for the chat coach.
//!
//! DESIGN
//! ======
//! Gemini is the only backend. Callers depend on the `LlmChat` trait, so the
//! chat service and its tests never see HTTP.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::LlmChat;
