//! Chat service: per-user coach transcript and inactivity follow-up.
//!
//! ARCHITECTURE
//! ============
//! Each user has one conversation: an append-only transcript that opens with
//! the welcome message, a "follow-up asked" flag, and at most one pending
//! inactivity timer. A user turn wraps the input in a fixed topic-scoping
//! prompt and issues exactly one generation request. The lock is released
//! while the request is in flight.
//!
//! TRADE-OFFS
//! ==========
//! Only the current question is sent to the model, never the transcript, so
//! every answer stands alone. Failures are reported once and never retried.
//!
//! Input-change events (`touch`) abort the pending timer and arm a new one
//! unless a follow-up was already asked since the last send. Each armed timer
//! carries a generation number; a timer that wakes after being superseded
//! does nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Prompt};

pub const WELCOME_MESSAGE: &str = "Welcome to your AI Fitness Coach\n\nI'm here to help with workout routines, exercise techniques, fitness nutrition, and injury prevention. Ask me anything related to your fitness journey!";
pub const FOLLOW_UP_MESSAGE: &str = "Do you need any other workout or fitness advice today?";
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "How can I improve my squat form?",
    "What should I eat before a workout?",
    "What's the best workout for building muscle?",
];

pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_FOLLOW_UP_SECS: u64 = 30;

const PROMPT_PREAMBLE: &str = "You are a specialized fitness and workout assistant. ONLY provide information related to exercise, workouts, fitness routines, sports nutrition, and injury prevention/recovery. If the question is not related to fitness or exercise, politely redirect the conversation back to workout topics. Format your answer in short, focused paragraphs with line breaks between them. Keep each paragraph concise and easy to read.";
const PROMPT_REMINDER: &str = "Remember: Only respond with fitness and exercise-related information. For any other topics, gently guide the user back to fitness discussions.";

/// Wrap a user question in the topic-scoping template.
#[must_use]
pub fn build_prompt(input: &str) -> String {
    format!("{PROMPT_PREAMBLE}\n\nUser question: {input}\n\n{PROMPT_REMINDER}")
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API key is not configured. Please check your environment variables.")]
    NotConfigured,
    #[error("Empty response received from the API")]
    EmptyResponse,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "E_CHAT_NOT_CONFIGURED",
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
            Self::Llm(e) => e.error_code(),
        }
    }
}

/// Dismissible error payload the client shows as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub description: String,
    pub status: &'static str,
}

impl ChatError {
    #[must_use]
    pub fn notification(&self) -> Notification {
        let title = match self {
            Self::NotConfigured => "Configuration Error",
            Self::EmptyResponse | Self::Llm(_) => "Error",
        };
        Notification { title, description: self.to_string(), status: "error" }
    }
}

// =============================================================================
// TRANSCRIPT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self { text: text.into(), sender, timestamp: OffsetDateTime::now_utc() }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    /// Offered only while the transcript holds just the welcome message.
    pub suggested_questions: Vec<&'static str>,
}

struct Conversation {
    messages: Vec<ChatMessage>,
    asked_follow_up: bool,
    timer: Option<JoinHandle<()>>,
    timer_generation: u64,
}

impl Conversation {
    fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(WELCOME_MESSAGE, Sender::Bot)],
            asked_follow_up: false,
            timer: None,
            timer_generation: 0,
        }
    }
}

type Conversations = Arc<Mutex<HashMap<Uuid, Conversation>>>;

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    pub max_tokens: u32,
    pub follow_up_after: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_MAX_TOKENS, follow_up_after: Duration::from_secs(DEFAULT_FOLLOW_UP_SECS) }
    }
}

#[derive(Clone)]
pub struct ChatService {
    conversations: Conversations,
    llm: Option<Arc<dyn LlmChat>>,
    config: ChatConfig,
}

impl ChatService {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, config: ChatConfig) -> Self {
        Self { conversations: Arc::default(), llm, config }
    }

    #[must_use]
    pub fn transcript(&self, user_id: Uuid) -> ChatTranscript {
        let mut conversations = lock(&self.conversations);
        let conversation = conversations.entry(user_id).or_insert_with(Conversation::new);
        let suggested_questions = if conversation.messages.len() == 1 { SUGGESTED_QUESTIONS.to_vec() } else { Vec::new() };
        ChatTranscript { messages: conversation.messages.clone(), suggested_questions }
    }

    /// Send one user turn and return the bot reply.
    ///
    /// Blank input is ignored and yields `Ok(None)`. The user message stays
    /// in the transcript even when the request fails.
    ///
    /// # Errors
    ///
    /// [`ChatError::NotConfigured`] without an LLM (nothing is appended),
    /// [`ChatError::EmptyResponse`] for an empty reply, and
    /// [`ChatError::Llm`] when the request itself fails.
    pub async fn send(&self, user_id: Uuid, input: &str) -> Result<Option<ChatMessage>, ChatError> {
        let llm = {
            let mut conversations = lock(&self.conversations);
            let conversation = conversations.entry(user_id).or_insert_with(Conversation::new);
            conversation.asked_follow_up = false;
            if input.trim().is_empty() {
                return Ok(None);
            }
            let llm = self.llm.clone().ok_or(ChatError::NotConfigured)?;
            conversation.messages.push(ChatMessage::new(input, Sender::User));
            llm
        };

        let prompt = Prompt { text: build_prompt(input), max_output_tokens: self.config.max_tokens };
        let completion = llm
            .complete(&prompt)
            .await
            .inspect_err(|e| tracing::warn!(%user_id, error = %e, "chat request failed"))?;

        if completion.text.is_empty() {
            tracing::warn!(%user_id, model = %completion.model, finish_reason = ?completion.finish_reason, "chat response was empty");
            return Err(ChatError::EmptyResponse);
        }
        tracing::info!(
            %user_id,
            model = %completion.model,
            prompt_tokens = completion.prompt_tokens,
            output_tokens = completion.output_tokens,
            "chat reply"
        );

        let reply = ChatMessage::new(completion.text, Sender::Bot);
        lock(&self.conversations)
            .entry(user_id)
            .or_insert_with(Conversation::new)
            .messages
            .push(reply.clone());
        Ok(Some(reply))
    }

    /// Drop the user's conversation and cancel its pending timer. The next
    /// transcript request starts over at the welcome message.
    pub fn end(&self, user_id: Uuid) {
        let Some(conversation) = lock(&self.conversations).remove(&user_id) else {
            return;
        };
        if let Some(timer) = conversation.timer {
            timer.abort();
        }
        tracing::debug!(%user_id, "conversation ended");
    }

    /// Input-change event: restart the inactivity timer.
    pub fn touch(&self, user_id: Uuid) {
        let mut conversations = lock(&self.conversations);
        let conversation = conversations.entry(user_id).or_insert_with(Conversation::new);

        if let Some(timer) = conversation.timer.take() {
            timer.abort();
        }
        conversation.timer_generation += 1;
        if conversation.messages.is_empty() || conversation.asked_follow_up {
            return;
        }

        let generation = conversation.timer_generation;
        let delay = self.config.follow_up_after;
        let shared = Arc::clone(&self.conversations);
        conversation.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut conversations = lock(&shared);
            let Some(conversation) = conversations.get_mut(&user_id) else {
                return;
            };
            if conversation.timer_generation != generation || conversation.asked_follow_up {
                return;
            }
            conversation.messages.push(ChatMessage::new(FOLLOW_UP_MESSAGE, Sender::Bot));
            conversation.asked_follow_up = true;
            conversation.timer = None;
            tracing::debug!(%user_id, "inactivity follow-up asked");
        }));
    }
}

fn lock(conversations: &Conversations) -> std::sync::MutexGuard<'_, HashMap<Uuid, Conversation>> {
    conversations
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
