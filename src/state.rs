//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! account store and the LLM are trait objects so tests and alternative
//! backends can be swapped in without touching handlers.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::llm::LlmChat;
use crate::services::accounts::{AccountStore, InMemoryAccountStore};
use crate::services::chat::ChatService;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub sessions: SessionStore,
    pub chat: ChatService,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self::with_accounts(config, Arc::new(InMemoryAccountStore::new()), llm)
    }

    #[must_use]
    pub fn with_accounts(config: AppConfig, accounts: Arc<dyn AccountStore>, llm: Option<Arc<dyn LlmChat>>) -> Self {
        let chat = ChatService::new(llm.clone(), config.chat);
        let sessions = SessionStore::new(config.session_ttl);
        Self { accounts, sessions, chat, llm, config: Arc::new(config) }
    }

    /// Log out one session. When it was the user's last, their chat is
    /// discarded and a guest account is removed.
    pub async fn end_session(&self, token: &str) {
        if let Some(user_id) = self.sessions.delete(token) {
            self.release_user(user_id).await;
        }
    }

    /// Drop expired sessions and release the users left without one.
    /// Returns how many users were released.
    pub async fn sweep_sessions(&self) -> usize {
        let users = self.sessions.prune_expired();
        for user_id in &users {
            self.release_user(*user_id).await;
        }
        users.len()
    }

    async fn release_user(&self, user_id: Uuid) {
        if self.sessions.has_session(user_id) {
            return;
        }
        self.chat.end(user_id);
        if self.accounts.remove_guest(user_id).await {
            tracing::info!(%user_id, "guest account removed");
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
