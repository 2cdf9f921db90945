//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses opaque random tokens carried in an HttpOnly cookie. Tokens
//! map to user ids in process memory, so every session ends on restart.
//! Each session expires a fixed TTL after creation. Expired tokens fail
//! validation immediately and are removed by `prune_expired`.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

struct Session {
    user_id: Uuid,
    expires_at: Instant,
}

impl Session {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Token → user id map shared by all handlers.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::default(), ttl }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a session for the given user, returning the token.
    #[must_use]
    pub fn create(&self, user_id: Uuid) -> String {
        let token = generate_token();
        let expires_at = Instant::now() + self.ttl;
        self.sessions()
            .insert(token.clone(), Session { user_id, expires_at });
        token
    }

    /// Resolve a live token to its user id. An expired token is dropped.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<Uuid> {
        let mut sessions = self.sessions();
        let session = sessions.get(token)?;
        if session.is_live(Instant::now()) {
            return Some(session.user_id);
        }
        sessions.remove(token);
        None
    }

    /// Delete a session by token, returning its user. Unknown tokens are ignored.
    pub fn delete(&self, token: &str) -> Option<Uuid> {
        self.sessions()
            .remove(token)
            .map(|s| s.user_id)
    }

    /// Whether the user still holds any live session.
    #[must_use]
    pub fn has_session(&self, user_id: Uuid) -> bool {
        let now = Instant::now();
        self.sessions()
            .values()
            .any(|s| s.user_id == user_id && s.is_live(now))
    }

    /// Remove expired sessions. Returns the users left with no live session.
    pub fn prune_expired(&self) -> Vec<Uuid> {
        let now = Instant::now();
        let mut sessions = self.sessions();

        let mut expired_users = HashSet::new();
        sessions.retain(|_, s| {
            let live = s.is_live(now);
            if !live {
                expired_users.insert(s.user_id);
            }
            live
        });
        for session in sessions.values() {
            expired_users.remove(&session.user_id);
        }
        expired_users.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
