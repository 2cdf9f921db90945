//! Account store: users, credentials, and their profiles.
//!
//! DESIGN
//! ======
//! `AccountStore` is the seam handlers depend on; `InMemoryAccountStore` is
//! the only implementation and loses everything on restart. Emails are
//! normalized (trimmed, lowercased) before they are used as keys.
//!
//! Signup stores a salted SHA-256 digest of the password and login checks it.
//! Logging in with an email nobody signed up with still succeeds and creates
//! a guest account without a profile or credential. Guest accounts live only
//! as long as one of their sessions does; `remove_guest` drops them.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::session::bytes_to_hex;
use crate::error::ErrorCode;
use crate::profile::UserProfile;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("user not found: {0}")]
    NotFound(Uuid),
}

impl ErrorCode for AccountError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "E_INVALID_EMAIL",
            Self::EmailTaken => "E_EMAIL_TAKEN",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::NotFound(_) => "E_USER_NOT_FOUND",
        }
    }
}

#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    ///
    /// [`AccountError::EmailTaken`] when the email already has an account.
    async fn signup(&self, email: &str, password: &str, profile: Option<UserProfile>) -> Result<User, AccountError>;

    /// Authenticate, or create a bare account for an unseen email.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidCredentials`] when a signed-up account's
    /// password does not match.
    async fn login(&self, email: &str, password: &str) -> Result<User, AccountError>;

    /// Replace the stored profile.
    ///
    /// # Errors
    ///
    /// [`AccountError::NotFound`] for an unknown user id.
    async fn update_profile(&self, user_id: Uuid, profile: UserProfile) -> Result<User, AccountError>;

    async fn get(&self, user_id: Uuid) -> Option<User>;

    /// Delete the account if it was created by a login rather than a signup.
    /// Returns whether an account was removed.
    async fn remove_guest(&self, user_id: Uuid) -> bool;

    async fn count(&self) -> usize;
}

// =============================================================================
// CREDENTIALS
// =============================================================================

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

struct Credential {
    salt: String,
    digest: String,
}

impl Credential {
    fn new(password: &str) -> Self {
        let salt_bytes: [u8; 16] = rand::rng().random();
        let salt = bytes_to_hex(&salt_bytes);
        let digest = hash_password(&salt, password);
        Self { salt, digest }
    }

    fn verify(&self, password: &str) -> bool {
        hash_password(&self.salt, password) == self.digest
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

struct Account {
    user: User,
    credential: Option<Credential>,
}

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, Account>,
    by_email: HashMap<String, Uuid>,
}

impl Accounts {
    fn insert(&mut self, email: String, credential: Option<Credential>, profile: Option<UserProfile>) -> User {
        let user = User { id: Uuid::new_v4(), email: email.clone(), profile };
        self.by_email.insert(email, user.id);
        self.by_id.insert(user.id, Account { user: user.clone(), credential });
        user
    }
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<Accounts>,
}

impl InMemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn signup(&self, email: &str, password: &str, profile: Option<UserProfile>) -> Result<User, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
        let mut accounts = self.inner.write().await;
        if accounts.by_email.contains_key(&email) {
            return Err(AccountError::EmailTaken);
        }
        let user = accounts.insert(email, Some(Credential::new(password)), profile);
        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
        let mut accounts = self.inner.write().await;

        let existing = accounts
            .by_email
            .get(&email)
            .and_then(|id| accounts.by_id.get(id));
        if let Some(account) = existing {
            let verified = account
                .credential
                .as_ref()
                .is_none_or(|c| c.verify(password));
            if !verified {
                tracing::warn!(user_id = %account.user.id, "login rejected");
                return Err(AccountError::InvalidCredentials);
            }
            return Ok(account.user.clone());
        }

        let user = accounts.insert(email, None, None);
        tracing::info!(user_id = %user.id, "guest account created on first login");
        Ok(user)
    }

    async fn update_profile(&self, user_id: Uuid, profile: UserProfile) -> Result<User, AccountError> {
        let mut accounts = self.inner.write().await;
        let account = accounts
            .by_id
            .get_mut(&user_id)
            .ok_or(AccountError::NotFound(user_id))?;
        account.user.profile = Some(profile);
        Ok(account.user.clone())
    }

    async fn get(&self, user_id: Uuid) -> Option<User> {
        self.inner
            .read()
            .await
            .by_id
            .get(&user_id)
            .map(|a| a.user.clone())
    }

    async fn remove_guest(&self, user_id: Uuid) -> bool {
        let mut accounts = self.inner.write().await;
        let is_guest = accounts
            .by_id
            .get(&user_id)
            .is_some_and(|a| a.credential.is_none());
        if !is_guest {
            return false;
        }
        if let Some(account) = accounts.by_id.remove(&user_id) {
            accounts.by_email.remove(&account.user.email);
        }
        true
    }

    async fn count(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
