use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn created_session_validates() {
    let store = SessionStore::default();
    let user_id = Uuid::new_v4();
    let token = store.create(user_id);
    assert_eq!(store.validate(&token), Some(user_id));
}

#[test]
fn unknown_token_is_rejected() {
    let store = SessionStore::default();
    assert_eq!(store.validate("nope"), None);
}

#[test]
fn deleted_session_no_longer_validates() {
    let store = SessionStore::default();
    let token = store.create(Uuid::new_v4());
    let user_id = store.validate(&token).unwrap();
    assert_eq!(store.delete(&token), Some(user_id));
    assert_eq!(store.validate(&token), None);
    assert_eq!(store.delete(&token), None);
}

#[test]
fn clones_share_sessions() {
    let store = SessionStore::default();
    let other = store.clone();
    let user_id = Uuid::new_v4();
    let token = store.create(user_id);
    assert_eq!(other.validate(&token), Some(user_id));
}

// =============================================================================
// expiry
// =============================================================================

#[tokio::test(start_paused = true)]
async fn session_expires_after_ttl() {
    let store = SessionStore::new(Duration::from_secs(60));
    let user_id = Uuid::new_v4();
    let token = store.create(user_id);

    tokio::time::sleep(Duration::from_secs(59)).await;
    assert_eq!(store.validate(&token), Some(user_id));
    assert!(store.has_session(user_id));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(store.validate(&token), None);
    assert!(!store.has_session(user_id));
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn prune_reports_users_without_live_sessions() {
    let store = SessionStore::new(Duration::from_secs(60));
    let (gone, kept) = (Uuid::new_v4(), Uuid::new_v4());
    let _ = store.create(gone);
    let _ = store.create(kept);

    tokio::time::sleep(Duration::from_secs(30)).await;
    let fresh = store.create(kept);
    tokio::time::sleep(Duration::from_secs(31)).await;

    assert_eq!(store.prune_expired(), vec![gone]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.validate(&fresh), Some(kept));
    assert!(store.prune_expired().is_empty());
}
