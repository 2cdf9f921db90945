use std::time::Duration;

use super::*;
use crate::config::AppConfig;

fn short_lived_state() -> AppState {
    let config = AppConfig {
        session_ttl: Duration::from_secs(60),
        session_sweep_every: Duration::from_secs(10),
        ..AppConfig::default()
    };
    AppState::new(config, None)
}

#[tokio::test(start_paused = true)]
async fn sweeper_reclaims_expired_guest_accounts() {
    let state = short_lived_state();
    for i in 0..50 {
        let guest = state
            .accounts
            .login(&format!("guest{i}@example.com"), "anything")
            .await
            .unwrap();
        let _ = state.sessions.create(guest.id);
    }
    assert_eq!(state.accounts.count().await, 50);

    let sweeper = spawn_session_sweeper(state.clone());
    tokio::time::sleep(Duration::from_secs(75)).await;

    assert!(state.sessions.is_empty());
    assert_eq!(state.accounts.count().await, 0);
    sweeper.abort();
}

#[tokio::test(start_paused = true)]
async fn sweeper_leaves_live_sessions() {
    let state = short_lived_state();
    let guest = state.accounts.login("guest@example.com", "anything").await.unwrap();
    let token = state.sessions.create(guest.id);

    let sweeper = spawn_session_sweeper(state.clone());
    tokio::time::sleep(Duration::from_secs(35)).await;

    assert_eq!(state.sessions.validate(&token), Some(guest.id));
    assert_eq!(state.accounts.count().await, 1);
    sweeper.abort();
}
