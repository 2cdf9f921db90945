//! Session sweeper: background expiry for sessions nobody logs out of.
//!
//! DESIGN
//! ======
//! Expired tokens already fail validation on use. The sweeper drops the
//! ones never presented again, so their users' chat state and guest
//! accounts are released on a fixed cadence instead of accumulating.

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::state::AppState;

/// Spawn the sweep loop. The first sweep runs one interval after start.
pub fn spawn_session_sweeper(state: AppState) -> JoinHandle<()> {
    let every = state.config.session_sweep_every;
    info!(sweep_secs = every.as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let released = state.sweep_sessions().await;
            if released > 0 {
                debug!(released, remaining = state.sessions.len(), "expired sessions swept");
            }
        }
    })
}

#[cfg(test)]
#[path = "sweeper_test.rs"]
mod tests;
