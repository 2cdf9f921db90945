mod catalog;
mod config;
mod error;
mod llm;
mod profile;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, LlmChat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let port = config.port;

    let llm: Option<Arc<dyn LlmChat>> = match GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "llm client ready");
            let client: Arc<dyn LlmChat> = Arc::new(client);
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "llm client not configured; chat disabled");
            None
        }
    };

    let state = state::AppState::new(config, llm);
    let _sweeper = services::sweeper::spawn_session_sweeper(state.clone());
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "fitcoach listening");
    axum::serve(listener, app).await?;
    Ok(())
}
