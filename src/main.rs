//! Host for the placement web frontend.
//!
//! Serves the server-rendered Leptos app and its `/pkg` assets, and forwards
//! `/api/*` to the external placement API so the browser only ever talks to
//! one origin.

mod config;
mod routes;
mod state;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("HTTP client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "placement host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = HostConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, api_base_url = %config.api_base_url, "placement listening");
    axum::serve(listener, app).await?;
    Ok(())
}
