//! HTTP server for the employee portal.
//!
//! Reads the configuration named by `PORTAL_CONFIG` (default
//! `./config/portal.yaml`) and serves the portal API.

use employee_portal::api::{AppState, create_router};
use employee_portal::config::ConfigLoader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_portal=info".into()),
        )
        .init();

    let config = ConfigLoader::load_from_env()?;
    let state = AppState::from_config(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %config.bind_address(), "Employee portal listening");

    axum::serve(listener, app).await?;
    Ok(())
}
