// src/bin/pokerit_server.rs

use pokerit::infra::{init_logging, AppConfig};
use pokerit::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);
    let app = router(state);

    tracing::info!(addr = %config.bind_addr, region = %config.capture_region, "pokerit listening");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
